use std::io::{self, Write};
use std::process;

mod display;
mod input;
mod models;
mod services;

use display::display_activity;
use input::read_username;
use services::github::ActivityClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    print!("Enter GitHub username: ");
    io::stdout().flush()?;

    let Some(username) = read_username(io::stdin().lock()) else {
        eprintln!("Username cannot be empty");
        process::exit(1);
    };

    let client = ActivityClient::new()?;

    // Fetch failures are diagnostics, not fatal errors: the display stage
    // treats the empty body as "nothing to display" and the process exits 0.
    let body = match client.fetch_public_events(&username).await {
        Ok(body) => body,
        Err(e) => {
            eprintln!("{}", e);
            String::new()
        }
    };

    display_activity(&body, &mut io::stdout())?;

    Ok(())
}
