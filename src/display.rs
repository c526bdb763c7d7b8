use std::io::{self, Write};

use serde_json::Value;

use crate::models::event::{ActivityEvent, SEPARATOR_WIDTH};

/// Formats the raw response body onto `out`.
///
/// An empty body and a body that fails to parse are reported on stderr and
/// produce no output; neither crashes the program. Events print in the order
/// the API returned them.
pub fn display_activity(body: &str, out: &mut impl Write) -> io::Result<()> {
    if body.is_empty() {
        eprintln!("No data to display");
        return Ok(());
    }

    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("JSON parsing error: {}", e);
            return Ok(());
        }
    };

    let events = match parsed.as_array() {
        Some(events) if !events.is_empty() => events,
        _ => {
            writeln!(out, "No recent activity found.")?;
            return Ok(());
        }
    };

    writeln!(out, "\n\nRecent GitHub Activity:")?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    for event in events {
        write!(out, "{}", ActivityEvent::from_value(event))?;
    }

    Ok(())
}
