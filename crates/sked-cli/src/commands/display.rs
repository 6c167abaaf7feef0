use anyhow::Result;
use owo_colors::{OwoColorize, Style};

use crate::session::Session;
use crate::views::table::display_registry;

pub fn display_schedules(session: &Session) -> Result<()> {
    display_registry(&session.registry);
    Ok(())
}

/// Reports the fields that could not be read while loading the file.
/// Those tasks hold the date or time of the moment they were loaded.
pub fn print_load_warnings(session: &Session) {
    let warnings = &session.report().warnings;
    if warnings.is_empty() {
        return;
    }

    let warning_style = Style::new().yellow().bold();
    for (line, warning) in warnings {
        println!("{} Line {}: {}", "⚠".style(warning_style), line, warning);
    }
    println!("  Unreadable fields were replaced with the current date or time.");
}
