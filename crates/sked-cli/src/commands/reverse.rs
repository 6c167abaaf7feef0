use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use sked_core::error::CoreError;

use crate::session::Session;

/// Reverses the schedule at `index`. An empty schedule is reported, not
/// treated as a failure.
pub fn reverse_schedule(session: &mut Session, index: usize) -> Result<()> {
    let schedule = session
        .registry
        .get_mut(index)
        .ok_or_else(|| CoreError::ScheduleNotFound(format!("#{index}")))?;

    match schedule.reverse() {
        Ok(()) => {
            let success_style = Style::new().green().bold();
            println!(
                "{} Schedule '{}' has been reversed.",
                "🔄".style(success_style),
                schedule.name().bright_white().bold()
            );
            Ok(())
        }
        Err(CoreError::EmptySchedule(name)) => {
            println!("{} Schedule '{}' is empty, nothing to reverse.", "⚠".yellow(), name);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
