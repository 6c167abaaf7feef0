use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use sked_core::error::CoreError;
use sked_core::task::TaskId;

use crate::session::Session;

pub fn remove_task(session: &mut Session, schedule_name: &str, id: TaskId) -> Result<()> {
    let schedule = session
        .registry
        .schedule_mut(schedule_name)
        .ok_or_else(|| CoreError::ScheduleNotFound(schedule_name.to_string()))?;

    let removed = schedule.remove_by_id(id)?;
    let success_style = Style::new().green().bold();
    println!(
        "{} Task '{}' (ID {}) removed from schedule: {}",
        "✓".style(success_style),
        removed.description(),
        removed.id().yellow(),
        schedule.name()
    );
    Ok(())
}

pub fn remove_schedule(session: &mut Session, schedule_name: &str) -> Result<()> {
    let removed = session.registry.remove_by_name(schedule_name)?;
    let success_style = Style::new().green().bold();
    println!(
        "{} Schedule '{}' removed along with {} task(s).",
        "✓".style(success_style),
        removed.name(),
        removed.len()
    );
    Ok(())
}
