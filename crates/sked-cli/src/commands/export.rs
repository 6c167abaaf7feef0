use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use sked_core::error::CoreError;

use crate::cli::ExportCommand;
use crate::commands::reverse::reverse_schedule;
use crate::session::Session;

pub fn export_schedules(session: &mut Session, command: ExportCommand) -> Result<()> {
    for name in &command.reverse {
        let index = session
            .registry
            .find_by_name(name)
            .ok_or_else(|| CoreError::ScheduleNotFound(name.clone()))?;
        reverse_schedule(session, index)?;
    }
    write_export(session)
}

pub fn write_export(session: &Session) -> Result<()> {
    if session.registry.is_empty() {
        println!("No schedules available to export.");
        return Ok(());
    }

    let (path, rows) = session.export()?;
    let success_style = Style::new().green().bold();
    println!(
        "{} Exported {} task(s) to: {}",
        "✓".style(success_style),
        rows,
        path.display().cyan()
    );
    Ok(())
}
