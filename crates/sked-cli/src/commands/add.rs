use anyhow::{anyhow, Result};
use owo_colors::{OwoColorize, Style};
use sked_core::registry::Lookup;
use sked_core::task::{FieldWarning, Task};

use crate::cli::AddCommand;
use crate::session::{AddOutcome, Session};

pub fn add_task(session: &mut Session, command: AddCommand) -> Result<()> {
    let outcome = session.add_task(
        &command.schedule,
        &command.description,
        &command.date,
        &command.time,
    )?;

    match outcome {
        AddOutcome::Added {
            task,
            schedule,
            lookup,
            warnings,
        } => {
            print_warnings(&warnings);
            print_added(&task, &schedule, lookup);
            Ok(())
        }
        AddOutcome::Conflict {
            existing, warnings, ..
        } => {
            print_warnings(&warnings);
            Err(anyhow!(
                "Schedule conflict: a task already exists at the same date and time: {existing}"
            ))
        }
    }
}

pub fn print_outcome(outcome: &AddOutcome) {
    match outcome {
        AddOutcome::Added {
            task,
            schedule,
            lookup,
            warnings,
        } => {
            print_warnings(warnings);
            print_added(task, schedule, *lookup);
        }
        AddOutcome::Conflict {
            existing,
            rejected,
            warnings,
        } => {
            print_warnings(warnings);
            print_conflict(existing, rejected);
        }
    }
}

pub fn print_warnings(warnings: &[FieldWarning]) {
    let warning_style = Style::new().yellow().bold();
    for warning in warnings {
        println!("{} {}", "⚠".style(warning_style), warning);
    }
    if !warnings.is_empty() {
        println!("  Fields that could not be read keep the current date or time.");
    }
}

fn print_added(task: &Task, schedule: &str, lookup: Lookup) {
    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();

    if lookup == Lookup::Created {
        println!(
            "{} New schedule created: {}",
            "✨".style(info_style),
            schedule.bright_white().bold()
        );
    }
    println!(
        "{} Added task to {}: {}",
        "✓".style(success_style),
        schedule.bright_white().bold(),
        task
    );
    println!("  {} Task ID: {}", "→".style(info_style), task.id().yellow());
    println!("  {} Task written to file", "→".style(info_style));
}

fn print_conflict(existing: &Task, rejected: &Task) {
    let warning_style = Style::new().yellow().bold();
    println!("{} Schedule conflict detected!", "⚠".style(warning_style));
    println!("A task already exists at the same date and time:");
    println!("  {} {} (ID {})", "→".yellow(), existing, existing.id());
    println!("  Not added: {}", rejected.description().bright_black());
}
