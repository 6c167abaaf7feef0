use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use owo_colors::{OwoColorize, Style};
use sked_core::task::TaskId;
use std::path::PathBuf;

use crate::commands::add::print_outcome;
use crate::commands::display::{display_schedules, print_load_warnings};
use crate::commands::export::write_export;
use crate::commands::remove::{remove_schedule, remove_task};
use crate::commands::reverse::reverse_schedule;
use crate::config::Config;
use crate::session::Session;
use crate::store::{create_schedule_file, list_schedule_files};
use crate::views::table::display_schedule;

const MENU_ITEMS: [&str; 7] = [
    "1. Display all schedules",
    "2. Reverse a schedule",
    "3. Insert new task",
    "4. Remove task by ID",
    "5. Remove schedule",
    "6. Export schedules to CSV",
    "7. Exit",
];

/// Runs the interactive session until the user picks "Exit".
pub fn run_menu(config: &Config, file: Option<&str>) -> Result<()> {
    let path = match file {
        Some(name) => create_schedule_file(&config.data_dir, name)?,
        None => choose_file(config)?,
    };
    let mut session = Session::open(path)?;
    print_load_summary(&session);

    loop {
        let choice = Select::new()
            .with_prompt("Main Menu - Schedule Manager")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        let result = match choice {
            0 => display_schedules(&session),
            1 => reverse_menu(&mut session),
            2 => insert_menu(&mut session),
            3 => remove_task_menu(&mut session),
            4 => remove_schedule_menu(&mut session),
            5 => write_export(&session),
            _ => {
                println!("Exiting sked. Goodbye!");
                return Ok(());
            }
        };

        // A failed action is reported and the menu is shown again
        if let Err(e) = result {
            crate::handle_error(e);
        }
    }
}

fn choose_file(config: &Config) -> Result<PathBuf> {
    let open_existing = Select::new()
        .with_prompt("Do you want to open an existing file or create a new one?")
        .items(&["Open an existing file", "Create a new file"])
        .default(0)
        .interact()?
        == 0;

    if open_existing {
        let files = list_schedule_files(&config.data_dir)?;
        if files.is_empty() {
            println!(
                "{} No files found in {}. Creating a new file instead.",
                "⚠".yellow(),
                config.data_dir.display()
            );
        } else {
            let index = Select::new()
                .with_prompt("Which file do you want to open?")
                .items(&files)
                .default(0)
                .interact()?;
            let path = config.data_dir.join(&files[index]);
            println!("Opening file: {}", path.display().cyan());
            return Ok(path);
        }
    }

    let name: String = Input::new()
        .with_prompt("Name of the new file (without extension)")
        .allow_empty(true)
        .interact_text()?;
    let path = create_schedule_file(&config.data_dir, &name)?;
    println!("Using file: {}", path.display().cyan());
    Ok(path)
}

fn print_load_summary(session: &Session) {
    let success_style = Style::new().green().bold();
    let report = session.report();
    println!(
        "{} Loaded {} task(s) across {} schedule(s) from {}",
        "✓".style(success_style),
        session.registry.total_tasks(),
        session.registry.len(),
        session.path().display()
    );
    if report.skipped > 0 {
        println!("{} Skipped {} malformed line(s).", "⚠".yellow(), report.skipped);
    }
    print_load_warnings(session);
}

fn reverse_menu(session: &mut Session) -> Result<()> {
    match session.registry.len() {
        0 => println!("No schedules available to reverse."),
        1 => reverse_schedule(session, 0)?,
        count => loop {
            let mut items: Vec<&str> = session.registry.iter().map(|s| s.name()).collect();
            items.push("Exit");
            let choice = Select::new()
                .with_prompt("Which schedule would you like to reverse?")
                .items(&items)
                .default(count)
                .interact()?;
            if choice == count {
                break;
            }
            reverse_schedule(session, choice)?;
        },
    }
    Ok(())
}

fn insert_menu(session: &mut Session) -> Result<()> {
    let schedule: String = Input::new()
        .with_prompt("Which schedule would you like to insert into?")
        .interact_text()?;
    if let Some(existing) = session.registry.schedule(&schedule) {
        println!("Adding task to: {}", existing.name().bright_white().bold());
    }

    let date: String = Input::new()
        .with_prompt("Enter date (MM/dd/yyyy)")
        .interact_text()?;
    let time: String = Input::new()
        .with_prompt("Enter time (hh:mm AM/PM)")
        .interact_text()?;
    let description: String = Input::new()
        .with_prompt("Enter task description")
        .interact_text()?;

    let outcome = session.add_task(&schedule, &description, &date, &time)?;
    print_outcome(&outcome);
    Ok(())
}

fn remove_task_menu(session: &mut Session) -> Result<()> {
    if session.registry.is_empty() {
        println!("No schedules available to modify.");
        return Ok(());
    }

    let name: String = Input::new()
        .with_prompt("Which schedule would you like to delete a task from?")
        .interact_text()?;
    let Some(schedule) = session.registry.schedule(&name) else {
        println!("{} Schedule not found: {}", "⚠".yellow(), name);
        return Ok(());
    };
    display_schedule(schedule);

    let id: TaskId = Input::new()
        .with_prompt("Which task ID would you like to delete?")
        .interact_text()?;
    if !schedule.contains(id) {
        println!("{} ID {} not found in schedule: {}", "⚠".yellow(), id, name);
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Are you sure you want to delete task {id}?"))
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Deletion cancelled.");
        return Ok(());
    }
    remove_task(session, &name, id)
}

fn remove_schedule_menu(session: &mut Session) -> Result<()> {
    if session.registry.is_empty() {
        println!("No schedules available to remove.");
        return Ok(());
    }

    let name: String = Input::new()
        .with_prompt("Which schedule would you like to remove?")
        .interact_text()?;
    if session.registry.find_by_name(&name).is_none() {
        println!("{} Schedule '{}' does not exist.", "⚠".yellow(), name);
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Are you sure you want to remove schedule '{name}'?"))
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Removal cancelled.");
        return Ok(());
    }
    remove_schedule(session, &name)
}
