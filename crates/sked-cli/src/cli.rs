use clap::{Parser, Subcommand};

/// Manage named schedules of dated, timed tasks
#[derive(Parser, Debug)]
#[command(name = "sked", author, version, about, long_about = None)]
pub struct Cli {
    /// Schedule file inside the data directory (".txt" is added when missing)
    #[arg(short, long, global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive menu (default)
    Menu,
    /// Show every schedule and its tasks
    Display,
    /// Add a task to a schedule, creating the schedule if needed
    Add(AddCommand),
    /// Export all schedules to a CSV file next to the schedule file
    Export(ExportCommand),
    /// List the schedule files in the data directory
    Files,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The schedule to add the task to
    pub schedule: String,
    /// The task description
    pub description: String,
    /// The date of the task (MM/dd/yyyy)
    #[arg(short, long)]
    pub date: String,
    /// The time of the task (hh:mm AM/PM)
    #[arg(short, long)]
    pub time: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportCommand {
    /// Reverse these schedules before exporting
    #[arg(long, num_args = 1..)]
    pub reverse: Vec<String>,
}
