use anyhow::Result;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use sked_core::error::CoreError;

mod cli;
mod commands;
mod config;
mod session;
mod store;
mod views;

use cli::{Cli, Commands};
use session::{resolve_path, Session};

fn main() {
    let config = config::Config::new().unwrap_or_else(|e| {
        eprintln!("{} Ignoring invalid configuration: {}", "Warning:".yellow().bold(), e);
        config::Config::default()
    });
    init_logging(&config.log_level);

    let cli = Cli::parse();
    if let Err(e) = run(cli, &config) {
        handle_error(e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so they never mix with tables on stdout.
fn init_logging(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, config: &config::Config) -> Result<()> {
    let file = cli.file.as_deref();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::run_menu(config, file),
        Commands::Files => commands::files::list_files(config),
        Commands::Display => {
            let session = Session::open(resolve_path(config, file)?)?;
            commands::display::print_load_warnings(&session);
            commands::display::display_schedules(&session)
        }
        Commands::Add(command) => {
            let path = resolve_path(config, file)?;
            store::ensure_schedule_file(&path)?;
            let mut session = Session::open(path)?;
            commands::add::add_task(&mut session, command)
        }
        Commands::Export(command) => {
            let mut session = Session::open(resolve_path(config, file)?)?;
            commands::display::print_load_warnings(&session);
            commands::export::export_schedules(&mut session, command)
        }
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::TaskNotFound { id, schedule } => {
                eprintln!(
                    "{} Task ID {} does not exist in schedule '{}'.",
                    "Error:".style(error_style),
                    id.yellow(),
                    schedule
                );
            }
            CoreError::ScheduleNotFound(name) => {
                eprintln!(
                    "{} Schedule not found: {}",
                    "Error:".style(error_style),
                    name.yellow()
                );
            }
            CoreError::EmptySchedule(name) => {
                eprintln!(
                    "{} Schedule '{}' is empty.",
                    "Error:".style(error_style),
                    name.yellow()
                );
            }
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
