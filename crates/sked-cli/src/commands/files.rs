use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::store::list_schedule_files;

pub fn list_files(config: &Config) -> Result<()> {
    let files = list_schedule_files(&config.data_dir)?;
    if files.is_empty() {
        println!("No schedule files found in {}", config.data_dir.display());
        return Ok(());
    }

    println!("Available schedule files in {}:", config.data_dir.display());
    for (position, name) in files.iter().enumerate() {
        println!(" {}. {}", (position + 1).yellow(), name);
    }
    Ok(())
}
