use anyhow::{anyhow, Result};
use sked_core::registry::{Lookup, Registry};
use sked_core::task::{FieldWarning, Task};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::store::{self, LoadReport, StoreError};

/// What happened to a task submitted through [`Session::add_task`].
#[derive(Debug)]
pub enum AddOutcome {
    Added {
        task: Task,
        schedule: String,
        lookup: Lookup,
        warnings: Vec<FieldWarning>,
    },
    Conflict {
        existing: Task,
        rejected: Task,
        warnings: Vec<FieldWarning>,
    },
}

/// The registry loaded from one schedule file, plus that file's location.
#[derive(Debug)]
pub struct Session {
    pub registry: Registry,
    path: PathBuf,
    report: LoadReport,
}

impl Session {
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let mut registry = Registry::new();
        let report = store::load(&path, &mut registry)?;
        Ok(Self {
            registry,
            path,
            report,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Inserts a new task unless its timestamp is already taken in that
    /// schedule or its fields cannot be written to the schedule file.
    ///
    /// The record is appended to the file before the task enters the
    /// registry, so a failed write leaves the session unchanged.
    pub fn add_task(
        &mut self,
        schedule_name: &str,
        description: &str,
        date_text: &str,
        time_text: &str,
    ) -> Result<AddOutcome, StoreError> {
        store::check_record(schedule_name, description)?;
        let (task, warnings) = self.registry.new_task(description, date_text, time_text);

        let occupied = self
            .registry
            .schedule(schedule_name)
            .and_then(|schedule| schedule.find_by_timestamp(task.timestamp()));
        if let Some(existing) = occupied {
            tracing::warn!(
                schedule = schedule_name,
                existing = %existing.id(),
                "Schedule conflict detected: {existing}"
            );
            return Ok(AddOutcome::Conflict {
                existing: existing.clone(),
                rejected: task,
                warnings,
            });
        }

        store::append(&self.path, schedule_name, &task)?;

        let (schedule, lookup) = self.registry.get_or_create(schedule_name);
        let added = task.clone();
        match schedule.insert(task) {
            Ok(_) => Ok(AddOutcome::Added {
                task: added,
                schedule: schedule.name().to_string(),
                lookup,
                warnings,
            }),
            Err(conflict) => Ok(AddOutcome::Conflict {
                existing: conflict.existing,
                rejected: conflict.rejected,
                warnings,
            }),
        }
    }

    pub fn export(&self) -> Result<(PathBuf, usize), StoreError> {
        let csv_path = store::csv_path_for(&self.path);
        let rows = store::export_csv(&csv_path, &self.registry)?;
        Ok((csv_path, rows))
    }
}

/// Picks the schedule file for a non-interactive command: `--file` first,
/// then `default_file` from the configuration.
pub fn resolve_path(config: &Config, file: Option<&str>) -> Result<PathBuf> {
    let name = file
        .or(config.default_file.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            anyhow!(
                "No schedule file selected. \
                 Pass --file <NAME> or set default_file in sked.toml."
            )
        })?;
    Ok(config.data_dir.join(store::normalize_file_name(name)))
}
