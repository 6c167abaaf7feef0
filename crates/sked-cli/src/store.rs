//! Flat-file persistence for schedules.
//!
//! Schedule files hold one task per line as
//! `scheduleName;MM/dd/yyyy;hh:mm AM/PM;description`. Exports are written as
//! a comma-separated table next to the schedule file.

use chrono::Utc;
use sked_core::registry::Registry;
use sked_core::task::{FieldWarning, Task, DATE_FORMAT, TIME_FORMAT};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const FILE_EXTENSION: &str = "txt";
pub const CSV_HEADER: &str = "ScheduleName,Date,Time,Task";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{} does not exist", .0.display())]
    Missing(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot store {field} {value:?}: {reason}")]
    Unrepresentable {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl StoreError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Outcome of [`load`]. Tasks with an unreadable date or time are still
/// loaded; their warnings are kept with the line they came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    pub warnings: Vec<(usize, FieldWarning)>,
}

/// One line of a schedule file, split into its four fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub schedule: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub description: &'a str,
}

/// Splits a line into its fields. The description is the remainder after
/// the third separator, so it may itself contain `;`.
pub fn parse_record(line: &str) -> Option<Record<'_>> {
    let mut fields = line.splitn(4, ';');
    let record = Record {
        schedule: fields.next()?,
        date: fields.next()?,
        time: fields.next()?,
        description: fields.next()?,
    };
    (!record.description.is_empty()).then_some(record)
}

/// Checks that a schedule name and description survive a write and a
/// later [`load`] unchanged.
pub fn check_record(schedule: &str, description: &str) -> Result<(), StoreError> {
    let unrepresentable = |field, value: &str, reason| StoreError::Unrepresentable {
        field,
        value: value.to_string(),
        reason,
    };

    if schedule.trim().is_empty() {
        return Err(unrepresentable("schedule name", schedule, "it is empty"));
    }
    if schedule.contains(';') {
        return Err(unrepresentable("schedule name", schedule, "it contains ';'"));
    }
    if schedule.trim() != schedule {
        return Err(unrepresentable(
            "schedule name",
            schedule,
            "it starts or ends with whitespace",
        ));
    }
    if description.trim().is_empty() {
        return Err(unrepresentable("description", description, "it is empty"));
    }
    for (field, value) in [("schedule name", schedule), ("description", description)] {
        if value.contains(['\n', '\r']) {
            return Err(unrepresentable(field, value, "it contains a line break"));
        }
    }
    Ok(())
}

pub fn format_record(schedule: &str, task: &Task) -> String {
    format!(
        "{};{};{};{}",
        schedule,
        task.date().format(DATE_FORMAT),
        task.time().format(TIME_FORMAT),
        task.description()
    )
}

/// Reads every record of `path` into `registry`, creating schedules on
/// demand. Malformed lines are skipped and counted.
pub fn load(path: &Path, registry: &mut Registry) -> Result<LoadReport, StoreError> {
    if !path.exists() {
        return Err(StoreError::Missing(path.to_path_buf()));
    }
    let file = File::open(path).map_err(StoreError::io(path))?;
    let mut report = LoadReport::default();

    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(StoreError::io(path))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(record) = parse_record(line) else {
            tracing::warn!(line_number = number + 1, "Skipping malformed line: {line}");
            report.skipped += 1;
            continue;
        };

        let (task, warnings) = registry.new_task(record.description, record.date, record.time);
        registry.get_or_create(record.schedule).0.insert_sorted(task);
        report.loaded += 1;
        report
            .warnings
            .extend(warnings.into_iter().map(|warning| (number + 1, warning)));
    }

    tracing::debug!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        warnings = report.warnings.len(),
        "Schedule file loaded"
    );
    Ok(report)
}

pub fn append(path: &Path, schedule: &str, task: &Task) -> Result<(), StoreError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(StoreError::io(path))?;
    writeln!(file, "{}", format_record(schedule, task)).map_err(StoreError::io(path))
}

/// The export target for a schedule file: same location, `.csv` extension.
pub fn csv_path_for(path: &Path) -> PathBuf {
    path.with_extension("csv")
}

/// Writes every schedule's tasks, in traversal order, as a CSV table.
/// Returns the number of task rows written.
pub fn export_csv(path: &Path, registry: &Registry) -> Result<usize, StoreError> {
    let file = File::create(path).map_err(StoreError::io(path))?;
    let mut writer = BufWriter::new(file);
    let mut rows = 0;

    writeln!(writer, "{CSV_HEADER}").map_err(StoreError::io(path))?;
    for schedule in registry {
        for task in schedule {
            writeln!(
                writer,
                "{},{},{},{}",
                schedule.name(),
                task.date().format("%Y-%m-%d"),
                task.time().format("%H:%M"),
                task.description().replace(',', " ")
            )
            .map_err(StoreError::io(path))?;
            rows += 1;
        }
    }
    writer.flush().map_err(StoreError::io(path))?;
    Ok(rows)
}

/// Sorted names of the schedule files in `dir`. A missing directory has none.
pub fn list_schedule_files(dir: &Path) -> Result<Vec<String>, StoreError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::io(dir)(e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(StoreError::io(dir))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == FILE_EXTENSION) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Adds the `.txt` extension when missing. A blank name becomes a
/// timestamped default.
pub fn normalize_file_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        format!("schedule_{}.{FILE_EXTENSION}", Utc::now().timestamp_millis())
    } else if name.ends_with(&format!(".{FILE_EXTENSION}")) {
        name.to_string()
    } else {
        format!("{name}.{FILE_EXTENSION}")
    }
}

/// Creates `dir` and an empty schedule file inside it unless they already
/// exist. Returns the file path.
pub fn create_schedule_file(dir: &Path, name: &str) -> Result<PathBuf, StoreError> {
    let path = dir.join(normalize_file_name(name));
    ensure_schedule_file(&path)?;
    Ok(path)
}

/// Creates `path` and its parent directories when they do not exist yet.
pub fn ensure_schedule_file(path: &Path) -> Result<(), StoreError> {
    if path.exists() {
        tracing::info!(path = %path.display(), "File already exists, using existing one");
        return Ok(());
    }
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(StoreError::io(dir))?;
    }
    File::create(path).map_err(StoreError::io(path))?;
    tracing::info!(path = %path.display(), "File created");
    Ok(())
}
