use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Date pattern used for input and for the flat-file records (MM/dd/yyyy).
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Time-of-day pattern used for input and for the flat-file records (hh:mm AM/PM).
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Identifier of a task, unique for the lifetime of the [`IdGenerator`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(TaskId)
    }
}

/// Hands out strictly increasing task ids. Ids are never reused, even after
/// the task that carried one has been removed.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> TaskId {
        self.last += 1;
        TaskId(self.last)
    }
}

/// Non-fatal problem found while reading a task field from text.
/// The field it refers to keeps its previous value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldWarning {
    #[error("Invalid date '{0}'. Please use MM/dd/yyyy (Ex: 10/20/2025).")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Please use hh:mm AM/PM (Ex: 02:30 PM).")]
    InvalidTime(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    date: NaiveDate,
    time: NaiveTime,
}

impl Task {
    pub fn new(
        id: TaskId,
        description: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            date,
            time,
        }
    }

    /// Builds a task from user or file text.
    ///
    /// Fields that fail to parse keep the value taken from `fallback`, and a
    /// [`FieldWarning`] is returned for each of them. Construction itself
    /// never fails.
    pub fn from_text(
        id: TaskId,
        description: impl Into<String>,
        date_text: &str,
        time_text: &str,
        fallback: NaiveDateTime,
    ) -> (Self, Vec<FieldWarning>) {
        let mut task = Self::new(id, description, fallback.date(), fallback.time());
        let warnings = [task.set_date_text(date_text), task.set_time_text(time_text)]
            .into_iter()
            .filter_map(Result::err)
            .collect();
        (task, warnings)
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Sort and conflict key: the date combined with the time of day.
    pub fn timestamp(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.time)
    }

    pub fn set_date_text(&mut self, text: &str) -> Result<(), FieldWarning> {
        match parse_date(text) {
            Ok(date) => {
                self.date = date;
                Ok(())
            }
            Err(warning) => {
                tracing::warn!(task = %self.id, "{warning}");
                Err(warning)
            }
        }
    }

    /// The meridiem marker is matched case-insensitively ("pm" == "PM").
    pub fn set_time_text(&mut self, text: &str) -> Result<(), FieldWarning> {
        match parse_time(text) {
            Ok(time) => {
                self.time = time;
                Ok(())
            }
            Err(warning) => {
                tracing::warn!(task = %self.id, "{warning}");
                Err(warning)
            }
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {} : {}",
            self.date.format(DATE_FORMAT),
            self.time.format(TIME_FORMAT),
            self.description
        )
    }
}

pub fn parse_date(text: &str) -> Result<NaiveDate, FieldWarning> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| FieldWarning::InvalidDate(text.to_string()))
}

pub fn parse_time(text: &str) -> Result<NaiveTime, FieldWarning> {
    NaiveTime::parse_from_str(&text.trim().to_uppercase(), TIME_FORMAT)
        .map_err(|_| FieldWarning::InvalidTime(text.to_string()))
}
