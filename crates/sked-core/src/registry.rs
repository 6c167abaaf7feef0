use chrono::Local;
use std::slice;

use crate::error::CoreError;
use crate::schedule::Schedule;
use crate::task::{FieldWarning, IdGenerator, Task};

/// Tells the caller of [`Registry::get_or_create`] which branch was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Existing,
    Created,
}

/// Every schedule known to a session, in the order they were first seen.
///
/// Names are not required to be unique. All name-based operations act on
/// the first schedule with that exact name.
#[derive(Debug, Default)]
pub struct Registry {
    schedules: Vec<Schedule>,
    ids: IdGenerator,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Schedule> {
        self.schedules.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Schedule> {
        self.schedules.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Schedule> {
        self.schedules.get_mut(index)
    }

    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.schedules.iter().position(|s| s.name() == name)
    }

    pub fn schedule(&self, name: &str) -> Option<&Schedule> {
        let index = self.find_by_name(name)?;
        self.schedules.get(index)
    }

    pub fn schedule_mut(&mut self, name: &str) -> Option<&mut Schedule> {
        let index = self.find_by_name(name)?;
        self.schedules.get_mut(index)
    }

    /// Appends `schedule` as-is, even when its name is already taken.
    pub fn push(&mut self, schedule: Schedule) -> usize {
        self.schedules.push(schedule);
        self.schedules.len() - 1
    }

    pub fn get_or_create(&mut self, name: &str) -> (&mut Schedule, Lookup) {
        let (index, lookup) = match self.find_by_name(name) {
            Some(index) => (index, Lookup::Existing),
            None => {
                tracing::info!(schedule = name, "New schedule created");
                (self.push(Schedule::new(name)), Lookup::Created)
            }
        };
        (&mut self.schedules[index], lookup)
    }

    pub fn remove_by_name(&mut self, name: &str) -> Result<Schedule, CoreError> {
        let index = self
            .find_by_name(name)
            .ok_or_else(|| CoreError::ScheduleNotFound(name.to_string()))?;
        tracing::info!(schedule = name, "Schedule removed");
        Ok(self.schedules.remove(index))
    }

    /// Creates a task with the next id, using the current local date and
    /// time for any field that fails to parse.
    pub fn new_task(
        &mut self,
        description: impl Into<String>,
        date_text: &str,
        time_text: &str,
    ) -> (Task, Vec<FieldWarning>) {
        let now = Local::now().naive_local();
        Task::from_text(self.ids.next_id(), description, date_text, time_text, now)
    }

    pub fn total_tasks(&self) -> usize {
        self.schedules.iter().map(Schedule::len).sum()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Schedule;
    type IntoIter = slice::Iter<'a, Schedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
