use chrono::NaiveDateTime;
use std::slice;
use thiserror::Error;

use crate::error::CoreError;
use crate::task::{Task, TaskId};

/// Direction in which a schedule's tasks are currently kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    pub fn flipped(self) -> Self {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }
}

/// Returned by [`Schedule::insert`] when the timestamp is already taken.
/// The rejected task is handed back untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("A task already exists at the same date and time: {existing}")]
pub struct Conflict {
    pub existing: Task,
    pub rejected: Task,
}

/// A named collection of tasks kept in chronological order.
///
/// Tasks are stored in traversal order, so the first element is the head
/// and the last one is the tail. A fresh schedule is ascending; [`reverse`]
/// flips it to descending and every later insertion honors the current
/// direction.
///
/// [`reverse`]: Schedule::reverse
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    name: String,
    tasks: Vec<Task>,
    order: Order,
}

impl Schedule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
            order: Order::Ascending,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn head(&self) -> Option<&Task> {
        self.tasks.first()
    }

    pub fn tail(&self) -> Option<&Task> {
        self.tasks.last()
    }

    /// Walks the tasks from head to tail. Every call starts a new traversal.
    pub fn iter(&self) -> slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id() == id)
    }

    /// First task, from the head, whose timestamp equals `timestamp`.
    pub fn find_by_timestamp(&self, timestamp: NaiveDateTime) -> Option<&Task> {
        self.tasks.iter().find(|task| task.timestamp() == timestamp)
    }

    /// Inserts `task` at its chronological position without checking for
    /// conflicts.
    ///
    /// In an ascending schedule the task lands after every task whose
    /// timestamp is not later than its own, so tasks sharing a timestamp
    /// keep their insertion order. In a descending (reversed) schedule it
    /// lands before its ties, which is the mirror image of the same
    /// arrangement.
    pub fn insert_sorted(&mut self, task: Task) -> TaskId {
        let timestamp = task.timestamp();
        let index = match self.order {
            Order::Ascending => self.tasks.partition_point(|t| t.timestamp() <= timestamp),
            Order::Descending => self.tasks.partition_point(|t| t.timestamp() > timestamp),
        };
        let id = task.id();
        self.tasks.insert(index, task);
        id
    }

    /// Inserts `task` unless another task already occupies its timestamp.
    pub fn insert(&mut self, task: Task) -> Result<TaskId, Conflict> {
        if let Some(existing) = self.find_by_timestamp(task.timestamp()) {
            tracing::warn!(
                schedule = %self.name,
                existing = %existing.id(),
                "Schedule conflict detected: {existing}"
            );
            return Err(Conflict {
                existing: existing.clone(),
                rejected: task,
            });
        }
        Ok(self.insert_sorted(task))
    }

    pub fn remove_by_id(&mut self, id: TaskId) -> Result<Task, CoreError> {
        if self.tasks.is_empty() {
            tracing::warn!(schedule = %self.name, "Cannot remove a task from an empty schedule");
            return Err(CoreError::EmptySchedule(self.name.clone()));
        }

        match self.tasks.iter().position(|task| task.id() == id) {
            Some(index) => {
                let removed = self.tasks.remove(index);
                tracing::info!(
                    schedule = %self.name,
                    task = %id,
                    "Removed task '{}'",
                    removed.description()
                );
                Ok(removed)
            }
            None => {
                tracing::warn!(schedule = %self.name, task = %id, "Task not found");
                Err(CoreError::TaskNotFound {
                    id,
                    schedule: self.name.clone(),
                })
            }
        }
    }

    /// Reverses the traversal order in place: head and tail swap and the
    /// schedule's [`Order`] flips.
    pub fn reverse(&mut self) -> Result<(), CoreError> {
        if self.tasks.is_empty() {
            tracing::warn!(schedule = %self.name, "Schedule is empty, nothing to reverse");
            return Err(CoreError::EmptySchedule(self.name.clone()));
        }
        self.tasks.reverse();
        self.order = self.order.flipped();
        tracing::info!(schedule = %self.name, order = ?self.order, "Schedule reversed");
        Ok(())
    }

    /// Whether the tasks are sorted according to the current [`Order`].
    pub fn is_ordered(&self) -> bool {
        self.tasks.windows(2).all(|pair| match self.order {
            Order::Ascending => pair[0].timestamp() <= pair[1].timestamp(),
            Order::Descending => pair[0].timestamp() >= pair[1].timestamp(),
        })
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Task;
    type IntoIter = slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::IdGenerator;
    use chrono::NaiveDate;

    fn task_at(ids: &mut IdGenerator, name: &str, day: u32, hour: u32, minute: u32) -> Task {
        Task::new(
            ids.next_id(),
            name,
            NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
            chrono::NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
        )
    }

    fn names(schedule: &Schedule) -> Vec<&str> {
        schedule.iter().map(Task::description).collect()
    }

    #[test]
    fn test_insert_sorted_keeps_ascending_order() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Work");
        schedule.insert_sorted(task_at(&mut ids, "c", 22, 9, 0));
        schedule.insert_sorted(task_at(&mut ids, "a", 20, 9, 0));
        schedule.insert_sorted(task_at(&mut ids, "b", 21, 9, 0));
        schedule.insert_sorted(task_at(&mut ids, "d", 22, 17, 30));

        assert_eq!(names(&schedule), vec!["a", "b", "c", "d"]);
        assert_eq!(schedule.head().map(Task::description), Some("a"));
        assert_eq!(schedule.tail().map(Task::description), Some("d"));
        assert_eq!(schedule.len(), 4);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Ties");
        schedule.insert_sorted(task_at(&mut ids, "A", 20, 9, 0));
        schedule.insert_sorted(task_at(&mut ids, "B", 20, 9, 0));
        schedule.insert_sorted(task_at(&mut ids, "C", 20, 8, 0));

        assert_eq!(names(&schedule), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_insert_rejects_conflict() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Work");
        let original = task_at(&mut ids, "Review", 20, 14, 30);
        let original_id = schedule.insert(original).unwrap();

        let duplicate = task_at(&mut ids, "Lunch", 20, 14, 30);
        let duplicate_id = duplicate.id();
        let conflict = schedule.insert(duplicate).unwrap_err();

        assert_eq!(conflict.existing.id(), original_id);
        assert_eq!(conflict.rejected.id(), duplicate_id);
        assert_eq!(schedule.len(), 1);
        assert!(!schedule.contains(duplicate_id));
    }

    #[test]
    fn test_find_by_timestamp() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Work");
        let task = task_at(&mut ids, "Review", 20, 14, 30);
        let timestamp = task.timestamp();
        schedule.insert_sorted(task);

        assert_eq!(
            schedule.find_by_timestamp(timestamp).map(Task::description),
            Some("Review")
        );
        let other = NaiveDate::from_ymd_opt(2025, 10, 20)
            .unwrap()
            .and_hms_opt(14, 31, 0)
            .unwrap();
        assert!(schedule.find_by_timestamp(other).is_none());
    }

    #[test]
    fn test_remove_head_middle_and_tail() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Work");
        let ids_in_order: Vec<TaskId> = (20..25)
            .map(|day| schedule.insert_sorted(task_at(&mut ids, &day.to_string(), day, 9, 0)))
            .collect();

        schedule.remove_by_id(ids_in_order[0]).unwrap();
        assert_eq!(schedule.head().map(Task::id), Some(ids_in_order[1]));
        assert_eq!(schedule.len(), 4);

        schedule.remove_by_id(ids_in_order[2]).unwrap();
        assert_eq!(names(&schedule), vec!["21", "23", "24"]);
        assert_eq!(schedule.len(), 3);

        schedule.remove_by_id(ids_in_order[4]).unwrap();
        assert_eq!(schedule.tail().map(Task::id), Some(ids_in_order[3]));
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_remove_missing_id_is_not_found() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Work");
        schedule.insert_sorted(task_at(&mut ids, "only", 20, 9, 0));
        let missing = ids.next_id();

        let err = schedule.remove_by_id(missing).unwrap_err();
        assert_eq!(
            err,
            CoreError::TaskNotFound {
                id: missing,
                schedule: "Work".to_string()
            }
        );
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_remove_from_empty_schedule() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Empty");
        let err = schedule.remove_by_id(ids.next_id()).unwrap_err();
        assert_eq!(err, CoreError::EmptySchedule("Empty".to_string()));
    }

    #[test]
    fn test_remove_only_task_clears_head_and_tail() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Work");
        let id = schedule.insert_sorted(task_at(&mut ids, "only", 20, 9, 0));
        schedule.remove_by_id(id).unwrap();
        assert!(schedule.head().is_none());
        assert!(schedule.tail().is_none());
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_reverse_empty_schedule() {
        let mut schedule = Schedule::new("Empty");
        assert_eq!(
            schedule.reverse(),
            Err(CoreError::EmptySchedule("Empty".to_string()))
        );
        assert_eq!(schedule.order(), Order::Ascending);
    }

    #[test]
    fn test_reverse_twice_restores_original() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Work");
        for (name, day) in [("a", 20), ("b", 21), ("c", 22)] {
            schedule.insert_sorted(task_at(&mut ids, name, day, 9, 0));
        }
        let head = schedule.head().cloned();
        let tail = schedule.tail().cloned();

        schedule.reverse().unwrap();
        assert_eq!(names(&schedule), vec!["c", "b", "a"]);
        assert_eq!(schedule.order(), Order::Descending);
        assert_eq!(schedule.head(), tail.as_ref());
        assert_eq!(schedule.tail(), head.as_ref());
        assert!(schedule.is_ordered());

        schedule.reverse().unwrap();
        assert_eq!(names(&schedule), vec!["a", "b", "c"]);
        assert_eq!(schedule.head(), head.as_ref());
        assert_eq!(schedule.tail(), tail.as_ref());
        assert_eq!(schedule.order(), Order::Ascending);
    }

    #[test]
    fn test_insert_after_reverse_keeps_descending_order() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Work");
        schedule.insert_sorted(task_at(&mut ids, "a", 20, 9, 0));
        schedule.insert_sorted(task_at(&mut ids, "c", 22, 9, 0));
        schedule.reverse().unwrap();

        schedule.insert_sorted(task_at(&mut ids, "b", 21, 9, 0));
        schedule.insert_sorted(task_at(&mut ids, "d", 23, 9, 0));
        schedule.insert_sorted(task_at(&mut ids, "z", 19, 9, 0));

        assert_eq!(names(&schedule), vec!["d", "c", "b", "a", "z"]);
        assert!(schedule.is_ordered());
    }

    #[test]
    fn test_ties_inserted_while_reversed_match_ascending_fifo() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Ties");
        schedule.insert_sorted(task_at(&mut ids, "first", 20, 9, 0));
        schedule.insert_sorted(task_at(&mut ids, "second", 20, 9, 0));
        schedule.reverse().unwrap();
        schedule.insert_sorted(task_at(&mut ids, "third", 20, 9, 0));
        schedule.reverse().unwrap();

        assert_eq!(names(&schedule), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut ids = IdGenerator::new();
        let mut schedule = Schedule::new("Work");
        schedule.insert_sorted(task_at(&mut ids, "a", 20, 9, 0));
        schedule.insert_sorted(task_at(&mut ids, "b", 21, 9, 0));

        let first: Vec<TaskId> = schedule.iter().map(Task::id).collect();
        let second: Vec<TaskId> = (&schedule).into_iter().map(Task::id).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), schedule.len());
    }

    #[test]
    fn test_set_name() {
        let mut schedule = Schedule::new("Old");
        schedule.set_name("New");
        assert_eq!(schedule.name(), "New");
    }
}
