//! # Sked Core Library
//!
//! In-memory engine for named schedules of dated, timed tasks.
//!
//! ## Core Modules
//!
//! - [`task`]: Task records, text parsing of dates and times, id generation
//! - [`schedule`]: A named, chronologically ordered collection of tasks
//! - [`registry`]: The collection of all schedules known to a session
//! - [`error`]: Error types shared by the modules above
//!
//! ## Example Usage
//!
//! ```rust
//! use sked_core::registry::{Lookup, Registry};
//!
//! let mut registry = Registry::new();
//! let (task, warnings) = registry.new_task("Standup", "10/20/2025", "09:00 AM");
//! assert!(warnings.is_empty());
//!
//! let (schedule, lookup) = registry.get_or_create("Work");
//! assert_eq!(lookup, Lookup::Created);
//! schedule.insert(task).expect("no conflict in an empty schedule");
//! assert_eq!(schedule.len(), 1);
//! ```

pub mod error;
pub mod registry;
pub mod schedule;
pub mod task;
