// Each command (e.g., add, export) is its own submodule.
// The menu drives the interactive ones through the same functions.

pub mod add;
pub mod display;
pub mod export;
pub mod files;
pub mod menu;
pub mod remove;
pub mod reverse;
