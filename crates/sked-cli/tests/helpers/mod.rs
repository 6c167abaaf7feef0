use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary data directory
pub struct CliTestHarness {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sked").expect("Failed to find sked binary");

        // Keep any sked.toml of the developer out of the picture
        cmd.current_dir(self.temp_dir.path());
        cmd.env("SKED_DATA_DIR", self.data_dir());
        cmd.env_remove("SKED_DEFAULT_FILE");
        cmd.env_remove("RUST_LOG");

        cmd
    }

    pub fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().join("schedules")
    }

    pub fn schedule_file(&self, name: &str) -> PathBuf {
        self.data_dir().join(name)
    }

    /// Write a schedule file into the data directory
    pub fn seed(&self, name: &str, contents: &str) -> PathBuf {
        fs::create_dir_all(self.data_dir()).expect("Failed to create data directory");
        let path = self.schedule_file(name);
        fs::write(&path, contents).expect("Failed to seed schedule file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.schedule_file(name)).expect("Failed to read data file")
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub fn week_file() -> &'static str {
        "Work;10/21/2025;09:00 AM;Standup\n\
         Home;10/20/2025;07:30 PM;Dinner\n\
         Work;10/20/2025;02:30 PM;Review\n"
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    pub fn has_schedule_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("Date"))
            .and(predicate::str::contains("Time"))
            .and(predicate::str::contains("Task"))
    }

    pub fn task_added_successfully() -> impl Predicate<str> {
        predicate::str::contains("✓").and(predicate::str::contains("Added task"))
    }

    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
