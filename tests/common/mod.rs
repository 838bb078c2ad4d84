#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the applicant-insights binary.
#[macro_export]
macro_rules! applicant_insights {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("applicant-insights"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture holding the two CSV files the built-in dashboard reads.
    pub fn with_default_datasets() -> Self {
        let fixture = Self::new();
        fixture.create_file("Prev_jobs.csv", PREV_JOBS_CSV);
        fixture.create_file("Previous_jobs_EmpStat.csv", PJE_CSV);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the fixture.
    pub fn file(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Reads a file from the fixture.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.file(relative_path)).expect("Failed to read file")
    }

    /// Creates the local `.applicant-insights.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".applicant-insights.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Distribution input: 2 Retail and 2 Tech between 2023-01-15 and 2023-03-01,
/// plus an earlier Retail row and an unparseable date.
pub const PREV_JOBS_CSV: &str = "\
INVITATIONDT,PREVIOUS_JOBS
2023-01-01,Retail
2023-01-20,Retail
2023-01-25,Retail
2023-02-01,Tech
2023-03-01,Tech
not-a-date,Tech
";

/// Breakdown input with mixed-case statuses and an `unknown` category.
pub const PJE_CSV: &str = "\
INVITATIONDT,PREVIOUS_JOBS,FOLDER,EMPLOYMENTSTATUS
2023-01-20,Retail,Shortlisted,Employed
2023-01-21,Retail,shortlisted,Unemployed
2023-01-22,Retail,HIRED,employed
2023-01-23,unknown,Hired,Employed
2023-02-02,Tech,Rejected,Student
";

/// A single distribution section over `jobs.csv`.
pub const SINGLE_SECTION_CONFIG: &str = r#"
[[dataset]]
name = "jobs"
path = "jobs.csv"
date_column = "INVITATIONDT"

[[section]]
kind = "distribution"
title = "Jobs"
dataset = "jobs"
category = "PREVIOUS_JOBS"
"#;
