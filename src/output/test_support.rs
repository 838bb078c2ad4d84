//! Shared report fixture for formatter tests.

use chrono::NaiveDate;

use crate::config::Config;
use crate::dataset::DatasetReader;
use crate::engine::DateRange;
use crate::report::{DatasetCatalog, Report};

const PREV_JOBS: &str = "\
INVITATIONDT,PREVIOUS_JOBS
2023-01-20,Retail
2023-01-25,Retail
2023-02-01,Tech
2023-02-10,Tech
";

const PJE: &str = "\
INVITATIONDT,PREVIOUS_JOBS,FOLDER
2023-01-20,Retail,Shortlisted
2023-01-21,Retail,shortlisted
2023-01-22,Retail,HIRED
";

fn build(start: (i32, u32, u32), end: (i32, u32, u32)) -> Report {
    let config = Config::default();
    let reader = DatasetReader::new();
    let catalog = DatasetCatalog::from_datasets(
        &config,
        [
            reader.read("Prev_Jobs", PREV_JOBS.as_bytes()).unwrap(),
            reader.read("Pje", PJE.as_bytes()).unwrap(),
        ],
    );
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
        NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
    )
    .unwrap();
    Report::build(&config, &catalog, range).unwrap()
}

/// Default dashboard over a small fixture: one distribution, one
/// breakdown, and one section missing its `EMPLOYMENTSTATUS` column.
pub fn sample_report() -> Report {
    build((2023, 1, 15), (2023, 3, 1))
}

/// Same fixture over a range without rows: two empty sections and the
/// misconfigured one.
pub fn empty_report() -> Report {
    build((2030, 1, 1), (2030, 1, 31))
}
