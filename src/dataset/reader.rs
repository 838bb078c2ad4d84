//! CSV loading into [`Dataset`]s.

use std::io::Read;
use std::path::Path;

use crate::error::{InsightsError, Result};

use super::{Dataset, Record};

/// Reads comma-separated files with a header row.
///
/// Fields are trimmed. Short rows are accepted; missing trailing fields read
/// as null.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetReader;

impl DatasetReader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Load a dataset from a file on disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is not valid CSV.
    pub fn read_path(&self, name: &str, path: &Path) -> Result<Dataset> {
        let file = std::fs::File::open(path).map_err(|source| InsightsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = self.read(name, file)?;
        log::debug!(
            "loaded dataset '{name}' from {}: {} rows, {} columns",
            path.display(),
            dataset.len(),
            dataset.headers().len()
        );
        Ok(dataset)
    }

    /// Load a dataset from any byte source.
    ///
    /// # Errors
    /// Returns an error if the input is not valid CSV or has no header row.
    pub fn read<R: Read>(&self, name: &str, input: R) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.iter().all(String::is_empty) {
            return Err(InsightsError::Config(format!(
                "dataset '{name}' has no header row"
            )));
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(Record::new(row.iter().map(str::to_string).collect()));
        }

        Ok(Dataset::new(name, headers, records))
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
