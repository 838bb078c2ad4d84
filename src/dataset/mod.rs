//! In-memory tabular datasets loaded from CSV.
//!
//! A [`Dataset`] keeps the source header order and row order untouched so that
//! filtered subsets export with the same column layout as the input.

mod date;
mod reader;
mod schema;

pub use date::parse_date;
pub use reader::DatasetReader;
pub use schema::{ColumnRole, DatasetSchema, SchemaReport};

use chrono::NaiveDate;

use crate::error::{InsightsError, Result};

/// A single row. Fields are aligned with the owning dataset's headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    #[must_use]
    pub const fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Raw field text, or `None` past the end of a short row.
    #[must_use]
    pub fn raw(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Field value with blank cells treated as null.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<&str> {
        self.raw(index).map(str::trim).filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub(crate) fn set(&mut self, index: usize, value: String) {
        if index >= self.fields.len() {
            self.fields.resize(index + 1, String::new());
        }
        self.fields[index] = value;
    }
}

/// An ordered record set with a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name: String,
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub fn new(name: impl Into<String>, headers: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            headers,
            records,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Resolve a column name to its index.
    ///
    /// # Errors
    /// Returns [`InsightsError::MissingColumn`] if the column does not exist.
    pub fn require_column(&self, column: &str) -> Result<usize> {
        self.column_index(column)
            .ok_or_else(|| InsightsError::missing_column(&self.name, column))
    }

    /// Build a dataset sharing this one's name and headers.
    #[must_use]
    pub fn with_records(&self, records: Vec<Record>) -> Self {
        Self {
            name: self.name.clone(),
            headers: self.headers.clone(),
            records,
        }
    }

    /// Earliest and latest parseable dates in `date_column`.
    ///
    /// Returns `Ok(None)` when no row carries a parseable date.
    ///
    /// # Errors
    /// Returns [`InsightsError::MissingColumn`] if the column does not exist.
    pub fn date_bounds(&self, date_column: &str) -> Result<Option<(NaiveDate, NaiveDate)>> {
        let index = self.require_column(date_column)?;
        let bounds = self
            .records
            .iter()
            .filter_map(|r| r.value(index).and_then(parse_date))
            .fold(None, |acc: Option<(NaiveDate, NaiveDate)>, date| match acc {
                None => Some((date, date)),
                Some((lo, hi)) => Some((lo.min(date), hi.max(date))),
            });
        Ok(bounds)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
