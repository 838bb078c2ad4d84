//! Column schema descriptors, validated once right after a dataset loads.

use std::fmt;

use indexmap::IndexMap;

use super::Dataset;

/// Semantic role of a required column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Date,
    PrimaryCategory,
    SecondaryCategory,
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::PrimaryCategory => write!(f, "primary category"),
            Self::SecondaryCategory => write!(f, "secondary category"),
        }
    }
}

/// Required columns of one dataset and the role each one plays.
///
/// A column requested under several roles keeps the first role it was
/// registered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSchema {
    dataset: String,
    columns: IndexMap<String, ColumnRole>,
}

impl DatasetSchema {
    #[must_use]
    pub fn new(dataset: impl Into<String>, date_column: impl Into<String>) -> Self {
        let mut columns = IndexMap::new();
        columns.insert(date_column.into(), ColumnRole::Date);
        Self {
            dataset: dataset.into(),
            columns,
        }
    }

    pub fn require(&mut self, column: impl Into<String>, role: ColumnRole) {
        self.columns.entry(column.into()).or_insert(role);
    }

    /// Check every required column against the dataset's headers.
    #[must_use]
    pub fn validate(&self, dataset: &Dataset) -> SchemaReport {
        let missing = self
            .columns
            .iter()
            .filter(|(column, _)| dataset.column_index(column).is_none())
            .map(|(column, role)| (column.clone(), *role))
            .collect();
        SchemaReport {
            dataset: self.dataset.clone(),
            missing,
        }
    }
}

/// Outcome of validating a [`DatasetSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaReport {
    dataset: String,
    missing: Vec<(String, ColumnRole)>,
}

impl SchemaReport {
    #[must_use]
    pub fn is_missing(&self, column: &str) -> bool {
        self.missing.iter().any(|(c, _)| c == column)
    }

    #[must_use]
    pub fn missing(&self) -> &[(String, ColumnRole)] {
        &self.missing
    }

    #[must_use]
    pub fn dataset(&self) -> &str {
        &self.dataset
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
