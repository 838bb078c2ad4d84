use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Column '{column}' not found in dataset '{dataset}'")]
    MissingColumn { dataset: String, column: String },

    #[error("Invalid date range: start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl InsightsError {
    /// Short category name used when reporting the error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::MissingColumn { .. } => "MissingColumn",
            Self::InvalidRange { .. } => "InvalidRange",
            Self::FileRead { .. } => "FileRead",
            Self::Csv(_) => "CSV",
            Self::Io(_) => "IO",
            Self::TomlParse(_) | Self::TomlSerialize(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// True for errors that make a single report section unrenderable
    /// without affecting the rest of the report.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }

    /// Underlying cause, when the message alone hides it.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// A hint on how to fix the error, if there is an obvious one.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MissingColumn { .. } => {
                Some("Check the column names in the CSV header and the [[section]] settings")
            }
            Self::InvalidRange { .. } => Some("Swap --start and --end"),
            Self::TomlParse(_) => {
                Some("Run `applicant-insights config validate` to check the file")
            }
            _ => None,
        }
    }

    pub(crate) fn missing_column(dataset: &str, column: &str) -> Self {
        Self::MissingColumn {
            dataset: dataset.to_string(),
            column: column.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InsightsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
