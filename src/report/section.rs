use indexmap::IndexMap;

use crate::config::{SectionConfig, SectionKind};
use crate::dataset::Dataset;
use crate::engine::{
    BreakdownTable, CategoryCounts, DateRange, count_by_category, filter_by_date,
    prepare_breakdown, tabulate,
};
use crate::error::{InsightsError, Result};

use super::DatasetCatalog;

pub const NO_DATA_MESSAGE: &str = "No data in selected range.";

/// What a section produced for the selected range.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionOutcome {
    /// Counts per category plus the date-filtered rows.
    Distribution { counts: CategoryCounts, rows: Dataset },
    /// Breakdown table plus the exact rows it was computed from.
    Breakdown { table: BreakdownTable, rows: Dataset },
    /// Nothing to chart or export.
    Empty { message: String },
    /// A required column is missing; the section is skipped.
    Misconfigured { message: String },
}

impl SectionOutcome {
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Distribution { .. } | Self::Breakdown { .. } => "ok",
            Self::Empty { .. } => "empty",
            Self::Misconfigured { .. } => "misconfigured",
        }
    }

    /// Rows to export, if the section rendered.
    #[must_use]
    pub const fn rows(&self) -> Option<&Dataset> {
        match self {
            Self::Distribution { rows, .. } | Self::Breakdown { rows, .. } => Some(rows),
            Self::Empty { .. } | Self::Misconfigured { .. } => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Empty { message } | Self::Misconfigured { message } => Some(message),
            Self::Distribution { .. } | Self::Breakdown { .. } => None,
        }
    }
}

/// One evaluated section of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionReport {
    pub title: String,
    pub dataset: String,
    pub kind: SectionKind,
    pub category: String,
    pub breakdown: Option<String>,
    pub export_stem: String,
    pub colors: IndexMap<String, String>,
    pub x_title: String,
    pub y_title: String,
    pub outcome: SectionOutcome,
}

impl SectionReport {
    /// Evaluate `section` over `range`.
    ///
    /// Missing columns become [`SectionOutcome::Misconfigured`] instead of
    /// an error so the rest of the report still renders.
    ///
    /// # Errors
    /// Returns an error only for failures unrelated to the section's columns.
    pub fn evaluate(
        section: &SectionConfig,
        catalog: &DatasetCatalog,
        range: &DateRange,
    ) -> Result<Self> {
        let outcome = match evaluate_outcome(section, catalog, range) {
            Ok(outcome) => outcome,
            Err(e) if e.is_configuration_error() => SectionOutcome::Misconfigured {
                message: e.to_string(),
            },
            Err(e) => return Err(e),
        };

        match &outcome {
            SectionOutcome::Misconfigured { message } => {
                log::warn!("section '{}': {message}", section.title);
            }
            SectionOutcome::Empty { message } => {
                log::info!("section '{}': {message}", section.title);
            }
            SectionOutcome::Distribution { rows, .. } | SectionOutcome::Breakdown { rows, .. } => {
                log::debug!("section '{}': {} row(s)", section.title, rows.len());
            }
        }

        Ok(Self {
            title: section.title.clone(),
            dataset: section.dataset.clone(),
            kind: section.kind,
            category: section.category.clone(),
            breakdown: section.breakdown.clone(),
            export_stem: section.export_stem().to_string(),
            colors: section.colors.clone(),
            x_title: section.x_title.clone(),
            y_title: section.y_title.clone(),
            outcome,
        })
    }

    #[must_use]
    pub const fn is_misconfigured(&self) -> bool {
        matches!(self.outcome, SectionOutcome::Misconfigured { .. })
    }
}

fn evaluate_outcome(
    section: &SectionConfig,
    catalog: &DatasetCatalog,
    range: &DateRange,
) -> Result<SectionOutcome> {
    let (Some(dataset), Some(date_column)) = (
        catalog.get(&section.dataset),
        catalog.date_column(&section.dataset),
    ) else {
        return Ok(SectionOutcome::Misconfigured {
            message: format!("dataset '{}' is not loaded", section.dataset),
        });
    };

    if let Some(schema) = catalog.schema_report(&section.dataset) {
        let columns = [
            Some(date_column),
            Some(section.category.as_str()),
            section.breakdown.as_deref(),
        ];
        if let Some(column) = columns.into_iter().flatten().find(|c| schema.is_missing(c)) {
            return Err(InsightsError::missing_column(&section.dataset, column));
        }
    }

    let filtered = filter_by_date(dataset, date_column, range)?;
    if filtered.is_empty() {
        return Ok(empty(NO_DATA_MESSAGE));
    }

    match (section.kind, section.breakdown.as_deref()) {
        (SectionKind::Breakdown, Some(breakdown)) => {
            let prepared = prepare_breakdown(
                &filtered,
                &section.category,
                breakdown,
                &section.breakdown_options(),
            )?;
            if prepared.is_empty() {
                return Ok(empty("No rows left after breakdown filters."));
            }
            let table = tabulate(&prepared, &section.category, breakdown);
            Ok(SectionOutcome::Breakdown {
                table,
                rows: prepared,
            })
        }
        (SectionKind::Breakdown, None) => Err(InsightsError::Config(format!(
            "breakdown section '{}' has no breakdown column",
            section.title
        ))),
        (SectionKind::Distribution, _) => {
            let counts = count_by_category(&filtered, &section.category)?;
            if counts.is_empty() {
                return Ok(empty(&format!(
                    "No '{}' values in selected range.",
                    section.category
                )));
            }
            Ok(SectionOutcome::Distribution {
                counts,
                rows: filtered,
            })
        }
    }
}

fn empty(message: &str) -> SectionOutcome {
    SectionOutcome::Empty {
        message: message.to_string(),
    }
}

#[cfg(test)]
#[path = "section_tests.rs"]
mod tests;
