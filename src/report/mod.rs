//! Evaluation of configured sections into a renderable [`Report`].
//!
//! The report layer owns the load-once dataset catalog and turns each
//! configured section into a [`SectionReport`]. Formatters only ever see
//! the finished report.

mod catalog;
mod section;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

pub use catalog::DatasetCatalog;
pub use section::{NO_DATA_MESSAGE, SectionOutcome, SectionReport};

use crate::config::{Config, DEFAULT_PALETTE};
use crate::engine::{DateFilter, DateRange, write_export};
use crate::error::{InsightsError, Result};

/// Turn a [`DateFilter`] into a concrete range.
///
/// # Errors
/// Returns an error if the window cannot be resolved, or if the filter asks
/// for the data bounds and no dataset carries a parseable date.
pub fn resolve_range(
    filter: DateFilter,
    today: NaiveDate,
    catalog: &DatasetCatalog,
) -> Result<DateRange> {
    match filter {
        DateFilter::Explicit(range) => Ok(range),
        DateFilter::Relative(window) => window.resolve(today),
        DateFilter::DataBounds => catalog.date_bounds().ok_or_else(|| {
            InsightsError::Config(
                "no parseable dates found in any dataset; pass --start/--end or --window"
                    .to_string(),
            )
        }),
    }
}

/// Section counts by outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReportSummary {
    pub rendered: usize,
    pub empty: usize,
    pub misconfigured: usize,
}

/// Every section evaluated over one date range.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub range: DateRange,
    pub palette: Vec<String>,
    pub sections: Vec<SectionReport>,
}

impl Report {
    /// Evaluate all sections of `config` in order.
    ///
    /// # Errors
    /// Returns an error for failures other than missing section columns.
    pub fn build(config: &Config, catalog: &DatasetCatalog, range: DateRange) -> Result<Self> {
        log::info!("building report for {range}");
        let sections = config
            .sections
            .iter()
            .map(|section| SectionReport::evaluate(section, catalog, &range))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            range,
            palette: config.palette.clone(),
            sections,
        })
    }

    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        self.sections
            .iter()
            .fold(ReportSummary::default(), |mut acc, s| {
                match s.outcome {
                    SectionOutcome::Distribution { .. } | SectionOutcome::Breakdown { .. } => {
                        acc.rendered += 1;
                    }
                    SectionOutcome::Empty { .. } => acc.empty += 1,
                    SectionOutcome::Misconfigured { .. } => acc.misconfigured += 1,
                }
                acc
            })
    }

    #[must_use]
    pub fn has_configuration_errors(&self) -> bool {
        self.sections.iter().any(SectionReport::is_misconfigured)
    }

    /// Keep only the sections whose title matches one of `titles`
    /// (case-insensitive).
    ///
    /// # Errors
    /// Returns a configuration error naming the first unknown title.
    pub fn retain_titles(&mut self, titles: &[String]) -> Result<()> {
        if let Some(unknown) = titles.iter().find(|t| {
            !self
                .sections
                .iter()
                .any(|s| s.title.eq_ignore_ascii_case(t))
        }) {
            return Err(InsightsError::Config(format!("no section titled '{unknown}'")));
        }
        self.sections
            .retain(|s| titles.iter().any(|t| s.title.eq_ignore_ascii_case(t)));
        Ok(())
    }

    /// Color for `value`, the `index`-th series of `section`: the
    /// section's fixed color if any, else the palette cycled.
    #[must_use]
    pub fn color<'a>(&'a self, section: &'a SectionReport, value: &str, index: usize) -> &'a str {
        if let Some(color) = section.colors.get(value) {
            return color;
        }
        if self.palette.is_empty() {
            return DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
        }
        &self.palette[index % self.palette.len()]
    }

    /// Write one CSV per rendered section into `dir`.
    ///
    /// # Errors
    /// Returns an error if a file cannot be written.
    pub fn write_exports(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.sections
            .iter()
            .filter_map(|s| s.outcome.rows().map(|rows| (s, rows)))
            .map(|(s, rows)| write_export(rows, dir, &s.export_stem, &self.range))
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
