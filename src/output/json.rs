use serde::Serialize;

use crate::config::SectionKind;
use crate::engine::DateRange;
use crate::error::Result;
use crate::report::{Report, ReportSummary, SectionOutcome, SectionReport};

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    range: DateRange,
    summary: ReportSummary,
    sections: Vec<JsonSection<'a>>,
}

#[derive(Serialize)]
struct JsonSection<'a> {
    title: &'a str,
    kind: SectionKind,
    dataset: &'a str,
    category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a str>,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    /// Rows behind the chart, i.e. what an export would contain.
    rows: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    counts: Vec<JsonCount<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    breakdown_rows: Vec<JsonBreakdownRow<'a>>,
}

#[derive(Serialize)]
struct JsonCount<'a> {
    category: &'a str,
    count: usize,
    percentage: f64,
}

#[derive(Serialize)]
struct JsonBreakdownRow<'a> {
    primary: &'a str,
    secondary: &'a str,
    count: usize,
    percentage: f64,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            range: report.range,
            summary: report.summary(),
            sections: report.sections.iter().map(convert_section).collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_section(section: &SectionReport) -> JsonSection<'_> {
    let mut json = JsonSection {
        title: &section.title,
        kind: section.kind,
        dataset: &section.dataset,
        category: &section.category,
        breakdown: section.breakdown.as_deref(),
        status: section.outcome.status(),
        message: section.outcome.message(),
        rows: section.outcome.rows().map_or(0, |rows| rows.len()),
        counts: Vec::new(),
        breakdown_rows: Vec::new(),
    };

    match &section.outcome {
        SectionOutcome::Distribution { counts, .. } => {
            json.counts = counts
                .entries()
                .iter()
                .map(|e| JsonCount {
                    category: &e.category,
                    count: e.count,
                    percentage: round1(counts.percentage(&e.category).unwrap_or(0.0)),
                })
                .collect();
        }
        SectionOutcome::Breakdown { table, .. } => {
            json.breakdown_rows = table
                .rows()
                .iter()
                .map(|r| JsonBreakdownRow {
                    primary: &r.primary,
                    secondary: &r.secondary,
                    count: r.count,
                    percentage: round1(r.percentage),
                })
                .collect();
        }
        SectionOutcome::Empty { .. } | SectionOutcome::Misconfigured { .. } => {}
    }
    json
}

/// One decimal, matching the rendered labels.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
