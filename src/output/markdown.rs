use std::fmt::Write;

use crate::error::Result;
use crate::report::{Report, SectionOutcome, SectionReport};

use super::ReportFormatter;
use super::svg::format_percent;

pub struct MarkdownFormatter;

impl MarkdownFormatter {
    const fn status_icon(outcome: &SectionOutcome) -> &'static str {
        match outcome {
            SectionOutcome::Distribution { .. } | SectionOutcome::Breakdown { .. } => "✅",
            SectionOutcome::Empty { .. } => "⚠️",
            SectionOutcome::Misconfigured { .. } => "❌",
        }
    }

    fn format_section(section: &SectionReport, output: &mut String) {
        writeln!(output, "### {}\n", escape_cell(&section.title)).ok();

        match &section.outcome {
            SectionOutcome::Distribution { counts, .. } => {
                writeln!(output, "| {} | Count | Share |", escape_cell(&section.category)).ok();
                writeln!(output, "|------|------:|------:|").ok();
                for entry in counts.entries() {
                    let share = counts
                        .percentage(&entry.category)
                        .map_or_else(String::new, format_percent);
                    writeln!(
                        output,
                        "| {} | {} | {share} |",
                        escape_cell(&entry.category),
                        entry.count
                    )
                    .ok();
                }
                writeln!(output, "| **Total** | **{}** | |", counts.total()).ok();
            }
            SectionOutcome::Breakdown { table, .. } => {
                let secondary = section.breakdown.as_deref().unwrap_or("Breakdown");
                writeln!(
                    output,
                    "| {} | {} | Count | Share |",
                    escape_cell(&section.category),
                    escape_cell(secondary)
                )
                .ok();
                writeln!(output, "|------|------|------:|------:|").ok();
                for row in table.rows() {
                    writeln!(
                        output,
                        "| {} | {} | {} | {} |",
                        escape_cell(&row.primary),
                        escape_cell(&row.secondary),
                        row.count,
                        format_percent(row.percentage)
                    )
                    .ok();
                }
            }
            SectionOutcome::Empty { message } | SectionOutcome::Misconfigured { message } => {
                writeln!(output, "> {} {message}", Self::status_icon(&section.outcome)).ok();
            }
        }
        writeln!(output).ok();
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        let summary = report.summary();

        writeln!(output, "## Applicant Insights Report\n").ok();
        writeln!(output, "_Range: {}_\n", report.range).ok();
        writeln!(output, "| Section | Dataset | Status |").ok();
        writeln!(output, "|---------|---------|:------:|").ok();
        for section in &report.sections {
            writeln!(
                output,
                "| {} | {} | {} {} |",
                escape_cell(&section.title),
                escape_cell(&section.dataset),
                Self::status_icon(&section.outcome),
                section.outcome.status()
            )
            .ok();
        }
        writeln!(
            output,
            "\n{} rendered, {} empty, {} misconfigured\n",
            summary.rendered, summary.empty, summary.misconfigured
        )
        .ok();

        for section in &report.sections {
            Self::format_section(section, &mut output);
        }
        Ok(output)
    }
}

/// Pipes would end the table cell early.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
