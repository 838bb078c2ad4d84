use std::fmt::Write;

use crate::config::SectionKind;
use crate::engine::{BreakdownTable, CategoryCounts};
use crate::error::Result;
use crate::report::{Report, SectionOutcome, SectionReport};

use super::svg::format_percent;
use super::{ColorMode, ReportFormatter, ansi};

/// Plain-text tables for the terminal.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    const fn status_icon(outcome: &SectionOutcome) -> &'static str {
        match outcome {
            SectionOutcome::Distribution { .. } | SectionOutcome::Breakdown { .. } => "✓",
            SectionOutcome::Empty { .. } => "⚠",
            SectionOutcome::Misconfigured { .. } => "✗",
        }
    }

    fn format_section(&self, section: &SectionReport, output: &mut String) {
        let heading = format!("{} {}", Self::status_icon(&section.outcome), section.title);
        let color = match section.outcome {
            SectionOutcome::Distribution { .. } | SectionOutcome::Breakdown { .. } => ansi::CYAN,
            SectionOutcome::Empty { .. } => ansi::YELLOW,
            SectionOutcome::Misconfigured { .. } => ansi::RED,
        };
        writeln!(output, "{}", self.colorize(&heading, color)).ok();

        let columns = match (section.kind, &section.breakdown) {
            (SectionKind::Breakdown, Some(breakdown)) => {
                format!("{} by {breakdown}", section.category)
            }
            _ => section.category.clone(),
        };
        writeln!(output, "   Dataset: {} ({columns})", section.dataset).ok();

        match &section.outcome {
            SectionOutcome::Distribution { counts, .. } => Self::format_counts(counts, output),
            SectionOutcome::Breakdown { table, .. } => Self::format_breakdown(table, output),
            SectionOutcome::Empty { message } => {
                writeln!(output, "   {}", self.colorize(message, ansi::YELLOW)).ok();
            }
            SectionOutcome::Misconfigured { message } => {
                writeln!(output, "   {}", self.colorize(message, ansi::RED)).ok();
            }
        }
    }

    fn format_counts(counts: &CategoryCounts, output: &mut String) {
        let width = counts
            .entries()
            .iter()
            .map(|e| e.category.chars().count())
            .chain(["Category".len(), "Total".len()])
            .max()
            .unwrap_or(0);

        writeln!(output, "   {:<width$}  {:>7}  {:>7}", "Category", "Count", "Share").ok();
        for entry in counts.entries() {
            let share = counts
                .percentage(&entry.category)
                .map_or_else(String::new, format_percent);
            writeln!(
                output,
                "   {:<width$}  {:>7}  {:>7}",
                entry.category, entry.count, share
            )
            .ok();
        }
        writeln!(output, "   {:<width$}  {:>7}", "Total", counts.total()).ok();
    }

    fn format_breakdown(table: &BreakdownTable, output: &mut String) {
        let primary_width = table
            .rows()
            .iter()
            .map(|r| r.primary.chars().count())
            .chain(["Category".len()])
            .max()
            .unwrap_or(0);
        let secondary_width = table
            .rows()
            .iter()
            .map(|r| r.secondary.chars().count())
            .chain(["Breakdown".len()])
            .max()
            .unwrap_or(0);

        writeln!(
            output,
            "   {:<primary_width$}  {:<secondary_width$}  {:>7}  {:>7}",
            "Category", "Breakdown", "Count", "Share"
        )
        .ok();
        for row in table.rows() {
            writeln!(
                output,
                "   {:<primary_width$}  {:<secondary_width$}  {:>7}  {:>7}",
                row.primary,
                row.secondary,
                row.count,
                format_percent(row.percentage)
            )
            .ok();
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "Applicant Insights Report").ok();
        writeln!(output, "Range: {}", report.range).ok();
        writeln!(output).ok();

        for section in &report.sections {
            self.format_section(section, &mut output);
            writeln!(output).ok();
        }

        let summary = report.summary();
        writeln!(
            output,
            "Summary: {} sections, {} rendered, {} empty, {} misconfigured",
            report.sections.len(),
            self.colorize(&summary.rendered.to_string(), ansi::GREEN),
            self.colorize(&summary.empty.to_string(), ansi::YELLOW),
            self.colorize(&summary.misconfigured.to_string(), ansi::RED),
        )
        .ok();
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
