use std::fmt::Write;

use crate::engine::{BreakdownTable, CategoryCounts};
use crate::error::Result;
use crate::report::{Report, SectionOutcome, SectionReport};

use super::ReportFormatter;
use super::html_template::{HTML_FOOTER, HTML_HEADER};
use super::svg::{
    ChartColor, DataPoint, PieChart, StackedBarChart, StackedColumn, SvgElement, format_percent,
    html_escape,
};

/// Standalone HTML page with one SVG chart per section.
pub struct HtmlFormatter;

impl HtmlFormatter {
    const fn status_class(outcome: &SectionOutcome) -> &'static str {
        match outcome {
            SectionOutcome::Distribution { .. } | SectionOutcome::Breakdown { .. } => "ok",
            SectionOutcome::Empty { .. } => "empty",
            SectionOutcome::Misconfigured { .. } => "misconfigured",
        }
    }

    fn write_summary(output: &mut String, report: &Report) {
        let summary = report.summary();
        let _ = writeln!(
            output,
            "        <p class=\"range\">Range: {}</p>",
            html_escape(&report.range.to_string())
        );
        output.push_str("        <div class=\"summary-grid\">\n");
        for (class, value, label) in [
            ("ok", summary.rendered, "Rendered"),
            ("empty", summary.empty, "Empty"),
            ("misconfigured", summary.misconfigured, "Misconfigured"),
        ] {
            let _ = writeln!(
                output,
                "            <div class=\"summary-card {class}\"><span class=\"value\">{value}</span><div class=\"label\">{label}</div></div>"
            );
        }
        output.push_str("        </div>\n");
    }

    fn write_section(output: &mut String, report: &Report, section: &SectionReport) {
        let class = Self::status_class(&section.outcome);
        let _ = writeln!(
            output,
            "        <div class=\"section {class}\" data-status=\"{class}\">"
        );
        let _ = writeln!(output, "            <h2>{}</h2>", html_escape(&section.title));
        let columns = section.breakdown.as_ref().map_or_else(
            || section.category.clone(),
            |b| format!("{} by {b}", section.category),
        );
        let _ = writeln!(
            output,
            "            <p class=\"meta\">Dataset {} ({})</p>",
            html_escape(&section.dataset),
            html_escape(&columns)
        );

        match &section.outcome {
            SectionOutcome::Distribution { counts, .. } => {
                Self::write_chart(output, &Self::pie_chart(report, section, counts));
                Self::write_counts_table(output, section, counts);
            }
            SectionOutcome::Breakdown { table, .. } => {
                Self::write_chart(output, &Self::stacked_chart(report, section, table));
                Self::write_breakdown_table(output, section, table);
            }
            SectionOutcome::Empty { message } | SectionOutcome::Misconfigured { message } => {
                let _ = writeln!(
                    output,
                    "            <div class=\"notice {class}\">{}</div>",
                    html_escape(message)
                );
            }
        }
        output.push_str("        </div>\n");
    }

    fn write_chart(output: &mut String, chart: &dyn SvgElement) {
        output.push_str("            <div class=\"chart-container\">\n");
        for line in chart.render().lines() {
            let _ = writeln!(output, "                {line}");
        }
        output.push_str("            </div>\n");
    }

    #[allow(clippy::cast_precision_loss)]
    fn pie_chart(report: &Report, section: &SectionReport, counts: &CategoryCounts) -> PieChart {
        let data = counts
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let color = report.color(section, &entry.category, i);
                DataPoint::new(entry.label(), entry.count as f64)
                    .with_color(ChartColor::hex(color))
            })
            .collect();
        PieChart::new(&section.title, data)
    }

    #[allow(clippy::cast_precision_loss)]
    fn stacked_chart(
        report: &Report,
        section: &SectionReport,
        table: &BreakdownTable,
    ) -> StackedBarChart {
        let series: Vec<(String, ChartColor)> = table
            .secondaries()
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                (
                    value.to_string(),
                    ChartColor::hex(report.color(section, value, i)),
                )
            })
            .collect();

        let columns = table
            .primaries()
            .into_iter()
            .map(|primary| {
                let segments = series
                    .iter()
                    .filter_map(|(secondary, color)| {
                        table.get(primary, secondary).map(|row| {
                            DataPoint::new(secondary, row.count as f64)
                                .with_color(color.clone())
                                .with_annotation(row.label())
                        })
                    })
                    .collect();
                StackedColumn::new(primary, segments)
            })
            .collect();

        StackedBarChart::new(&section.title, columns, series)
            .with_axis_titles(&section.x_title, &section.y_title)
    }

    fn write_counts_table(output: &mut String, section: &SectionReport, counts: &CategoryCounts) {
        output.push_str("            <div class=\"table-container\">\n");
        output.push_str("                <table>\n");
        let _ = writeln!(
            output,
            "                    <thead><tr><th class=\"sortable\">{}</th><th class=\"sortable\" data-sort=\"number\">Count</th><th class=\"sortable\" data-sort=\"number\">Share</th></tr></thead>",
            html_escape(&section.category)
        );
        output.push_str("                    <tbody>\n");
        for entry in counts.entries() {
            let share = counts.percentage(&entry.category).unwrap_or(0.0);
            let _ = writeln!(
                output,
                "                        <tr><td>{}</td><td class=\"number\" data-value=\"{}\">{}</td><td class=\"number\" data-value=\"{share:.1}\">{}</td></tr>",
                html_escape(&entry.category),
                entry.count,
                entry.count,
                format_percent(share)
            );
        }
        output.push_str("                    </tbody>\n");
        let _ = writeln!(
            output,
            "                    <tfoot><tr><td>Total</td><td class=\"number\">{}</td><td></td></tr></tfoot>",
            counts.total()
        );
        output.push_str("                </table>\n");
        output.push_str("            </div>\n");
    }

    fn write_breakdown_table(output: &mut String, section: &SectionReport, table: &BreakdownTable) {
        let breakdown = section.breakdown.as_deref().unwrap_or("Breakdown");
        output.push_str("            <div class=\"table-container\">\n");
        output.push_str("                <table>\n");
        let _ = writeln!(
            output,
            "                    <thead><tr><th class=\"sortable\">{}</th><th class=\"sortable\">{}</th><th class=\"sortable\" data-sort=\"number\">Count</th><th class=\"sortable\" data-sort=\"number\">Share</th></tr></thead>",
            html_escape(&section.category),
            html_escape(breakdown)
        );
        output.push_str("                    <tbody>\n");
        for row in table.rows() {
            let _ = writeln!(
                output,
                "                        <tr><td>{}</td><td>{}</td><td class=\"number\" data-value=\"{}\">{}</td><td class=\"number\" data-value=\"{:.1}\">{}</td></tr>",
                html_escape(&row.primary),
                html_escape(&row.secondary),
                row.count,
                row.count,
                row.percentage,
                format_percent(row.percentage)
            );
        }
        output.push_str("                    </tbody>\n");
        output.push_str("                </table>\n");
        output.push_str("            </div>\n");
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::with_capacity(16 * 1024);
        output.push_str(HTML_HEADER);
        Self::write_summary(&mut output, report);
        for section in &report.sections {
            Self::write_section(&mut output, report, section);
        }
        output.push_str(HTML_FOOTER);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "html_tests/mod.rs"]
mod tests;
