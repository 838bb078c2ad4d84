mod charts;
mod document;
mod notices;
mod summary;
mod tables;

use super::*;
use crate::output::test_support::{empty_report, sample_report};

fn render(report: &Report) -> String {
    HtmlFormatter.format(report).unwrap()
}

fn render_sample() -> String {
    render(&sample_report())
}

fn render_empty() -> String {
    render(&empty_report())
}
