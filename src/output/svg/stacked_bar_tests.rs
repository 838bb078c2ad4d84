//! Tests for the stacked bar chart.

use super::*;
use crate::output::svg::data::DataPoint;

fn chart() -> StackedBarChart {
    let hired = ChartColor::hex("#001E44");
    let shortlisted = ChartColor::hex("#F77F00");
    StackedBarChart::new(
        "Outcomes",
        vec![
            StackedColumn::new(
                "Retail",
                vec![
                    DataPoint::new("Hired", 1.0)
                        .with_color(hired.clone())
                        .with_annotation("1 (33.3%)"),
                    DataPoint::new("Shortlisted", 2.0)
                        .with_color(shortlisted.clone())
                        .with_annotation("2 (66.7%)"),
                ],
            ),
            StackedColumn::new(
                "Tech",
                vec![
                    DataPoint::new("Hired", 4.0)
                        .with_color(hired.clone())
                        .with_annotation("4 (100.0%)"),
                ],
            ),
        ],
        vec![
            ("Hired".to_string(), hired),
            ("Shortlisted".to_string(), shortlisted),
        ],
    )
    .with_axis_titles("Previous Jobs", "Count")
}

#[test]
fn one_rect_per_segment_plus_legend_swatches() {
    let svg = chart().render();
    // Three segments and two legend swatches.
    assert_eq!(svg.matches("<rect").count(), 5);
    assert!(svg.contains("<title>Retail / Shortlisted: 2 (66.7%)</title>"));
    assert!(svg.contains("<title>Tech / Hired: 4 (100.0%)</title>"));
}

#[test]
fn axes_carry_titles_and_category_labels() {
    let svg = chart().render();
    assert!(svg.contains(">Previous Jobs</text>"));
    assert!(svg.contains(">Count</text>"));
    assert!(svg.contains(">Retail</text>"));
    assert!(svg.contains(">Tech</text>"));
}

#[test]
fn value_axis_ticks_cover_tallest_column() {
    let svg = chart().render();
    // Tallest column is 4, so ticks run 0..=4 in steps of 1.
    for tick in ["0", "1", "2", "3", "4"] {
        assert!(svg.contains(&format!(">{tick}</text>")), "missing tick {tick}");
    }
    assert!(!svg.contains(">5</text>"));
}

#[test]
fn segments_stack_from_the_baseline() {
    let chart = chart();
    let svg = chart.render();
    let baseline = chart.padding_top + chart.plot_height();
    // Tech's single segment fills the whole plot height.
    assert!(svg.contains(&format!("y=\"{}\"", baseline - chart.plot_height())));
}

#[test]
fn empty_chart_shows_placeholder() {
    let svg = StackedBarChart::new("Empty", Vec::new(), Vec::new()).render();
    assert!(svg.contains("No data available"));
    assert!(!svg.contains("<rect"));
}

#[test]
fn nice_step_rounds_up() {
    assert!((nice_step(0.5) - 1.0).abs() < f64::EPSILON);
    assert!((nice_step(1.5) - 2.0).abs() < f64::EPSILON);
    assert!((nice_step(3.0) - 5.0).abs() < f64::EPSILON);
    assert!((nice_step(7.0) - 10.0).abs() < f64::EPSILON);
    assert!((nice_step(130.0) - 200.0).abs() < 1e-9);
}
