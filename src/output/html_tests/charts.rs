use super::*;

#[test]
fn distribution_is_a_pie_with_palette_colors() {
    let output = render_sample();
    assert!(output.contains("<title>Retail (2): 50.0%</title>"));
    assert!(output.contains("<title>Tech (2): 50.0%</title>"));
    assert!(output.contains("fill=\"#001E44\""));
    assert!(output.contains("fill=\"#F5F5F5\""));
}

#[test]
fn breakdown_is_stacked_bars_with_section_colors() {
    let output = render_sample();
    assert!(output.contains("<title>Retail / Shortlisted: 2 (66.7%)</title>"));
    assert!(output.contains("<title>Retail / Hired: 1 (33.3%)</title>"));
    assert!(output.contains("fill=\"#F77F00\""));
}

#[test]
fn breakdown_chart_carries_axis_titles() {
    let output = render_sample();
    assert!(output.contains(">Previous Jobs</text>"));
    assert!(output.contains(">Count</text>"));
}

#[test]
fn charts_sit_in_containers() {
    let output = render_sample();
    assert_eq!(output.matches("<div class=\"chart-container\">").count(), 2);
    assert_eq!(output.matches("<svg ").count(), 2);
}

#[test]
fn no_charts_without_data() {
    let output = render_empty();
    assert!(!output.contains("<div class=\"chart-container\">"));
}
