use super::*;

#[test]
fn is_a_standalone_document() {
    let output = render_sample();
    assert!(output.starts_with("<!DOCTYPE html>"));
    assert!(output.contains("<title>Applicant Insights Report</title>"));
    assert!(output.contains("<h1>Applicant Insights Report</h1>"));
    assert!(output.trim_end().ends_with("</html>"));
}

#[test]
fn has_footer_and_sort_script() {
    let output = render_sample();
    assert!(output.contains("Generated by <strong>applicant-insights</strong>"));
    assert!(output.contains("th.sortable"));
}

#[test]
fn one_block_per_section_in_order() {
    let output = render_sample();
    let first = output.find("<h2>Breakdown of Previous Jobs</h2>").unwrap();
    let second = output
        .find("<h2>Distribution of Previous Jobs Categories by Shortlisted/Hired Status</h2>")
        .unwrap();
    let third = output
        .find("<h2>Distribution of Previous Jobs Categories by Employment Status</h2>")
        .unwrap();
    assert!(first < second && second < third);
    assert_eq!(output.matches("<div class=\"section ").count(), 3);
}

#[test]
fn section_meta_names_dataset_and_columns() {
    let output = render_sample();
    assert!(output.contains("<p class=\"meta\">Dataset Prev_Jobs (PREVIOUS_JOBS)</p>"));
    assert!(output.contains("<p class=\"meta\">Dataset Pje (PREVIOUS_JOBS by FOLDER)</p>"));
}
