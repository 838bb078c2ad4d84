use super::*;

#[test]
fn misconfigured_section_shows_escaped_message() {
    let output = render_sample();
    assert!(output.contains(
        "<div class=\"notice misconfigured\">Column &#39;EMPLOYMENTSTATUS&#39; not found in dataset &#39;Pje&#39;</div>"
    ));
}

#[test]
fn empty_sections_show_no_data_notice() {
    let output = render_empty();
    assert_eq!(
        output
            .matches("<div class=\"notice empty\">No data in selected range.</div>")
            .count(),
        2
    );
}

#[test]
fn titles_are_escaped() {
    assert_eq!(html_escape("R&D <Ops>"), "R&amp;D &lt;Ops&gt;");
}
