use super::*;

#[test]
fn shows_range() {
    let output = render_sample();
    assert!(output.contains("<p class=\"range\">Range: 2023-01-15 to 2023-03-01</p>"));
}

#[test]
fn cards_count_section_outcomes() {
    let output = render_sample();
    assert!(output.contains(
        "<div class=\"summary-card ok\"><span class=\"value\">2</span><div class=\"label\">Rendered</div></div>"
    ));
    assert!(output.contains(
        "<div class=\"summary-card empty\"><span class=\"value\">0</span><div class=\"label\">Empty</div></div>"
    ));
    assert!(output.contains(
        "<div class=\"summary-card misconfigured\"><span class=\"value\">1</span><div class=\"label\">Misconfigured</div></div>"
    ));
}

#[test]
fn cards_for_empty_range() {
    let output = render_empty();
    assert!(output.contains(
        "<div class=\"summary-card empty\"><span class=\"value\">2</span><div class=\"label\">Empty</div></div>"
    ));
}
