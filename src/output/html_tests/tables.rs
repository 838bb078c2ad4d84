use super::*;

#[test]
fn counts_table() {
    let output = render_sample();
    assert!(output.contains("<th class=\"sortable\">PREVIOUS_JOBS</th>"));
    assert!(output.contains(
        "<tr><td>Retail</td><td class=\"number\" data-value=\"2\">2</td><td class=\"number\" data-value=\"50.0\">50.0%</td></tr>"
    ));
    assert!(output.contains("<tfoot><tr><td>Total</td><td class=\"number\">4</td><td></td></tr></tfoot>"));
}

#[test]
fn breakdown_table() {
    let output = render_sample();
    assert!(output.contains("<th class=\"sortable\">FOLDER</th>"));
    assert!(output.contains(
        "<tr><td>Retail</td><td>Hired</td><td class=\"number\" data-value=\"1\">1</td><td class=\"number\" data-value=\"33.3\">33.3%</td></tr>"
    ));
}
