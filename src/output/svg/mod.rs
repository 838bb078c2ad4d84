//! SVG chart generation for HTML reports.
//!
//! Charts render to standalone `<svg>` fragments scaled by `viewBox`, with
//! `<title>` elements on the root and on every mark for screen readers and
//! hover tooltips.

mod builder;
mod data;
mod element;
mod format;
mod pie;
mod stacked_bar;
mod style;

pub use builder::SvgBuilder;
pub use data::{DataPoint, StackedColumn};
pub use element::{Axis, AxisOrientation, Bar, Legend, Slice, SvgElement};
pub use format::{format_number, format_percent, html_escape};
pub use pie::PieChart;
pub use stacked_bar::{StackedBarChart, nice_step};
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
