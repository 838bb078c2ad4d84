//! Chart data model.

use super::style::ChartColor;

/// A single value to draw: a pie slice or a bar segment.
#[derive(Debug, Clone)]
pub struct DataPoint {
    /// Legend and tooltip label
    pub label: String,
    pub value: f64,
    /// Fill; charts fall back to their own default when unset
    pub color: Option<ChartColor>,
    /// Text drawn on the mark itself, e.g. `2 (66.7%)`
    pub annotation: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
            annotation: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, text: impl Into<String>) -> Self {
        self.annotation = Some(text.into());
        self
    }
}

/// One x-axis category of a stacked bar chart, bottom segment first.
#[derive(Debug, Clone)]
pub struct StackedColumn {
    pub label: String,
    pub segments: Vec<DataPoint>,
}

impl StackedColumn {
    #[must_use]
    pub fn new(label: impl Into<String>, segments: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            segments,
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
