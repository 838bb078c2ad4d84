//! Stacked vertical bar chart with a value axis and a series legend.

use super::builder::SvgBuilder;
use super::data::StackedColumn;
use super::element::{Axis, Bar, Legend, SvgElement};
use super::format::format_number;
use super::style::ChartColor;

/// Columns stacked bottom-up in segment order.
#[derive(Debug)]
pub struct StackedBarChart {
    pub title: String,
    pub columns: Vec<StackedColumn>,
    /// Legend entries, in the order the series stack.
    pub series: Vec<(String, ChartColor)>,
    pub x_title: String,
    pub y_title: String,
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl Default for StackedBarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            columns: Vec::new(),
            series: Vec::new(),
            x_title: String::new(),
            y_title: String::new(),
            width: 720.0,
            height: 380.0,
            padding_left: 70.0,
            padding_right: 170.0,
            padding_top: 20.0,
            padding_bottom: 70.0,
        }
    }
}

impl StackedBarChart {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        columns: Vec<StackedColumn>,
        series: Vec<(String, ChartColor)>,
    ) -> Self {
        Self {
            title: title.into(),
            columns,
            series,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
    ) -> Self {
        self.x_title = x_title.into();
        self.y_title = y_title.into();
        self
    }

    fn plot_width(&self) -> f64 {
        self.width - self.padding_left - self.padding_right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.padding_top - self.padding_bottom
    }

    fn value_axis(&self, top: f64, step: f64) -> Axis {
        let mut labels = Vec::new();
        let mut value = 0.0;
        while value <= top + f64::EPSILON {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            labels.push((value / top, format_number(value.round() as usize)));
            value += step;
        }
        let height = self.plot_height();
        Axis::vertical(self.padding_left, self.padding_top + height, height)
            .with_labels(labels)
            .with_title(&self.y_title)
    }
}

/// Round `raw` up to 1, 2, or 5 times a power of ten (at least 1).
#[must_use]
pub fn nice_step(raw: f64) -> f64 {
    if raw <= 1.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

impl SvgElement for StackedBarChart {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn render(&self) -> String {
        let builder = SvgBuilder::new(self.width, self.height).with_title(&self.title);
        if self.columns.is_empty() {
            let text_color = ChartColor::css_var("text-muted").to_css();
            return builder
                .push_raw(format!(
                    r#"<text x="{}" y="{}" text-anchor="middle" fill="{text_color}" font-size="14">No data available</text>"#,
                    self.width / 2.0,
                    self.height / 2.0
                ))
                .build();
        }

        let max_total = self
            .columns
            .iter()
            .map(StackedColumn::total)
            .fold(0.0_f64, f64::max)
            .max(1.0);
        let step = nice_step(max_total / 4.0);
        let top = (max_total / step).ceil() * step;

        let plot_width = self.plot_width();
        let plot_height = self.plot_height();
        let baseline = self.padding_top + plot_height;
        let slot = plot_width / self.columns.len() as f64;
        let bar_width = slot * 0.6;

        let mut builder = builder.push_element(&self.value_axis(top, step));
        let mut x_labels = Vec::with_capacity(self.columns.len());

        for (i, column) in self.columns.iter().enumerate() {
            let x = slot.mul_add(i as f64, self.padding_left) + slot * 0.2;
            let mut y = baseline;
            for segment in &column.segments {
                let height = segment.value / top * plot_height;
                y -= height;
                let color = segment
                    .color
                    .clone()
                    .unwrap_or_else(|| ChartColor::css_var("chart-primary"));
                let text = segment.annotation.clone();
                let tooltip = format!(
                    "{} / {}: {}",
                    column.label,
                    segment.label,
                    text.as_deref().unwrap_or(&format_number(segment.value.round() as usize))
                );
                builder = builder.push_element(&Bar {
                    x,
                    y,
                    width: bar_width,
                    height,
                    color,
                    tooltip,
                    annotation: text,
                });
            }
            x_labels.push(((i as f64 + 0.5) / self.columns.len() as f64, column.label.clone()));
        }

        let x_axis = Axis::horizontal(self.padding_left, baseline, plot_width)
            .with_labels(x_labels)
            .with_title(&self.x_title);
        let legend = Legend::new(
            self.width - self.padding_right + 20.0,
            self.padding_top,
            self.series.clone(),
        );
        builder.push_element(&x_axis).push_element(&legend).build()
    }
}

#[cfg(test)]
#[path = "stacked_bar_tests.rs"]
mod tests;
