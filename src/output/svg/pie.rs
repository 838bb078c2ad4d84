//! Pie chart with percent labels and a legend.

use std::f64::consts::TAU;

use super::builder::SvgBuilder;
use super::data::DataPoint;
use super::element::{Legend, Slice, SvgElement};
use super::format::{format_percent, html_escape};
use super::style::ChartColor;

/// Pie chart drawn clockwise from 12 o'clock in data order.
#[derive(Debug)]
pub struct PieChart {
    pub title: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub default_color: ChartColor,
    /// Slices below this share of the total get no inline percent text.
    pub min_label_share: f64,
}

impl Default for PieChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            data: Vec::new(),
            width: 520.0,
            height: 300.0,
            radius: 120.0,
            default_color: ChartColor::css_var("chart-primary"),
            min_label_share: 0.04,
        }
    }
}

impl PieChart {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            title: title.into(),
            data,
            ..Default::default()
        }
    }

    fn total(&self) -> f64 {
        self.data.iter().map(|d| d.value.max(0.0)).sum()
    }

    fn color_of(&self, point: &DataPoint) -> ChartColor {
        point
            .color
            .clone()
            .unwrap_or_else(|| self.default_color.clone())
    }
}

impl SvgElement for PieChart {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let legend_height = 18.0f64.mul_add(self.data.len() as f64, 40.0);
        let height = self.height.max(legend_height);
        let builder = SvgBuilder::new(self.width, height).with_title(&self.title);

        let total = self.total();
        if total <= 0.0 {
            let text_color = ChartColor::css_var("text-muted").to_css();
            return builder
                .push_raw(format!(
                    r#"<text x="{}" y="{}" text-anchor="middle" fill="{text_color}" font-size="14">No data available</text>"#,
                    self.width / 2.0,
                    height / 2.0
                ))
                .build();
        }

        let cx = self.radius + 20.0;
        let cy = height / 2.0;
        let mut builder = builder;
        let mut angle = 0.0;
        for point in self.data.iter().filter(|d| d.value > 0.0) {
            let share = point.value / total;
            let color = self.color_of(point);
            let slice = Slice {
                cx,
                cy,
                radius: self.radius,
                start_angle: angle,
                end_angle: share.mul_add(TAU, angle),
                color: color.clone(),
                tooltip: format!("{}: {}", point.label, format_percent(share * 100.0)),
            };
            angle = slice.end_angle;
            builder = builder.push_element(&slice);

            if share >= self.min_label_share {
                let (x, y) = slice.point_at(slice.mid_angle(), 0.65);
                let text = point
                    .annotation
                    .clone()
                    .unwrap_or_else(|| format_percent(share * 100.0));
                builder = builder.push_raw(format!(
                    r#"<text x="{x:.2}" y="{:.2}" text-anchor="middle" fill="{}" font-size="11">{}</text>"#,
                    y + 4.0,
                    color.contrast_text(),
                    html_escape(&text)
                ));
            }
        }

        let legend = Legend::new(
            cx + self.radius + 30.0,
            20.0,
            self.data
                .iter()
                .map(|d| (d.label.clone(), self.color_of(d)))
                .collect(),
        );
        builder.push_element(&legend).build()
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
