//! Primitive SVG elements: axes, bars, pie slices, and legends.

use std::f64::consts::TAU;
use std::fmt::Write;

use super::format::html_escape;
use super::style::{ChartColor, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis line with ticks at relative positions `0.0..=1.0` and an optional
/// title placed beside it.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub title: Option<String>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Horizontal, x, y, length)
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Vertical, x, y, length)
    }

    fn new(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            title: None,
            color: ChartColor::css_var("text-muted"),
            tick_length: 5.0,
            font_size: 10.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }

    fn render_title(&self, output: &mut String, color: &str) {
        let Some(title) = &self.title else {
            return;
        };
        let escaped = html_escape(title);
        let size = self.font_size + 2.0;
        match self.orientation {
            AxisOrientation::Horizontal => {
                let _ = writeln!(
                    output,
                    r#"<text x="{}" y="{}" text-anchor="middle" fill="{color}" font-size="{size}">{escaped}</text>"#,
                    self.length.mul_add(0.5, self.x),
                    self.y + self.tick_length + self.font_size * 2.0 + 10.0
                );
            }
            AxisOrientation::Vertical => {
                let x = self.x - self.tick_length - self.font_size * 4.0;
                let y = self.length.mul_add(-0.5, self.y);
                let _ = writeln!(
                    output,
                    r#"<text x="{x}" y="{y}" text-anchor="middle" fill="{color}" font-size="{size}" transform="rotate(-90 {x} {y})">{escaped}</text>"#
                );
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };
        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{end_x}" y2="{end_y}" stroke="{color}" stroke-width="1"/>"#,
            self.x, self.y
        );

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);
            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                tick.start_x, tick.start_y, tick.end_x, tick.end_y
            );
            let escaped_label = html_escape(label);
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{escaped_label}</text>"#,
                tick.label_x, tick.label_y, tick.anchor, self.font_size
            );
        }

        self.render_title(&mut output, &color);
        output
    }
}

/// One rectangle of a bar chart. The tooltip becomes its `<title>`; the
/// annotation, if any, is centered inside the bar.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub tooltip: String,
    pub annotation: Option<String>,
}

/// Bars shorter than this get no inline text.
const MIN_ANNOTATED_BAR_HEIGHT: f64 = 14.0;

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let tooltip = html_escape(&self.tooltip);
        let mut output = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}">
    <title>{tooltip}</title>
</rect>"#,
            self.x, self.y, self.width, self.height
        );
        if let Some(text) = &self.annotation
            && self.height >= MIN_ANNOTATED_BAR_HEIGHT
        {
            let _ = write!(
                output,
                r#"
<text x="{}" y="{}" text-anchor="middle" fill="{}" font-size="10">{}</text>"#,
                self.width.mul_add(0.5, self.x),
                self.height.mul_add(0.5, self.y) + 3.5,
                self.color.contrast_text(),
                html_escape(text)
            );
        }
        output
    }
}

/// A pie wedge between two angles, in radians clockwise from 12 o'clock.
#[derive(Debug, Clone)]
pub struct Slice {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: ChartColor,
    pub tooltip: String,
}

impl Slice {
    /// Point on the circle at `angle`, scaled by `factor` of the radius.
    #[must_use]
    pub fn point_at(&self, angle: f64, factor: f64) -> (f64, f64) {
        let r = self.radius * factor;
        (r.mul_add(angle.sin(), self.cx), r.mul_add(-angle.cos(), self.cy))
    }

    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

impl SvgElement for Slice {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let tooltip = html_escape(&self.tooltip);
        let sweep = self.end_angle - self.start_angle;

        if sweep >= TAU - 1e-9 {
            return format!(
                r##"<circle cx="{}" cy="{}" r="{}" fill="{color}" stroke="#ffffff" stroke-width="1">
    <title>{tooltip}</title>
</circle>"##,
                self.cx, self.cy, self.radius
            );
        }

        let (x1, y1) = self.point_at(self.start_angle, 1.0);
        let (x2, y2) = self.point_at(self.end_angle, 1.0);
        let large_arc = u8::from(sweep > TAU / 2.0);
        format!(
            r##"<path d="M{:.2},{:.2} L{x1:.2},{y1:.2} A{r},{r} 0 {large_arc},1 {x2:.2},{y2:.2} Z" fill="{color}" stroke="#ffffff" stroke-width="1">
    <title>{tooltip}</title>
</path>"##,
            self.cx,
            self.cy,
            r = self.radius
        )
    }
}

/// Color swatches with labels, one per row.
#[derive(Debug, Clone)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub entries: Vec<(String, ChartColor)>,
    pub font_size: f64,
    pub row_height: f64,
}

impl Legend {
    #[must_use]
    pub const fn new(x: f64, y: f64, entries: Vec<(String, ChartColor)>) -> Self {
        Self {
            x,
            y,
            entries,
            font_size: 11.0,
            row_height: 18.0,
        }
    }
}

impl SvgElement for Legend {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let mut output = String::new();
        let text_color = ChartColor::css_var("text").to_css();
        let swatch = self.font_size;
        for (i, (label, color)) in self.entries.iter().enumerate() {
            let y = self.row_height.mul_add(i as f64, self.y);
            let _ = writeln!(
                output,
                r#"<rect x="{}" y="{y}" width="{swatch}" height="{swatch}" fill="{}"/>"#,
                self.x,
                color.to_css()
            );
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" fill="{text_color}" font-size="{}">{}</text>"#,
                self.x + swatch + 6.0,
                y + swatch - 1.0,
                self.font_size,
                html_escape(label)
            );
        }
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
