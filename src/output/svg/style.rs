//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// Fill color for chart marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#F77F00")
    Hex(String),
    /// CSS variable reference (e.g., "text" → "var(--color-text)")
    CssVar(String),
}

impl ChartColor {
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar(name) => format!("var(--color-{name})"),
        }
    }

    /// Text color readable on top of this fill.
    ///
    /// Light hex fills get dark text, everything else gets white. CSS
    /// variables are assumed to be chart accents and get white.
    #[must_use]
    pub fn contrast_text(&self) -> &'static str {
        match self {
            Self::Hex(hex) => match relative_luminance(hex) {
                Some(l) if l > 0.5 => "#1e293b",
                _ => "#ffffff",
            },
            Self::CssVar(_) => "#ffffff",
        }
    }
}

/// Perceived brightness of `#RRGGBB`, `0.0..=1.0`.
fn relative_luminance(hex: &str) -> Option<f64> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(digits.get(i..i + 2)?, 16)
            .ok()
            .map(|v| f64::from(v) / 255.0)
    };
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    Some(0.0722f64.mul_add(b, 0.2126f64.mul_add(r, 0.7152 * g)))
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
