//! Tests for SVG styling primitives.

use super::*;

mod chart_color_tests {
    use super::*;

    #[test]
    fn css_var_format() {
        let color = ChartColor::css_var("text-muted");
        assert_eq!(color.to_css(), "var(--color-text-muted)");
    }

    #[test]
    fn hex_format() {
        let color = ChartColor::hex("#F77F00");
        assert_eq!(color.to_css(), "#F77F00");
    }

    #[test]
    fn dark_fill_gets_white_text() {
        assert_eq!(ChartColor::hex("#001E44").contrast_text(), "#ffffff");
        assert_eq!(ChartColor::hex("#E53855").contrast_text(), "#ffffff");
    }

    #[test]
    fn light_fill_gets_dark_text() {
        assert_eq!(ChartColor::hex("#F5F5F5").contrast_text(), "#1e293b");
        assert_eq!(ChartColor::hex("#F5BA2E").contrast_text(), "#1e293b");
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(ChartColor::hex("#fff").contrast_text(), "#ffffff");
        assert_eq!(ChartColor::css_var("accent").contrast_text(), "#ffffff");
    }
}

mod text_anchor_tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", TextAnchor::Start), "start");
        assert_eq!(format!("{}", TextAnchor::Middle), "middle");
        assert_eq!(format!("{}", TextAnchor::End), "end");
    }
}
