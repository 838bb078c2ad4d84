use std::path::PathBuf;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::engine::{BreakdownOptions, DateFilter, DateRange, RelativeWindow, WindowPreset};
use crate::error::{InsightsError, Result};

/// Default color sequence, cycled across slices and stack segments.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#001E44", "#F5F5F5", "#E53855", "#B4BBBE", "#2F76B9", "#3B9790", "#F5BA2E", "#6A4C93",
    "#F77F00",
];

/// Date filter settings. At most one of the explicit range, `window`, and
/// `last_days` may be set; with none the report spans all dated rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowPreset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_days: Option<u32>,
}

impl FilterConfig {
    /// Turn the settings into a [`DateFilter`].
    ///
    /// # Errors
    /// Returns an error for a half-open or inverted range, a zero-day window,
    /// or more than one filter mode.
    pub fn date_filter(&self) -> Result<DateFilter> {
        match (self.start, self.end, self.window, self.last_days) {
            (None, None, None, None) => Ok(DateFilter::DataBounds),
            (Some(start), Some(end), None, None) => {
                Ok(DateFilter::Explicit(DateRange::new(start, end)?))
            }
            (None, None, Some(preset), None) => Ok(DateFilter::Relative(preset.into())),
            (None, None, None, Some(days)) => Ok(DateFilter::Relative(RelativeWindow::new(days)?)),
            (Some(_), None, None, None) | (None, Some(_), None, None) => Err(InsightsError::Config(
                "filter.start and filter.end must be set together".to_string(),
            )),
            _ => Err(InsightsError::Config(
                "only one of filter.start/end, filter.window, and filter.last_days may be set"
                    .to_string(),
            )),
        }
    }
}

/// Where filtered rows are written by `export` and `report --export-dir`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

/// A CSV source [[dataset]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetConfig {
    /// Unique name; also the default export name.
    pub name: String,

    /// CSV path, relative to the config file's directory.
    pub path: PathBuf,

    /// Column holding the row's date.
    pub date_column: String,
}

/// Kind of aggregation a section performs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Count per category, drawn as a pie chart.
    Distribution,
    /// Count and percentage per (category, breakdown) pair, drawn as stacked bars.
    Breakdown,
}

/// One chart of the report [[section]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionConfig {
    pub kind: SectionKind,

    pub title: String,

    /// Name of the [[dataset]] this section reads.
    pub dataset: String,

    /// Primary category column.
    pub category: String,

    /// Secondary column; required for breakdown sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<String>,

    /// Primary values to drop (case-insensitive).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Secondary values to keep (case-insensitive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Export file stem; defaults to the dataset name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_name: Option<String>,

    #[serde(default = "default_x_title")]
    pub x_title: String,

    #[serde(default = "default_y_title")]
    pub y_title: String,

    /// Fixed colors per secondary (or category) value, `#RRGGBB`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub colors: IndexMap<String, String>,
}

impl SectionConfig {
    #[must_use]
    pub fn export_stem(&self) -> &str {
        self.export_name.as_deref().unwrap_or(&self.dataset)
    }

    #[must_use]
    pub fn breakdown_options(&self) -> BreakdownOptions {
        BreakdownOptions {
            exclude: self.exclude.clone(),
            include: self.include.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Color sequence for values without a fixed color.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default, rename = "dataset")]
    pub datasets: Vec<DatasetConfig>,

    #[serde(default, rename = "section")]
    pub sections: Vec<SectionConfig>,
}

impl Default for Config {
    /// The two-dataset, three-chart previous-jobs dashboard.
    fn default() -> Self {
        let pje = "Pje";
        Self {
            filter: FilterConfig::default(),
            export: ExportConfig::default(),
            palette: default_palette(),
            datasets: vec![
                DatasetConfig {
                    name: "Prev_Jobs".to_string(),
                    path: PathBuf::from("Prev_jobs.csv"),
                    date_column: "INVITATIONDT".to_string(),
                },
                DatasetConfig {
                    name: pje.to_string(),
                    path: PathBuf::from("Previous_jobs_EmpStat.csv"),
                    date_column: "INVITATIONDT".to_string(),
                },
            ],
            sections: vec![
                SectionConfig {
                    kind: SectionKind::Distribution,
                    title: "Breakdown of Previous Jobs".to_string(),
                    dataset: "Prev_Jobs".to_string(),
                    category: "PREVIOUS_JOBS".to_string(),
                    breakdown: None,
                    exclude: Vec::new(),
                    include: None,
                    export_name: Some("Prev_Jobs".to_string()),
                    colors: IndexMap::new(),
                    x_title: default_x_title(),
                    y_title: default_y_title(),
                },
                SectionConfig {
                    kind: SectionKind::Breakdown,
                    title: "Distribution of Previous Jobs Categories by Shortlisted/Hired Status"
                        .to_string(),
                    dataset: pje.to_string(),
                    category: "PREVIOUS_JOBS".to_string(),
                    breakdown: Some("FOLDER".to_string()),
                    exclude: vec!["unknown".to_string()],
                    include: Some(vec!["shortlisted".to_string(), "hired".to_string()]),
                    export_name: Some("Pje_Shortlisted_Hired".to_string()),
                    colors: IndexMap::from([
                        ("Shortlisted".to_string(), "#F77F00".to_string()),
                        ("Hired".to_string(), "#001E44".to_string()),
                    ]),
                    x_title: default_x_title(),
                    y_title: default_y_title(),
                },
                SectionConfig {
                    kind: SectionKind::Breakdown,
                    title: "Distribution of Previous Jobs Categories by Employment Status"
                        .to_string(),
                    dataset: pje.to_string(),
                    category: "PREVIOUS_JOBS".to_string(),
                    breakdown: Some("EMPLOYMENTSTATUS".to_string()),
                    exclude: vec!["unknown".to_string()],
                    include: None,
                    export_name: Some("Pje_EmploymentStatus".to_string()),
                    colors: IndexMap::new(),
                    x_title: default_x_title(),
                    y_title: default_y_title(),
                },
            ],
        }
    }
}

impl Config {
    #[must_use]
    pub fn dataset(&self, name: &str) -> Option<&DatasetConfig> {
        self.datasets.iter().find(|d| d.name == name)
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(ToString::to_string).collect()
}

fn default_x_title() -> String {
    "Previous Jobs".to_string()
}

fn default_y_title() -> String {
    "Count".to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
