use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::engine::WindowPreset;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    /// TOML, as it would appear in a config file
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "applicant-insights")]
#[command(author, version, about = "Date-filtered category reports over applicant CSV datasets")]
#[command(long_about = "Filters applicant datasets by date and reports category distributions \
    and breakdowns as text, JSON, Markdown, or HTML charts.\n\n\
    Exit codes:\n  \
    0 - Report rendered\n  \
    1 - At least one section is misconfigured\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors and suppress stdout output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the report for the selected date range
    Report(ReportArgs),

    /// Write the filtered rows of each section to CSV files
    Export(ExportArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Date range flags shared by `report` and `export`. They override `[filter]`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeArgs {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long, requires = "end", conflicts_with_all = ["window", "last_days"])]
    pub start: Option<NaiveDate>,

    /// Last day of the range (YYYY-MM-DD)
    #[arg(long, requires = "start", conflicts_with_all = ["window", "last_days"])]
    pub end: Option<NaiveDate>,

    /// Named window ending today
    #[arg(long, value_enum, conflicts_with = "last_days")]
    pub window: Option<WindowPreset>,

    /// Window of N days ending today
    #[arg(long)]
    pub last_days: Option<u32>,

    /// Treat this day as "today" for relative windows
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

impl RangeArgs {
    /// True when any flag replaces the configured filter.
    #[must_use]
    pub const fn overrides_filter(&self) -> bool {
        self.start.is_some()
            || self.end.is_some()
            || self.window.is_some()
            || self.last_days.is_some()
    }
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Output format [possible values: text, json, markdown, html]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export each rendered section's rows into this directory
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Export directory (overrides `[export] dir`)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Only export sections with this title (repeatable)
    #[arg(long)]
    pub section: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and semantics
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
