use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::cli::{ColorChoice, RangeArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, FilterConfig, LoadResult};
use crate::dataset::DatasetReader;
use crate::output::ColorMode;
use crate::report::{DatasetCatalog, Report, resolve_range};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from `config_path`, the default search path, or the
/// built-in defaults when `no_config` is set.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed, or
/// validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// The `[filter]` in effect: range flags replace the configured filter
/// entirely when any is given.
#[must_use]
pub fn effective_filter(configured: &FilterConfig, args: &RangeArgs) -> FilterConfig {
    if !args.overrides_filter() {
        return configured.clone();
    }
    FilterConfig {
        start: args.start,
        end: args.end,
        window: args.window,
        last_days: args.last_days,
    }
}

/// Reference day for relative windows.
#[must_use]
pub fn today(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Local::now().date_naive())
}

/// Resolve the filter, load the datasets the sections use, and evaluate
/// every section.
///
/// The filter is resolved before any dataset is read, so an inverted range
/// fails without touching the data.
pub(crate) fn build_report(load: &LoadResult, args: &RangeArgs) -> crate::Result<Report> {
    let filter = effective_filter(&load.config.filter, args).date_filter()?;
    let catalog = DatasetCatalog::load(load, &DatasetReader::new())?;
    let range = resolve_range(filter, today(args.as_of), &catalog)?;
    log::info!("reporting on {range}");
    Report::build(&load.config, &catalog, range)
}

/// Write output to a file or stdout.
///
/// `quiet` only suppresses stdout; file writes always happen.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        log::info!("wrote {}", path.display());
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
