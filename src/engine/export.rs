use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::error::{InsightsError, Result};

use super::DateRange;

/// Serialize a record set as CSV with the source column order.
///
/// Fields containing a comma, quote, or line break are quoted. Rows are
/// padded or truncated to the header width.
///
/// # Errors
/// Returns an error if CSV serialization fails.
pub fn export_rows(dataset: &Dataset) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(dataset.headers())?;

    let width = dataset.headers().len();
    for record in dataset.records() {
        writer.write_record((0..width).map(|i| record.raw(i).unwrap_or("")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| InsightsError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| InsightsError::Config(format!("export is not UTF-8: {e}")))
}

/// `Filtered_<source>_<start>_to_<end>.csv`
#[must_use]
pub fn export_file_name(source: &str, range: &DateRange) -> String {
    format!(
        "Filtered_{}_{}_to_{}.csv",
        sanitize_stem(source),
        range.start(),
        range.end()
    )
}

/// Write `dataset` into `dir` under [`export_file_name`], returning the path.
///
/// # Errors
/// Returns an error if the directory cannot be created or the file written.
pub fn write_export(
    dataset: &Dataset,
    dir: &Path,
    source: &str,
    range: &DateRange,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(source, range));
    std::fs::write(&path, export_rows(dataset)?)?;
    log::info!("exported {} row(s) to {}", dataset.len(), path.display());
    Ok(path)
}

/// File-name-safe form of an export stem; anything outside `[A-Za-z0-9_-]`
/// becomes `_`.
#[must_use]
pub fn sanitize_stem(source: &str) -> String {
    source
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
