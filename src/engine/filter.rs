use crate::dataset::{Dataset, parse_date};
use crate::error::Result;

use super::DateRange;

/// Keep the rows whose `date_column` falls inside `range` (inclusive).
///
/// Rows with a null or unparseable date are dropped. Row order is preserved.
///
/// # Errors
/// Returns [`crate::InsightsError::MissingColumn`] if `date_column` is absent.
pub fn filter_by_date(dataset: &Dataset, date_column: &str, range: &DateRange) -> Result<Dataset> {
    let index = dataset.require_column(date_column)?;

    let mut undated = 0_usize;
    let kept = dataset
        .records()
        .iter()
        .filter(|record| match record.value(index).and_then(parse_date) {
            Some(date) => range.contains(date),
            None => {
                undated += 1;
                false
            }
        })
        .cloned()
        .collect();

    if undated > 0 {
        log::info!(
            "dataset '{}': dropped {undated} row(s) with missing or unparseable '{date_column}'",
            dataset.name()
        );
    }

    let filtered = dataset.with_records(kept);
    log::debug!(
        "dataset '{}': {} of {} row(s) within {range}",
        dataset.name(),
        filtered.len(),
        dataset.len()
    );
    Ok(filtered)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
