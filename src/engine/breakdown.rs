use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::Result;

/// Row filters applied before a breakdown is grouped.
///
/// Both lists compare case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownOptions {
    /// Primary values to drop (e.g. `unknown`).
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Secondary values to keep; `None` keeps everything.
    #[serde(default)]
    pub include: Option<Vec<String>>,
}

impl BreakdownOptions {
    #[must_use]
    pub fn excluding<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = values.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn including<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// One `(primary, secondary)` group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub primary: String,
    pub secondary: String,
    pub count: usize,
    /// Share of this primary value's rows, `0.0..=100.0`.
    pub percentage: f64,
}

impl BreakdownRow {
    /// Bar segment text, e.g. `2 (66.7%)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({:.1}%)", self.count, self.percentage)
    }
}

/// Grouped counts ordered by primary, then secondary value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct BreakdownTable {
    rows: Vec<BreakdownRow>,
}

impl BreakdownTable {
    #[must_use]
    pub fn rows(&self) -> &[BreakdownRow] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }

    /// Distinct primary values in table order.
    #[must_use]
    pub fn primaries(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if seen.last() != Some(&row.primary.as_str()) {
                seen.push(row.primary.as_str());
            }
        }
        seen
    }

    /// Distinct secondary values, sorted.
    #[must_use]
    pub fn secondaries(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.rows.iter().map(|r| r.secondary.as_str()).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    #[must_use]
    pub fn get(&self, primary: &str, secondary: &str) -> Option<&BreakdownRow> {
        self.rows
            .iter()
            .find(|r| r.primary == primary && r.secondary == secondary)
    }
}

/// Normalize to display casing: first character upper-case, rest lower-case.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Apply the breakdown filters and normalize secondary values in place.
///
/// Rows with a null primary or secondary value are dropped. The result is the
/// exact row subset a [`BreakdownTable`] is computed from.
///
/// # Errors
/// Returns [`crate::InsightsError::MissingColumn`] if either column is absent.
pub fn prepare_breakdown(
    dataset: &Dataset,
    primary_column: &str,
    secondary_column: &str,
    options: &BreakdownOptions,
) -> Result<Dataset> {
    let primary = dataset.require_column(primary_column)?;
    let secondary = dataset.require_column(secondary_column)?;

    let excluded: HashSet<String> = options.exclude.iter().map(|v| v.to_lowercase()).collect();
    let included: Option<HashSet<String>> = options
        .include
        .as_ref()
        .map(|values| values.iter().map(|v| v.to_lowercase()).collect());

    let records = dataset
        .records()
        .iter()
        .filter_map(|record| {
            let primary_value = record.value(primary)?;
            let secondary_value = record.value(secondary)?;
            if excluded.contains(&primary_value.to_lowercase()) {
                return None;
            }
            if let Some(allowed) = &included
                && !allowed.contains(&secondary_value.to_lowercase())
            {
                return None;
            }
            let mut row = record.clone();
            row.set(secondary, capitalize(secondary_value));
            Some(row)
        })
        .collect();

    Ok(dataset.with_records(records))
}

/// Group rows by `(primary, secondary)` and compute per-primary percentages.
///
/// # Errors
/// Returns [`crate::InsightsError::MissingColumn`] if either column is absent.
pub fn breakdown_by(
    dataset: &Dataset,
    primary_column: &str,
    secondary_column: &str,
    options: &BreakdownOptions,
) -> Result<BreakdownTable> {
    let prepared = prepare_breakdown(dataset, primary_column, secondary_column, options)?;
    Ok(tabulate(&prepared, primary_column, secondary_column))
}

/// Group an already prepared row set.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn tabulate(
    prepared: &Dataset,
    primary_column: &str,
    secondary_column: &str,
) -> BreakdownTable {
    let (Some(primary), Some(secondary)) = (
        prepared.column_index(primary_column),
        prepared.column_index(secondary_column),
    ) else {
        return BreakdownTable::default();
    };

    let mut groups: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for record in prepared.records() {
        let (Some(p), Some(s)) = (record.value(primary), record.value(secondary)) else {
            continue;
        };
        *groups.entry((p, s)).or_insert(0) += 1;
        *totals.entry(p).or_insert(0) += 1;
    }

    let rows = groups
        .into_iter()
        .map(|((p, s), count)| {
            let total = totals.get(p).copied().unwrap_or(count);
            BreakdownRow {
                primary: p.to_string(),
                secondary: s.to_string(),
                count,
                percentage: count as f64 * 100.0 / total as f64,
            }
        })
        .collect();

    BreakdownTable { rows }
}

#[cfg(test)]
#[path = "breakdown_tests.rs"]
mod tests;
