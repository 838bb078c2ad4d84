use indexmap::IndexMap;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::Result;

/// Row count for one category value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

impl CategoryCount {
    /// Pie-slice label, e.g. `Retail (3)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.category, self.count)
    }
}

/// Counts per category, largest first; ties keep first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts {
    entries: Vec<CategoryCount>,
}

impl CategoryCounts {
    #[must_use]
    pub fn entries(&self) -> &[CategoryCount] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.count)
    }

    /// Share of the total for `category`, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, category: &str) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        self.get(category)
            .map(|count| count as f64 * 100.0 / total as f64)
    }
}

/// Count rows per exact (case-sensitive) value of `category_column`.
///
/// Null cells are not counted.
///
/// # Errors
/// Returns [`crate::InsightsError::MissingColumn`] if the column is absent.
pub fn count_by_category(dataset: &Dataset, category_column: &str) -> Result<CategoryCounts> {
    let index = dataset.require_column(category_column)?;

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in dataset.records().iter().filter_map(|r| r.value(index)) {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut entries: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    // Stable sort keeps first-occurrence order among equal counts.
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(CategoryCounts { entries })
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
