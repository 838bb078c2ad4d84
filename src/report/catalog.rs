use indexmap::IndexMap;

use crate::config::{Config, DatasetConfig, LoadResult, SectionKind};
use crate::dataset::{ColumnRole, Dataset, DatasetReader, DatasetSchema, SchemaReport};
use crate::engine::DateRange;
use crate::error::Result;

#[derive(Debug, Clone)]
struct CatalogEntry {
    dataset: Dataset,
    date_column: String,
    schema: SchemaReport,
}

/// Datasets loaded once per run, each checked against the columns its
/// sections require.
#[derive(Debug, Clone, Default)]
pub struct DatasetCatalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl DatasetCatalog {
    /// Load every dataset referenced by at least one section.
    ///
    /// # Errors
    /// Returns an error if a dataset file cannot be read or parsed.
    pub fn load(load: &LoadResult, reader: &DatasetReader) -> Result<Self> {
        let config = &load.config;
        let mut catalog = Self::default();
        for dataset_config in &config.datasets {
            if !config
                .sections
                .iter()
                .any(|s| s.dataset == dataset_config.name)
            {
                log::debug!(
                    "dataset '{}' is not used by any section, skipping",
                    dataset_config.name
                );
                continue;
            }
            let path = load.resolve(&dataset_config.path);
            let dataset = reader.read_path(&dataset_config.name, &path)?;
            log::info!(
                "loaded '{}' ({} rows) from {}",
                dataset_config.name,
                dataset.len(),
                path.display()
            );
            catalog.insert(config, dataset_config, dataset);
        }
        Ok(catalog)
    }

    /// Build a catalog from datasets already in memory, matched to the
    /// configured datasets by name. Unknown names are ignored.
    #[must_use]
    pub fn from_datasets(config: &Config, datasets: impl IntoIterator<Item = Dataset>) -> Self {
        let mut catalog = Self::default();
        for dataset in datasets {
            if let Some(dataset_config) = config.dataset(dataset.name()) {
                catalog.insert(config, dataset_config, dataset);
            }
        }
        catalog
    }

    fn insert(&mut self, config: &Config, dataset_config: &DatasetConfig, dataset: Dataset) {
        let schema = schema_for(config, dataset_config).validate(&dataset);
        for (column, role) in schema.missing() {
            log::warn!("dataset '{}' has no {role} column '{column}'", schema.dataset());
        }
        self.entries.insert(
            dataset_config.name.clone(),
            CatalogEntry {
                dataset,
                date_column: dataset_config.date_column.clone(),
                schema,
            },
        );
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.entries.get(name).map(|e| &e.dataset)
    }

    #[must_use]
    pub fn date_column(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|e| e.date_column.as_str())
    }

    #[must_use]
    pub fn schema_report(&self, name: &str) -> Option<&SchemaReport> {
        self.entries.get(name).map(|e| &e.schema)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest through latest parseable date across all datasets.
    ///
    /// Datasets without their date column are skipped.
    #[must_use]
    pub fn date_bounds(&self) -> Option<DateRange> {
        let (start, end) = self
            .entries
            .values()
            .filter_map(|e| e.dataset.date_bounds(&e.date_column).ok().flatten())
            .reduce(|(lo, hi), (start, end)| (lo.min(start), hi.max(end)))?;
        DateRange::new(start, end).ok()
    }
}

/// Columns a dataset must carry for every section that reads it.
fn schema_for(config: &Config, dataset: &DatasetConfig) -> DatasetSchema {
    let mut schema = DatasetSchema::new(&dataset.name, &dataset.date_column);
    for section in config.sections.iter().filter(|s| s.dataset == dataset.name) {
        schema.require(&section.category, ColumnRole::PrimaryCategory);
        if section.kind == SectionKind::Breakdown
            && let Some(breakdown) = &section.breakdown
        {
            schema.require(breakdown, ColumnRole::SecondaryCategory);
        }
    }
    schema
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
