//! Semantic validation of a parsed [`Config`].

use std::collections::{HashMap, HashSet};

use crate::engine::sanitize_stem;
use crate::error::{InsightsError, Result};

use super::{Config, SectionKind};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns a configuration error describing the first problem found.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_filter(config)?;
    validate_datasets(config)?;
    validate_sections(config)?;
    validate_colors(config)?;
    Ok(())
}

fn validate_filter(config: &Config) -> Result<()> {
    config.filter.date_filter().map(|_| ())
}

fn validate_datasets(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, dataset) in config.datasets.iter().enumerate() {
        if dataset.name.trim().is_empty() {
            return Err(InsightsError::Config(format!(
                "dataset[{i}].name must not be empty"
            )));
        }
        if dataset.date_column.trim().is_empty() {
            return Err(InsightsError::Config(format!(
                "dataset '{}' must name a date_column",
                dataset.name
            )));
        }
        if !seen.insert(dataset.name.as_str()) {
            return Err(InsightsError::Config(format!(
                "dataset name '{}' is defined more than once",
                dataset.name
            )));
        }
    }
    Ok(())
}

fn validate_sections(config: &Config) -> Result<()> {
    let mut stems: HashMap<String, &str> = HashMap::new();
    for (i, section) in config.sections.iter().enumerate() {
        if config.dataset(&section.dataset).is_none() {
            return Err(InsightsError::Config(format!(
                "section[{i}] ('{}') references unknown dataset '{}'",
                section.title, section.dataset
            )));
        }
        if section.category.trim().is_empty() {
            return Err(InsightsError::Config(format!(
                "section[{i}] ('{}') must name a category column",
                section.title
            )));
        }
        match section.kind {
            SectionKind::Breakdown if section.breakdown.is_none() => {
                return Err(InsightsError::Config(format!(
                    "breakdown section[{i}] ('{}') must name a breakdown column",
                    section.title
                )));
            }
            SectionKind::Distribution if section.breakdown.is_some() => {
                return Err(InsightsError::Config(format!(
                    "distribution section[{i}] ('{}') does not take a breakdown column",
                    section.title
                )));
            }
            _ => {}
        }
        // Stems that sanitize alike would write the same export file.
        let stem = sanitize_stem(section.export_stem());
        if let Some(previous) = stems.insert(stem, &section.title) {
            return Err(InsightsError::Config(format!(
                "sections '{previous}' and '{}' export to the same file '{}'; set a distinct export_name",
                section.title,
                section.export_stem()
            )));
        }
    }
    Ok(())
}

fn validate_colors(config: &Config) -> Result<()> {
    let section_colors = config
        .sections
        .iter()
        .flat_map(|s| s.colors.values().map(String::as_str));
    for color in config.palette.iter().map(String::as_str).chain(section_colors) {
        if !is_hex_color(color) {
            return Err(InsightsError::Config(format!(
                "invalid color '{color}', expected #RRGGBB"
            )));
        }
    }
    if config.palette.is_empty() {
        return Err(InsightsError::Config(
            "palette must contain at least one color".to_string(),
        ));
    }
    Ok(())
}

#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
