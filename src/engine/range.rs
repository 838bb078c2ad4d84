//! Date ranges and relative windows.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{InsightsError, Result};

/// Inclusive `[start, end]` calendar-date range. Always `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// # Errors
    /// Returns [`InsightsError::InvalidRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(InsightsError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Named relative windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum WindowPreset {
    /// Today minus 180 days
    #[serde(rename = "last-6-months")]
    #[value(name = "last-6-months")]
    LastSixMonths,
    /// Today minus 365 days
    #[serde(rename = "last-12-months")]
    #[value(name = "last-12-months")]
    LastTwelveMonths,
}

impl WindowPreset {
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::LastSixMonths => 180,
            Self::LastTwelveMonths => 365,
        }
    }
}

impl fmt::Display for WindowPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastSixMonths => write!(f, "last-6-months"),
            Self::LastTwelveMonths => write!(f, "last-12-months"),
        }
    }
}

/// "Today minus N days" through today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeWindow {
    days: u32,
}

impl RelativeWindow {
    /// # Errors
    /// Returns a configuration error for a zero-day window.
    pub fn new(days: u32) -> Result<Self> {
        if days == 0 {
            return Err(InsightsError::Config(
                "relative window must span at least one day".to_string(),
            ));
        }
        Ok(Self { days })
    }

    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Resolve against a reference "today".
    ///
    /// # Errors
    /// Returns a configuration error if the window reaches before the
    /// earliest representable date.
    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange> {
        let start = today
            .checked_sub_days(Days::new(u64::from(self.days)))
            .ok_or_else(|| {
                InsightsError::Config(format!(
                    "window of {} days before {today} is out of range",
                    self.days
                ))
            })?;
        DateRange::new(start, today)
    }
}

impl From<WindowPreset> for RelativeWindow {
    fn from(preset: WindowPreset) -> Self {
        Self {
            days: preset.days(),
        }
    }
}

/// How the report's date range is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    /// Fixed bounds.
    Explicit(DateRange),
    /// Relative to a reference day.
    Relative(RelativeWindow),
    /// Earliest through latest date found in the data.
    #[default]
    DataBounds,
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
