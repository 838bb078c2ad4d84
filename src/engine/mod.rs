//! Date-filtered categorical aggregation.
//!
//! Every operation is a pure function of its inputs: filtering selects a
//! subset of rows, counting and breakdowns derive fresh tables, and export
//! serializes a record set. Nothing is cached between calls.

mod breakdown;
mod count;
mod export;
mod filter;
mod range;

pub use breakdown::{
    BreakdownOptions, BreakdownRow, BreakdownTable, breakdown_by, capitalize, prepare_breakdown,
};
pub(crate) use breakdown::tabulate;
pub use count::{CategoryCount, CategoryCounts, count_by_category};
pub use export::{export_file_name, export_rows, sanitize_stem, write_export};
pub use filter::filter_by_date;
pub use range::{DateFilter, DateRange, RelativeWindow, WindowPreset};
