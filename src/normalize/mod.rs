//! Normalization of raw extracted rows into typed punch records.
//!
//! The PDF table extractor produces text rows whose timestamps may use
//! Eastern Arabic-Indic digits and Arabic meridiem markers. This module
//! maps them to their Latin equivalents, parses the timestamp, and drops
//! rows that still fail to parse. Bad rows are not errors: the batch
//! continues with whatever survives, and an empty survivor set is a
//! valid "nothing to report" outcome.
//!
//! # Example
//!
//! ```
//! use attendance_engine::models::RawPunchRow;
//! use attendance_engine::normalize::normalize_rows;
//!
//! let rows = vec![RawPunchRow {
//!     badge_id: "105".to_string(),
//!     employee_name: "Ali".to_string(),
//!     timestamp_text: "٠١/٠٢/٢٠٢٤ ٠٣:٠٠ م".to_string(),
//! }];
//! let punches = normalize_rows(rows);
//! assert_eq!(punches.len(), 1);
//! assert_eq!(punches[0].timestamp.to_string(), "2024-02-01 15:00:00");
//! ```

mod digits;
mod parser;

pub use digits::{normalize_digits, normalize_meridiem, normalize_timestamp_text};
pub use parser::{TIMESTAMP_FORMAT, normalize_rows, parse_timestamp, rows_from_cells};
