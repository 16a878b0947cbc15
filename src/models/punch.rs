//! Punch models.
//!
//! This module defines the raw row shape produced by the PDF table
//! extractor and the typed punch record the classifier consumes.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of fields in a well-formed extracted row.
pub const RAW_ROW_FIELDS: usize = 3;

/// One raw row as produced by the PDF table extractor.
///
/// The extractor emits three text fields per row: the badge id, the
/// employee name, and the raw timestamp. The timestamp may use Eastern
/// Arabic-Indic digits and Arabic meridiem markers; normalization happens
/// in [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPunchRow {
    /// The badge id text. Carried through but not used as a grouping key;
    /// grouping is by employee name, matching the source report.
    pub badge_id: String,
    /// The employee display name.
    pub employee_name: String,
    /// The raw timestamp text, e.g. `31/01/2024 02:45 PM` or
    /// `٣١/٠١/٢٠٢٤ ٠٢:٤٥ م`.
    pub timestamp_text: String,
}

impl RawPunchRow {
    /// Builds a raw row from one extracted cell list.
    ///
    /// A row with the wrong number of cells is a fatal shape error rather
    /// than a droppable row: silently coercing a missing field could
    /// mis-map columns for every row after it.
    ///
    /// # Arguments
    ///
    /// * `index` - Zero-based position of the row, used in the error.
    /// * `cells` - The extracted cell texts for this row.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::RawPunchRow;
    ///
    /// let cells = vec![
    ///     "105".to_string(),
    ///     "Ali".to_string(),
    ///     "10/01/2024 09:05 AM".to_string(),
    /// ];
    /// let row = RawPunchRow::from_cells(0, &cells).unwrap();
    /// assert_eq!(row.employee_name, "Ali");
    ///
    /// let short = vec!["105".to_string(), "Ali".to_string()];
    /// assert!(RawPunchRow::from_cells(1, &short).is_err());
    /// ```
    pub fn from_cells(index: usize, cells: &[String]) -> EngineResult<Self> {
        if cells.len() != RAW_ROW_FIELDS {
            return Err(EngineError::MalformedRow {
                index,
                expected: RAW_ROW_FIELDS,
                found: cells.len(),
            });
        }
        Ok(Self {
            badge_id: cells[0].clone(),
            employee_name: cells[1].clone(),
            timestamp_text: cells[2].clone(),
        })
    }
}

/// One validated time-clock punch.
///
/// Produced by the normalizer from a [`RawPunchRow`] whose timestamp
/// parsed successfully. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchRecord {
    /// The employee display name the punch belongs to.
    pub employee_name: String,
    /// The parsed punch timestamp.
    pub timestamp: NaiveDateTime,
}

impl PunchRecord {
    /// Returns the calendar date of the punch.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
