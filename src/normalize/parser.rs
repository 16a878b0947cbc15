//! Timestamp parsing and row conversion.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{PunchRecord, RawPunchRow};

use super::digits::normalize_timestamp_text;

/// The punch timestamp format after normalization: day/month/year followed
/// by 12-hour time with an AM/PM marker, e.g. `31/01/2024 02:45 PM`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %I:%M %p";

/// Parses one raw timestamp text into a datetime.
///
/// Normalizes Eastern Arabic-Indic digits and Arabic meridiem markers
/// first, then parses with [`TIMESTAMP_FORMAT`]. Returns `None` when the
/// text does not match the format; the caller drops such rows.
///
/// # Example
///
/// ```
/// use attendance_engine::normalize::parse_timestamp;
///
/// let parsed = parse_timestamp("٠١/٠٢/٢٠٢٤ ٠٣:٠٠ م").unwrap();
/// let latin = parse_timestamp("01/02/2024 03:00 PM").unwrap();
/// assert_eq!(parsed, latin);
///
/// assert!(parse_timestamp("2024-02-01 15:00").is_none());
/// ```
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let normalized = normalize_timestamp_text(text);
    NaiveDateTime::parse_from_str(normalized.trim(), TIMESTAMP_FORMAT).ok()
}

/// Converts the extractor's cell lists into typed raw rows.
///
/// The extractor boundary is a sequence of 3-field rows (badge id, name,
/// timestamp text), concatenated in page order with header rows already
/// stripped. A row with the wrong number of fields fails the whole batch;
/// see [`RawPunchRow::from_cells`].
pub fn rows_from_cells(rows: &[Vec<String>]) -> EngineResult<Vec<RawPunchRow>> {
    rows.iter()
        .enumerate()
        .map(|(index, cells)| RawPunchRow::from_cells(index, cells))
        .collect()
}

/// Normalizes raw rows into punch records, dropping unparseable rows.
///
/// Rows whose timestamp fails to parse are excluded silently (logged at
/// debug level) and processing continues. An empty result is valid and
/// means there is nothing to report.
///
/// # Example
///
/// ```
/// use attendance_engine::models::RawPunchRow;
/// use attendance_engine::normalize::normalize_rows;
///
/// let rows = vec![
///     RawPunchRow {
///         badge_id: "105".to_string(),
///         employee_name: "Ali".to_string(),
///         timestamp_text: "10/01/2024 09:05 AM".to_string(),
///     },
///     RawPunchRow {
///         badge_id: "105".to_string(),
///         employee_name: "Ali".to_string(),
///         timestamp_text: "not a timestamp".to_string(),
///     },
/// ];
/// assert_eq!(normalize_rows(rows).len(), 1);
/// ```
pub fn normalize_rows(rows: Vec<RawPunchRow>) -> Vec<PunchRecord> {
    rows.into_iter()
        .filter_map(|row| match parse_timestamp(&row.timestamp_text) {
            Some(timestamp) => Some(PunchRecord {
                employee_name: row.employee_name,
                timestamp,
            }),
            None => {
                debug!(
                    employee = %row.employee_name,
                    timestamp_text = %row.timestamp_text,
                    "Dropping row with unparseable timestamp"
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, text: &str) -> RawPunchRow {
        RawPunchRow {
            badge_id: "1".to_string(),
            employee_name: name.to_string(),
            timestamp_text: text.to_string(),
        }
    }

    #[test]
    fn test_parse_latin_timestamp() {
        let parsed = parse_timestamp("31/01/2024 02:45 PM").unwrap();
        assert_eq!(parsed.to_string(), "2024-01-31 14:45:00");
    }

    #[test]
    fn test_parse_arabic_timestamp_round_trip() {
        assert_eq!(
            parse_timestamp("٠١/٠٢/٢٠٢٤ ٠٣:٠٠ م"),
            parse_timestamp("01/02/2024 03:00 PM")
        );
    }

    #[test]
    fn test_parse_morning_marker() {
        let parsed = parse_timestamp("10/01/2024 09:05 ص").unwrap();
        assert_eq!(parsed.to_string(), "2024-01-10 09:05:00");
    }

    #[test]
    fn test_parse_rejects_wrong_format() {
        assert!(parse_timestamp("2024-01-31 14:45:00").is_none());
        assert!(parse_timestamp("31/01/2024 14:45").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_normalize_rows_drops_bad_rows_and_continues() {
        let punches = normalize_rows(vec![
            row("Ali", "10/01/2024 09:05 AM"),
            row("Ali", "garbage"),
            row("Sara", "11/01/2024 08:00 ص"),
        ]);
        assert_eq!(punches.len(), 2);
        assert_eq!(punches[0].employee_name, "Ali");
        assert_eq!(punches[1].employee_name, "Sara");
    }

    #[test]
    fn test_normalize_rows_all_bad_yields_empty_not_error() {
        let punches = normalize_rows(vec![row("Ali", "???"), row("Sara", "")]);
        assert!(punches.is_empty());
    }

    #[test]
    fn test_rows_from_cells_preserves_order() {
        let cells = vec![
            vec!["1".to_string(), "Ali".to_string(), "a".to_string()],
            vec!["2".to_string(), "Sara".to_string(), "b".to_string()],
        ];
        let rows = rows_from_cells(&cells).unwrap();
        assert_eq!(rows[0].employee_name, "Ali");
        assert_eq!(rows[1].employee_name, "Sara");
    }

    #[test]
    fn test_rows_from_cells_rejects_short_row() {
        let cells = vec![vec!["1".to_string(), "Ali".to_string()]];
        assert!(rows_from_cells(&cells).is_err());
    }
}
