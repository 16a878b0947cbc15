//! Request types for the Attendance Classification Engine API.
//!
//! This module defines the JSON request structure for the `/analyze`
//! endpoint.

use serde::{Deserialize, Serialize};

/// Request body for the `/analyze` endpoint.
///
/// Carries the extractor boundary shape unchanged: each row is the cell
/// list of one extracted table row (badge id, employee name, raw
/// timestamp text), concatenated in page order with header rows already
/// stripped. Keeping the rows as plain cell lists lets the engine itself
/// enforce the row shape and report the exact offending index.
///
/// ```json
/// {
///   "rows": [
///     ["105", "Ali", "10/01/2024 09:05 ص"],
///     ["105", "Ali", "١٠/٠١/٢٠٢٤ ٠١:٥٠ م"]
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// The extracted rows, one cell list per row.
    pub rows: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rows() {
        let json = r#"{
            "rows": [
                ["105", "Ali", "10/01/2024 09:05 AM"],
                ["107", "Sara", "11/01/2024 08:00 AM"]
            ]
        }"#;
        let request: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.rows.len(), 2);
        assert_eq!(request.rows[1][1], "Sara");
    }

    #[test]
    fn test_missing_rows_field_is_rejected() {
        let result: Result<AnalyzeRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
