//! Digit and meridiem marker normalization.

/// Maps every Eastern Arabic-Indic digit (٠–٩) to its Western equivalent.
///
/// Non-digit characters pass through unchanged.
///
/// # Example
///
/// ```
/// use attendance_engine::normalize::normalize_digits;
///
/// assert_eq!(normalize_digits("٣١/٠١/٢٠٢٤"), "31/01/2024");
/// assert_eq!(normalize_digits("31/01/2024"), "31/01/2024");
/// ```
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '٠' => '0',
            '١' => '1',
            '٢' => '2',
            '٣' => '3',
            '٤' => '4',
            '٥' => '5',
            '٦' => '6',
            '٧' => '7',
            '٨' => '8',
            '٩' => '9',
            other => other,
        })
        .collect()
}

/// Substitutes Arabic meridiem markers for their Latin equivalents.
///
/// `م` becomes `PM` and `ص` becomes `AM`. Like the source report tooling
/// this is a blanket substitution over the timestamp text, so it must only
/// ever be applied to the timestamp field.
///
/// # Example
///
/// ```
/// use attendance_engine::normalize::normalize_meridiem;
///
/// assert_eq!(normalize_meridiem("02:45 م"), "02:45 PM");
/// assert_eq!(normalize_meridiem("09:05 ص"), "09:05 AM");
/// ```
pub fn normalize_meridiem(text: &str) -> String {
    text.replace('م', "PM").replace('ص', "AM")
}

/// Applies both digit and meridiem normalization to a raw timestamp text.
pub fn normalize_timestamp_text(text: &str) -> String {
    normalize_meridiem(&normalize_digits(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_eastern_digits_map() {
        assert_eq!(normalize_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
    }

    #[test]
    fn test_western_digits_unchanged() {
        assert_eq!(normalize_digits("31/01/2024 02:45 PM"), "31/01/2024 02:45 PM");
    }

    #[test]
    fn test_pm_marker() {
        assert_eq!(normalize_meridiem("٠٣:٠٠ م"), "٠٣:٠٠ PM");
    }

    #[test]
    fn test_am_marker() {
        assert_eq!(normalize_meridiem("٠٩:٠٥ ص"), "٠٩:٠٥ AM");
    }

    #[test]
    fn test_full_timestamp_normalization() {
        assert_eq!(
            normalize_timestamp_text("٠١/٠٢/٢٠٢٤ ٠٣:٠٠ م"),
            "01/02/2024 03:00 PM"
        );
    }

    #[test]
    fn test_latin_input_is_a_fixed_point() {
        let text = "01/02/2024 03:00 PM";
        assert_eq!(normalize_timestamp_text(text), text);
    }
}
