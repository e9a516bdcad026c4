//! Number rendering shared by reports and the live renderer.

use num_format::{Locale, ToFormattedString};

/// Renders `value` with exactly `precision` fractional digits.
///
/// # Example
///
/// ```
/// use benchview_core::format_decimal;
///
/// assert_eq!(format_decimal(1.0 / 3.0, 4), "0.3333");
/// assert_eq!(format_decimal(1.0 / 3.0, 0), "0");
/// ```
pub fn format_decimal(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Renders a byte count as a grouped integer (`1,048,576`).
pub fn format_memory(bytes: u64) -> String {
    bytes.to_formatted_string(&Locale::en)
}

/// Renders a memory delta. Positive deltas carry an explicit `+`; zero has
/// no sign and negatives keep their natural minus.
///
/// # Example
///
/// ```
/// use benchview_core::format_memory_diff;
///
/// assert_eq!(format_memory_diff(5), "+5");
/// assert_eq!(format_memory_diff(-5), "-5");
/// assert_eq!(format_memory_diff(0), "0");
/// ```
pub fn format_memory_diff(diff: i64) -> String {
    let grouped = diff.to_formatted_string(&Locale::en);
    if diff > 0 {
        format!("+{}", grouped)
    } else {
        grouped
    }
}
