//! Number formatting for `print` and string conversion.

/// Format a number the way `print` shows it.
///
/// Integral values print without a fractional part (`3`, not `3.0`);
/// other values use the shortest representation that round-trips.
/// Negative zero prints as `-0`, infinities as `inf` / `-inf`, and NaN as
/// `nan`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    // std's Display already omits a trailing `.0`, keeps the sign of zero,
    // and prints infinities as `inf`.
    format!("{value}")
}
