//! Numeric display formatting.

/// Placeholder rendered for absent or non-finite values.
pub(crate) const PLACEHOLDER: &str = "—";

/// Formats a numeric value for display.
///
/// Values are rounded to two decimal places and rendered without
/// trailing zeros; `None` and NaN render as an em-dash placeholder.
///
/// # Examples
///
/// ```
/// use biomarker_types::format_value;
///
/// assert_eq!(format_value(Some(78.0)), "78");
/// assert_eq!(format_value(Some(0.625)), "0.63");
/// assert_eq!(format_value(Some(1.204)), "1.2");
/// assert_eq!(format_value(None), "—");
/// assert_eq!(format_value(Some(f64::NAN)), "—");
/// ```
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => {
            let rounded = (v * 100.0).round() / 100.0;
            format!("{}", rounded)
        }
        _ => PLACEHOLDER.to_string(),
    }
}
