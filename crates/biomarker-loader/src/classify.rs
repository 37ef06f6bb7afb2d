//! Status classification of a value against resolved ranges.

use biomarker_types::{Classification, RangeSet};

/// Classifies a value against a biomarker's resolved ranges.
///
/// Containment checks run in precedence order: optimal first, then
/// in-range; a value excluded from both is out-of-range. Overlapping or
/// inconsistent source intervals therefore resolve toward the more
/// favorable classification. An absent interval never contains any
/// value, so a record with neither optimal nor in-range defined
/// classifies everything as out-of-range.
///
/// The function is total: every finite value maps to exactly one band.
pub fn classify(value: f64, ranges: &RangeSet) -> Classification {
    if ranges
        .optimal
        .as_ref()
        .is_some_and(|interval| interval.contains(value))
    {
        return Classification::Optimal;
    }
    if ranges
        .in_range
        .as_ref()
        .is_some_and(|interval| interval.contains(value))
    {
        return Classification::InRange;
    }
    Classification::OutRange
}
