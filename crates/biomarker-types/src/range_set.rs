//! Resolved reference ranges for a single biomarker.

use crate::Interval;

/// The three classification intervals resolved for one biomarker.
///
/// Each interval may be absent when the source table lacks the
/// corresponding column or the cell text failed to parse. The intervals
/// come from loosely structured source data and may overlap or
/// contradict each other; consumers resolve that per their own rules.
///
/// # Examples
///
/// ```
/// use biomarker_types::{Interval, RangeSet};
///
/// let ranges = RangeSet {
///     optimal: Interval::parse("70-100"),
///     in_range: Interval::parse("50-120"),
///     out_range: None,
/// };
///
/// // The representative interval is the first defined one
/// assert_eq!(ranges.representative().unwrap().min, Some(70.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeSet {
    /// The optimal interval, if resolved.
    pub optimal: Option<Interval>,
    /// The broader in-range interval, if resolved.
    pub in_range: Option<Interval>,
    /// The out-of-range interval, if resolved.
    pub out_range: Option<Interval>,
}

impl RangeSet {
    /// Returns the first defined interval, in optimal → in-range →
    /// out-of-range order.
    ///
    /// This is the interval shown as the biomarker's headline range.
    pub fn representative(&self) -> Option<&Interval> {
        self.optimal
            .as_ref()
            .or(self.in_range.as_ref())
            .or(self.out_range.as_ref())
    }

    /// Returns true if no interval is defined.
    pub fn is_empty(&self) -> bool {
        self.optimal.is_none() && self.in_range.is_none() && self.out_range.is_none()
    }
}
