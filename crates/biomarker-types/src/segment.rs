//! Visual domain and segment types for range charts.

use crate::Classification;

/// The horizontal extent used to lay out segments proportionally.
///
/// Derivation guarantees `max > min` strictly, so a span is always
/// available for proportional layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualDomain {
    /// Lower edge of the domain.
    pub min: f64,
    /// Upper edge of the domain.
    pub max: f64,
}

impl VisualDomain {
    /// Returns the width of the domain.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// A contiguous classified sub-span of the visual domain.
///
/// Segment lists produced by the engine are ordered by ascending `min`,
/// gapless across their domain, and every segment has `max > min`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// The classification band this segment renders as.
    pub classification: Classification,
    /// Lower edge of the segment.
    pub min: f64,
    /// Upper edge of the segment.
    pub max: f64,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(classification: Classification, min: f64, max: f64) -> Self {
        Self {
            classification,
            min,
            max,
        }
    }

    /// Returns the width of the segment.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns the display label for this segment's classification.
    pub fn label(&self) -> &'static str {
        self.classification.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_span() {
        let domain = VisualDomain { min: 10.0, max: 25.0 };
        assert_eq!(domain.span(), 15.0);
    }

    #[test]
    fn test_segment_span_and_label() {
        let segment = Segment::new(Classification::Optimal, 70.0, 100.0);
        assert_eq!(segment.span(), 30.0);
        assert_eq!(segment.label(), "Optimal");
    }
}
