//! Classification bands for biomarker values.

/// The band a biomarker value falls into relative to its reference
/// thresholds.
///
/// # Examples
///
/// ```
/// use biomarker_types::Classification;
///
/// assert_eq!(Classification::Optimal.label(), "Optimal");
/// assert_eq!(Classification::OutRange.css_class(), "status-out-range");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// Value falls within the optimal interval.
    Optimal,
    /// Value falls within the broader in-range interval.
    InRange,
    /// Value falls outside both optimal and in-range intervals.
    OutRange,
}

impl Classification {
    /// Returns the human-readable status label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::InRange => "In range",
            Self::OutRange => "Out of range",
        }
    }

    /// Returns the styling hook class name for this classification.
    ///
    /// Label text and styling are the rendering layer's concern; this
    /// only provides a stable identifier per band.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Optimal => "status-optimal",
            Self::InRange => "status-in-range",
            Self::OutRange => "status-out-range",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Classification::Optimal.label(), "Optimal");
        assert_eq!(Classification::InRange.label(), "In range");
        assert_eq!(Classification::OutRange.label(), "Out of range");
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(Classification::Optimal.css_class(), "status-optimal");
        assert_eq!(Classification::InRange.css_class(), "status-in-range");
        assert_eq!(Classification::OutRange.css_class(), "status-out-range");
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Classification::InRange.to_string(), "In range");
    }
}
