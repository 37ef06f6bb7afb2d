//! Range resolution: locating classification columns in a record.
//!
//! Reference tables name their range columns loosely (`Adult_Optimal`,
//! `Range_InRange`, ...), so resolution scans field names by suffix
//! instead of expecting a fixed schema. The scan is an injectable
//! strategy so alternate schemas can be supported without touching the
//! resolver itself.

use biomarker_types::{Classification, Interval, RangeSet};

use crate::record::Record;

/// Strategy for locating the raw range text of a classification within
/// a record.
pub trait FieldMatcher {
    /// Returns the raw cell text holding the given classification's
    /// range, or `None` if the record has no usable field for it.
    fn field_value<'a>(&self, record: &'a Record, classification: Classification)
        -> Option<&'a str>;
}

/// Default matcher: case-insensitive field-name suffix scan.
///
/// For each classification, fields are scanned in header order and the
/// first one whose name ends with the classification's suffix and whose
/// value is non-empty wins. Tables with multiple candidate columns per
/// classification are therefore tolerated.
#[derive(Debug, Clone)]
pub struct SuffixMatcher {
    /// Suffix identifying optimal-range columns.
    pub optimal_suffix: String,
    /// Suffix identifying in-range columns.
    pub in_range_suffix: String,
    /// Suffix identifying out-of-range columns.
    pub out_range_suffix: String,
}

impl Default for SuffixMatcher {
    fn default() -> Self {
        Self {
            optimal_suffix: "_optimal".to_string(),
            in_range_suffix: "_inrange".to_string(),
            out_range_suffix: "_outofrange".to_string(),
        }
    }
}

impl SuffixMatcher {
    fn suffix(&self, classification: Classification) -> &str {
        match classification {
            Classification::Optimal => &self.optimal_suffix,
            Classification::InRange => &self.in_range_suffix,
            Classification::OutRange => &self.out_range_suffix,
        }
    }
}

impl FieldMatcher for SuffixMatcher {
    fn field_value<'a>(
        &self,
        record: &'a Record,
        classification: Classification,
    ) -> Option<&'a str> {
        let suffix = self.suffix(classification).to_ascii_lowercase();
        record
            .fields()
            .filter(|(name, _)| name.to_ascii_lowercase().ends_with(&suffix))
            .map(|(_, value)| value)
            .find(|value| !value.is_empty())
    }
}

/// Resolves the three classification intervals for a record.
///
/// A classification is absent in the result when the matcher finds no
/// usable field or the cell text fails to parse as an interval.
/// Resolution depends only on the record's own fields, never on
/// surrounding rows.
pub fn resolve_ranges(record: &Record, matcher: &dyn FieldMatcher) -> RangeSet {
    let parse = |classification| {
        matcher
            .field_value(record, classification)
            .and_then(Interval::parse)
    };

    RangeSet {
        optimal: parse(Classification::Optimal),
        in_range: parse(Classification::InRange),
        out_range: parse(Classification::OutRange),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, &str)]) -> Record {
        Record::new(
            fields
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_resolve_all_three_classifications() {
        let record = record(&[
            ("Biomarker_Name", "Glucose"),
            ("Range_Optimal", "70-100"),
            ("Range_InRange", "50-120"),
            ("Range_OutOfRange", "<50"),
        ]);
        let ranges = resolve_ranges(&record, &SuffixMatcher::default());

        assert_eq!(ranges.optimal.as_ref().unwrap().min, Some(70.0));
        assert_eq!(ranges.in_range.as_ref().unwrap().max, Some(120.0));
        assert_eq!(ranges.out_range.as_ref().unwrap().max, Some(50.0));
    }

    #[test]
    fn test_suffix_match_is_case_insensitive() {
        let record = record(&[("ADULT_OPTIMAL", "70-100")]);
        let ranges = resolve_ranges(&record, &SuffixMatcher::default());
        assert!(ranges.optimal.is_some());
    }

    #[test]
    fn test_first_non_empty_candidate_wins() {
        let record = record(&[
            ("Pediatric_Optimal", ""),
            ("Adult_Optimal", "70-100"),
            ("Legacy_Optimal", "60-110"),
        ]);
        let ranges = resolve_ranges(&record, &SuffixMatcher::default());
        assert_eq!(ranges.optimal.unwrap().raw, "70-100");
    }

    #[test]
    fn test_missing_column_is_absent() {
        let record = record(&[("Biomarker_Name", "Glucose"), ("Range_Optimal", "70-100")]);
        let ranges = resolve_ranges(&record, &SuffixMatcher::default());
        assert!(ranges.optimal.is_some());
        assert!(ranges.in_range.is_none());
        assert!(ranges.out_range.is_none());
    }

    #[test]
    fn test_unparseable_cell_is_absent() {
        let record = record(&[("Range_Optimal", "N/A")]);
        let ranges = resolve_ranges(&record, &SuffixMatcher::default());
        assert!(ranges.optimal.is_none());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let record = record(&[("Range_InRange", "50-120")]);
        let matcher = SuffixMatcher::default();
        let first = resolve_ranges(&record, &matcher);
        let second = resolve_ranges(&record, &matcher);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_matcher_suffixes() {
        let matcher = SuffixMatcher {
            optimal_suffix: "_best".to_string(),
            in_range_suffix: "_ok".to_string(),
            out_range_suffix: "_bad".to_string(),
        };
        let record = record(&[("Range_best", "1-2"), ("Range_ok", "0-3")]);
        let ranges = resolve_ranges(&record, &matcher);
        assert!(ranges.optimal.is_some());
        assert!(ranges.in_range.is_some());
        assert!(ranges.out_range.is_none());
    }
}
