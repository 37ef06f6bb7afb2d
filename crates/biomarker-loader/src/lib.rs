//! # biomarker-loader
//!
//! Reference-range table loader and classification engine for biomarker
//! data.
//!
//! This crate turns a loosely structured CSV export of reference ranges
//! into renderable structure: it parses header-driven records, resolves
//! each biomarker's optimal / in-range / out-of-range intervals, derives
//! a visual domain, partitions it into classified segments, and
//! classifies the current value against the resolved ranges.
//!
//! Cell-level parsing is deliberately infallible: malformed range text,
//! missing columns, and short rows all degrade to absent values rather
//! than errors, and every downstream step has a fallback for absent
//! input. The only fallible operation is reading the resource itself.
//!
//! ## Usage
//!
//! ```
//! use biomarker_loader::{
//!     build_segments, classify, derive_domain, resolve_ranges, LoadConfig, ReferenceStore,
//!     SuffixMatcher,
//! };
//! use biomarker_loader::biomarker_types::Classification;
//!
//! let text = "\
//! Biomarker_Name,Unit,Range_Optimal,Range_InRange
//! Glucose,mg/dL,70-100,50-120
//! ";
//! let store = ReferenceStore::from_text(text, LoadConfig::default());
//! let record = store.record("Glucose").unwrap();
//!
//! let ranges = resolve_ranges(record, &SuffixMatcher::default());
//! assert_eq!(classify(85.0, &ranges), Classification::Optimal);
//!
//! let domain = derive_domain(&ranges, Some(85.0));
//! let segments = build_segments(&ranges, domain);
//! assert!(!segments.is_empty());
//! ```

#![warn(missing_docs)]

mod classify;
mod record;
mod resolver;
mod scale;
mod store;
mod types;
mod values;

// Re-export biomarker-types for convenience
pub use biomarker_types;

pub use classify::classify;
pub use record::{parse_table, Record};
pub use resolver::{resolve_ranges, FieldMatcher, SuffixMatcher};
pub use scale::{build_segments, derive_domain};
pub use store::ReferenceStore;
pub use types::{LoadConfig, LoadError, LoadResult};
pub use values::extract_graph_values;

#[cfg(test)]
mod tests {
    use super::*;
    use biomarker_types::Classification;

    const TABLE: &str = "\
Biomarker_Name,Unit,Range_Optimal,Range_InRange,Range_OutOfRange
Glucose,mg/dL,70-100,50-120,<50
Ferritin,ng/mL,,,N/A
";

    #[test]
    fn test_pipeline_classifies_and_segments() {
        let store = ReferenceStore::from_text(TABLE, LoadConfig::default());
        let record = store.record("Glucose").unwrap();
        let ranges = resolve_ranges(record, &SuffixMatcher::default());

        assert_eq!(classify(85.0, &ranges), Classification::Optimal);

        let domain = derive_domain(&ranges, Some(85.0));
        let segments = build_segments(&ranges, domain);
        let bounds: Vec<(f64, f64)> = segments.iter().map(|s| (s.min, s.max)).collect();
        assert_eq!(bounds, vec![(50.0, 70.0), (70.0, 100.0), (100.0, 120.0)]);
    }

    #[test]
    fn test_pipeline_degrades_on_malformed_ranges() {
        let store = ReferenceStore::from_text(TABLE, LoadConfig::default());
        let record = store.record("Ferritin").unwrap();
        let ranges = resolve_ranges(record, &SuffixMatcher::default());

        assert!(ranges.is_empty());
        assert_eq!(classify(42.0, &ranges), Classification::OutRange);

        // Still renderable: a whole-domain fallback segment.
        let domain = derive_domain(&ranges, Some(42.0));
        let segments = build_segments(&ranges, domain);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].min, domain.min);
        assert_eq!(segments[0].max, domain.max);
    }
}
