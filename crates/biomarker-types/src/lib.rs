//! # biomarker-types
//!
//! Type definitions for biomarker reference ranges.
//!
//! This crate provides the value types shared by the reference-range
//! engine: intervals parsed from free-text range annotations,
//! classification bands, resolved range sets, and the visual domain /
//! segment structures consumed by a rendering layer.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for minimal-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use biomarker_types::{Classification, Interval, RangeSet};
//!
//! // Parse a free-text range annotation
//! let optimal = Interval::parse("70-100 mg/dL").unwrap();
//! assert_eq!(optimal.min, Some(70.0));
//! assert_eq!(optimal.max, Some(100.0));
//! assert!(optimal.contains(85.0));
//!
//! let ranges = RangeSet {
//!     optimal: Some(optimal),
//!     in_range: Interval::parse("50-120"),
//!     out_range: None,
//! };
//! assert_eq!(ranges.representative().unwrap().min, Some(70.0));
//! ```
//!
//! ## Without Serde
//!
//! To use this crate without serde:
//!
//! ```toml
//! [dependencies]
//! biomarker-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod biomarker;
mod classification;
mod display;
mod interval;
mod range_set;
mod segment;

// Re-export all public types at crate root
pub use biomarker::BiomarkerSeed;
pub use classification::Classification;
pub use display::format_value;
pub use interval::Interval;
pub use range_set::RangeSet;
pub use segment::{Segment, VisualDomain};
