//! Per-biomarker card view models.
//!
//! A `CardModel` is everything a rendering layer needs for one
//! biomarker: formatted value and range text, status classification,
//! the visual domain with its segment partition, and the legend rows
//! for the detail view. Models are built fresh per render pass and
//! never mutated.

use std::sync::OnceLock;

use regex::Regex;

use biomarker_loader::{
    build_segments, classify, derive_domain, resolve_ranges, FieldMatcher, ReferenceStore,
};
use biomarker_types::{
    format_value, BiomarkerSeed, Classification, Interval, RangeSet, Segment, VisualDomain,
};

/// Shown when a biomarker has no parseable range at all.
const RANGE_UNAVAILABLE: &str = "Range unavailable";

fn score_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bscore\b").expect("valid regex"))
}

/// One row of the detail-view legend.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LegendRow {
    /// Formatted range text for the segment, unit included.
    pub text: String,
    /// Display label of the segment's classification.
    pub label: &'static str,
    /// Styling hook for the segment's classification.
    pub css_class: &'static str,
}

/// Renderable state for one biomarker card.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CardModel {
    /// Full biomarker name (detail-view title).
    pub name: String,
    /// Card title: the name with a trailing "Score" word dropped.
    pub title: String,
    /// Observation date label.
    pub date_label: String,
    /// Measurement unit, when known.
    pub unit: Option<String>,
    /// Current value (table-embedded measurement, else the seed default).
    pub value: f64,
    /// Formatted current value with unit.
    pub formatted_value: String,
    /// Status classification of the current value.
    pub status: Classification,
    /// Headline range text (representative interval), unit included.
    pub range_text: String,
    /// Resolved reference ranges.
    pub ranges: RangeSet,
    /// Visual domain the segments span.
    pub domain: VisualDomain,
    /// Formatted domain lower edge.
    pub min_label: String,
    /// Formatted domain upper edge.
    pub max_label: String,
    /// Ordered, gapless classified segments over the domain.
    pub segments: Vec<Segment>,
    /// Detail-view legend rows, top-of-scale first.
    pub legend: Vec<LegendRow>,
}

impl CardModel {
    /// Builds the card model for one seed biomarker.
    ///
    /// The table row is looked up by exact name; a missing row degrades
    /// to a card with placeholder range text and the single fallback
    /// segment, never an error.
    pub fn build(seed: &BiomarkerSeed, store: &ReferenceStore, matcher: &dyn FieldMatcher) -> Self {
        let record = store.record(&seed.name);
        let value = store.graph_value(&seed.name).unwrap_or(seed.graph_value);

        let ranges = record
            .map(|r| resolve_ranges(r, matcher))
            .unwrap_or_default();
        let unit = record
            .and_then(|r| r.get(&store.config().unit_column))
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .or_else(|| default_unit(&seed.name));

        let status = classify(value, &ranges);
        let domain = derive_domain(&ranges, Some(value));
        let segments = build_segments(&ranges, domain);
        let legend = build_legend(&segments, unit.as_deref());

        let range_text = match ranges.representative() {
            Some(interval) => with_unit(&interval.to_string(), unit.as_deref()),
            None => RANGE_UNAVAILABLE.to_string(),
        };

        Self {
            title: strip_score_word(&seed.name),
            name: seed.name.clone(),
            date_label: seed.date_label.clone(),
            formatted_value: with_unit(&format_value(Some(value)), unit.as_deref()),
            unit,
            value,
            status,
            range_text,
            ranges,
            domain,
            min_label: format_value(Some(domain.min)),
            max_label: format_value(Some(domain.max)),
            segments,
            legend,
        }
    }

    /// Per-segment heights for the card's mini scale, as percentages of
    /// the domain span with a 6% floor so thin bands stay visible.
    pub fn mini_scale_heights(&self) -> Vec<f64> {
        let total = self.domain.span();
        self.segments
            .iter()
            .map(|segment| (segment.span() / total * 100.0).max(6.0))
            .collect()
    }
}

/// Builds legend rows from segments, reversed so the top of the scale
/// comes first.
fn build_legend(segments: &[Segment], unit: Option<&str>) -> Vec<LegendRow> {
    segments
        .iter()
        .rev()
        .map(|segment| LegendRow {
            text: with_unit(
                &Interval::closed(segment.min, segment.max).to_string(),
                unit,
            ),
            label: segment.label(),
            css_class: segment.classification.css_class(),
        })
        .collect()
}

/// Drops a standalone "Score" word from a card title.
fn strip_score_word(name: &str) -> String {
    score_word_re().replace(name, "").trim().to_string()
}

fn with_unit(text: &str, unit: Option<&str>) -> String {
    match unit {
        Some(unit) => format!("{text} {unit}"),
        None => text.to_string(),
    }
}

/// Unit fallback for biomarkers whose table row omits one.
fn default_unit(name: &str) -> Option<String> {
    if name.eq_ignore_ascii_case("creatinine") {
        Some("mg/dL".to_string())
    } else {
        None
    }
}
