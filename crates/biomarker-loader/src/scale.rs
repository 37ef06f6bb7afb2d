//! Visual domain derivation and segment construction.
//!
//! Converts a resolved `RangeSet` into the structure a chart needs: a
//! non-degenerate horizontal domain and an ordered, gapless sequence of
//! classified segments spanning it. The canonical shape is
//! out / in / optimal / in / out, with any piece dropped when its span
//! collapses or its source interval is undefined.

use biomarker_types::{Classification, RangeSet, Segment, VisualDomain};

/// Derives the visual domain for a biomarker's chart.
///
/// The lower edge is the smallest defined lower bound across the three
/// intervals (0 when none exists). The upper edge is the largest
/// defined upper bound; with no upper bound anywhere it falls back to
/// 1.4x the current value, or `min + 1` absent a current value. A
/// degenerate result (`max <= min`) is widened so proportional layout
/// always has a strictly positive span to work with.
pub fn derive_domain(ranges: &RangeSet, graph_value: Option<f64>) -> VisualDomain {
    let intervals = [&ranges.optimal, &ranges.in_range, &ranges.out_range];

    let min = intervals
        .iter()
        .filter_map(|interval| interval.as_ref().and_then(|i| i.min))
        .reduce(f64::min)
        .unwrap_or(0.0);

    let mut max = intervals
        .iter()
        .filter_map(|interval| interval.as_ref().and_then(|i| i.max))
        .reduce(f64::max)
        .unwrap_or_else(|| match graph_value {
            Some(value) => value * 1.4,
            None => min + 1.0,
        });

    if max <= min {
        max = min
            + match graph_value {
                Some(value) => (value * 0.5).max(1.0),
                None => 1.0,
            };
    }

    VisualDomain { min, max }
}

/// Partitions the domain into ordered, classified segments.
///
/// Working bounds fall back leftward: the in-range bounds default to the
/// optimal bounds and then to the domain edges, and the optimal bounds
/// default to the in-range bounds. The out-of-range interval is not
/// consulted directly; it is implied by the domain edges.
///
/// Candidate segments with non-positive span are dropped, which also
/// silently absorbs inverted source intervals. If every candidate
/// collapses, a single in-range segment spanning the whole domain is
/// returned so callers always have something to render.
pub fn build_segments(ranges: &RangeSet, domain: VisualDomain) -> Vec<Segment> {
    let graph_min = domain.min;
    let graph_max = domain.max;

    let optimal_min = ranges.optimal.as_ref().and_then(|i| i.min);
    let optimal_max = ranges.optimal.as_ref().and_then(|i| i.max);
    let in_min = ranges
        .in_range
        .as_ref()
        .and_then(|i| i.min)
        .or(optimal_min)
        .unwrap_or(graph_min);
    let in_max = ranges
        .in_range
        .as_ref()
        .and_then(|i| i.max)
        .or(optimal_max)
        .unwrap_or(graph_max);
    let opt_min = optimal_min.unwrap_or(in_min);
    let opt_max = optimal_max.unwrap_or(in_max);

    let mut segments = Vec::with_capacity(5);

    if graph_min < in_min {
        segments.push(Segment::new(Classification::OutRange, graph_min, in_min));
    }
    if ranges.in_range.is_some() && in_min < opt_min {
        segments.push(Segment::new(Classification::InRange, in_min, opt_min));
    }
    if ranges.optimal.is_some() {
        segments.push(Segment::new(Classification::Optimal, opt_min, opt_max));
    }
    if ranges.in_range.is_some() && opt_max < in_max {
        segments.push(Segment::new(Classification::InRange, opt_max, in_max));
    }
    if graph_max > in_max {
        segments.push(Segment::new(Classification::OutRange, in_max, graph_max));
    }

    segments.retain(|segment| segment.max > segment.min);

    if segments.is_empty() {
        return vec![Segment::new(Classification::InRange, graph_min, graph_max)];
    }
    segments
}
