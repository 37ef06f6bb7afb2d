//! Numeric interval type parsed from free-text range annotations.
//!
//! Reference-range tables express thresholds in loosely structured text:
//! `"70-100"`, `"< 5"`, `">= 40 mg/dL"`, or a bare number. This module
//! provides the heuristic parser that normalizes those annotations into
//! numeric intervals with optionally open bounds.

use std::sync::OnceLock;

use regex::Regex;

use crate::format_value;

/// A numeric interval with optionally open bounds.
///
/// An open bound (`None`) places no constraint on that side. The original
/// annotation text is retained in `raw` for display and diagnostics.
///
/// Parsing is best-effort over free-text annotations and intentionally
/// does not validate that the bounds form a sensible physiological range:
/// malformed source data may produce inverted intervals (`min > max`),
/// which downstream consumers must tolerate.
///
/// # Examples
///
/// ```
/// use biomarker_types::Interval;
///
/// // Closed range
/// let interval = Interval::parse("70-100").unwrap();
/// assert_eq!(interval.min, Some(70.0));
/// assert_eq!(interval.max, Some(100.0));
/// assert!(interval.contains(85.0));
/// assert!(!interval.contains(110.0));
///
/// // Open-below range; unit annotations are ignored
/// let interval = Interval::parse("< 5 mg/dL").unwrap();
/// assert_eq!(interval.min, None);
/// assert_eq!(interval.max, Some(5.0));
/// assert!(interval.contains(-100.0));
///
/// // Bare number yields a degenerate interval
/// let interval = Interval::parse("7.5").unwrap();
/// assert!(interval.is_point());
///
/// // Unparseable annotations yield None
/// assert!(Interval::parse("N/A").is_none());
/// assert!(Interval::parse("").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Lower bound (inclusive). `None` means unbounded below.
    pub min: Option<f64>,
    /// Upper bound (inclusive). `None` means unbounded above.
    pub max: Option<f64>,
    /// The original annotation text this interval was parsed from.
    pub raw: String,
}

fn closed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-?\d*\.?\d+)-(-?\d*\.?\d+)$").expect("valid regex"))
}

fn below_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:<=|<)(-?\d*\.?\d+)$").expect("valid regex"))
}

fn above_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:>=|>)(-?\d*\.?\d+)$").expect("valid regex"))
}

fn bare_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d*\.?\d+$").expect("valid regex"))
}

impl Interval {
    /// Creates a closed interval with both bounds present.
    pub fn closed(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            raw: String::new(),
        }
    }

    /// Creates an interval unbounded below.
    pub fn below(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
            raw: String::new(),
        }
    }

    /// Creates an interval unbounded above.
    pub fn above(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
            raw: String::new(),
        }
    }

    /// Parses a free-text range annotation into an interval.
    ///
    /// Every character except digits, `.`, `<`, `>`, `=` and `-` is
    /// stripped before matching, which discards units and annotation
    /// noise. The sanitized text is then matched against these shapes,
    /// first match wins:
    ///
    /// 1. `NUM-NUM` — closed interval
    /// 2. `<NUM` or `<=NUM` — unbounded below
    /// 3. `>NUM` or `>=NUM` — unbounded above
    /// 4. bare `NUM` — degenerate interval (min == max)
    ///
    /// where `NUM` is an optionally signed decimal. Anything else,
    /// including empty input, yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use biomarker_types::Interval;
    ///
    /// assert_eq!(Interval::parse("70-100").unwrap().min, Some(70.0));
    /// assert_eq!(Interval::parse("<= 0.9").unwrap().max, Some(0.9));
    /// assert_eq!(Interval::parse(">40 ng/mL").unwrap().min, Some(40.0));
    /// assert!(Interval::parse("pending").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let sanitized: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '<' | '>' | '=' | '-'))
            .collect();
        if sanitized.is_empty() {
            return None;
        }

        if let Some(caps) = closed_re().captures(&sanitized) {
            let min = caps[1].parse::<f64>().ok()?;
            let max = caps[2].parse::<f64>().ok()?;
            return Some(Self {
                min: Some(min),
                max: Some(max),
                raw: raw.to_string(),
            });
        }

        if let Some(caps) = below_re().captures(&sanitized) {
            let max = caps[1].parse::<f64>().ok()?;
            return Some(Self {
                min: None,
                max: Some(max),
                raw: raw.to_string(),
            });
        }

        if let Some(caps) = above_re().captures(&sanitized) {
            let min = caps[1].parse::<f64>().ok()?;
            return Some(Self {
                min: Some(min),
                max: None,
                raw: raw.to_string(),
            });
        }

        if bare_re().is_match(&sanitized) {
            let value = sanitized.parse::<f64>().ok()?;
            return Some(Self {
                min: Some(value),
                max: Some(value),
                raw: raw.to_string(),
            });
        }

        None
    }

    /// Returns true if the given value falls within this interval.
    ///
    /// An open bound never constrains its side.
    ///
    /// # Examples
    ///
    /// ```
    /// use biomarker_types::Interval;
    ///
    /// let interval = Interval::parse(">=40").unwrap();
    /// assert!(interval.contains(40.0));
    /// assert!(interval.contains(1000.0));
    /// assert!(!interval.contains(39.9));
    /// ```
    pub fn contains(&self, value: f64) -> bool {
        let above_min = self.min.map_or(true, |min| value >= min);
        let below_max = self.max.map_or(true, |max| value <= max);
        above_min && below_max
    }

    /// Returns true if this is a degenerate closed interval (min == max).
    pub fn is_point(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min == max)
    }
}

impl std::fmt::Display for Interval {
    /// Formats the interval for display.
    ///
    /// Closed non-degenerate intervals render as `"MIN - MAX"`,
    /// unbounded-below as `"< MAX"`, unbounded-above as `"> MIN"`,
    /// degenerate intervals as the single number, and an interval with
    /// no bounds at all as an em-dash placeholder.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min != max => {
                write!(f, "{} - {}", format_value(Some(min)), format_value(Some(max)))
            }
            (None, Some(max)) => write!(f, "< {}", format_value(Some(max))),
            (Some(min), None) => write!(f, "> {}", format_value(Some(min))),
            (Some(min), _) => write!(f, "{}", format_value(Some(min))),
            (None, None) => write!(f, "—"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_closed_range() {
        let interval = Interval::parse("70-100").unwrap();
        assert_eq!(interval.min, Some(70.0));
        assert_eq!(interval.max, Some(100.0));
        assert_eq!(interval.raw, "70-100");
    }

    #[test]
    fn test_parse_closed_range_with_noise() {
        // Units, spaces and stray annotations are stripped before matching
        let interval = Interval::parse("70 - 100 mg/dL").unwrap();
        assert_eq!(interval.min, Some(70.0));
        assert_eq!(interval.max, Some(100.0));

        let interval = Interval::parse("0.5-1.3 (fasting)").unwrap();
        assert_eq!(interval.min, Some(0.5));
        assert_eq!(interval.max, Some(1.3));
    }

    #[test]
    fn test_parse_negative_bounds() {
        let interval = Interval::parse("-5--3").unwrap();
        assert_eq!(interval.min, Some(-5.0));
        assert_eq!(interval.max, Some(-3.0));
    }

    #[test]
    fn test_parse_less_than() {
        let interval = Interval::parse("<5").unwrap();
        assert_eq!(interval.min, None);
        assert_eq!(interval.max, Some(5.0));

        let interval = Interval::parse("<= 0.9").unwrap();
        assert_eq!(interval.min, None);
        assert_eq!(interval.max, Some(0.9));
    }

    #[test]
    fn test_parse_greater_than() {
        let interval = Interval::parse(">=40").unwrap();
        assert_eq!(interval.min, Some(40.0));
        assert_eq!(interval.max, None);

        let interval = Interval::parse("> 12.5 ng/mL").unwrap();
        assert_eq!(interval.min, Some(12.5));
        assert_eq!(interval.max, None);
    }

    #[test]
    fn test_parse_bare_number() {
        let interval = Interval::parse("7.5").unwrap();
        assert_eq!(interval.min, Some(7.5));
        assert_eq!(interval.max, Some(7.5));
        assert!(interval.is_point());

        let interval = Interval::parse("-2").unwrap();
        assert_eq!(interval.min, Some(-2.0));
    }

    #[test]
    fn test_parse_leading_decimal() {
        let interval = Interval::parse(".5-.9").unwrap();
        assert_eq!(interval.min, Some(0.5));
        assert_eq!(interval.max, Some(0.9));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Interval::parse("").is_none());
        assert!(Interval::parse("N/A").is_none());
        assert!(Interval::parse("pending").is_none());
        assert!(Interval::parse("see notes").is_none());
        assert!(Interval::parse("<").is_none());
        assert!(Interval::parse("--").is_none());
    }

    #[test]
    fn test_parse_inverted_range_passes_through() {
        // Malformed source data is not auto-corrected; consumers must
        // tolerate inverted intervals.
        let interval = Interval::parse("100-70").unwrap();
        assert_eq!(interval.min, Some(100.0));
        assert_eq!(interval.max, Some(70.0));
    }

    #[test]
    fn test_contains() {
        let closed = Interval::parse("70-100").unwrap();
        assert!(closed.contains(70.0));
        assert!(closed.contains(100.0));
        assert!(closed.contains(85.0));
        assert!(!closed.contains(69.9));
        assert!(!closed.contains(100.1));

        let below = Interval::parse("<5").unwrap();
        assert!(below.contains(5.0));
        assert!(below.contains(-1000.0));
        assert!(!below.contains(5.1));

        let above = Interval::parse(">40").unwrap();
        assert!(above.contains(40.0));
        assert!(above.contains(1e9));
        assert!(!above.contains(39.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::parse("70-100").unwrap().to_string(), "70 - 100");
        assert_eq!(Interval::parse("<5").unwrap().to_string(), "< 5");
        assert_eq!(Interval::parse(">=40").unwrap().to_string(), "> 40");
        assert_eq!(Interval::parse("7.5").unwrap().to_string(), "7.5");
    }

    #[test]
    fn test_display_parse_roundtrip() {
        // Formatting a closed interval and re-parsing it reproduces the bounds
        let original = Interval::parse("70-100").unwrap();
        let reparsed = Interval::parse(&original.to_string()).unwrap();
        assert_eq!(reparsed.min, original.min);
        assert_eq!(reparsed.max, original.max);
    }
}
