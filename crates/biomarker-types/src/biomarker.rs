//! Biomarker seed definitions.

/// A caller-supplied biomarker entry selecting which rows to display.
///
/// The seed carries a default current value; the loader overrides it
/// when the source table embeds a measured value for the same name.
/// Seeds are immutable once created and are paired with table rows by
/// exact name match.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiomarkerSeed {
    /// Biomarker name, matched exactly against the table's identity column.
    pub name: String,
    /// Default current value, used when the table supplies none.
    pub graph_value: f64,
    /// Human-readable observation date shown in the detail view.
    pub date_label: String,
}

impl BiomarkerSeed {
    /// Creates a new seed entry.
    pub fn new(name: impl Into<String>, graph_value: f64, date_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph_value,
            date_label: date_label.into(),
        }
    }
}
