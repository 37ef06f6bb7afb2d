//! In-memory reference-range store.
//!
//! Holds the parsed table indexed by biomarker name, along with any
//! measured values embedded in the table itself. Built once per load;
//! lookups are by exact (trimmed) name.

use std::collections::HashMap;
use std::path::Path;

use crate::record::{parse_table, Record};
use crate::types::{LoadConfig, LoadError, LoadResult};
use crate::values::extract_graph_values;

/// In-memory store for a loaded reference-range table.
///
/// # Example
///
/// ```
/// use biomarker_loader::{LoadConfig, ReferenceStore};
///
/// let text = "Biomarker_Name,Unit,Range_Optimal\nCreatinine,mg/dL,0.7-1.1\n";
/// let store = ReferenceStore::from_text(text, LoadConfig::default());
///
/// let record = store.record("Creatinine").unwrap();
/// assert_eq!(record.get("Unit"), Some("mg/dL"));
/// ```
#[derive(Debug)]
pub struct ReferenceStore {
    /// Records indexed by trimmed identity. Duplicate identities are
    /// last-wins, matching insertion over a plain map.
    records: HashMap<String, Record>,
    /// Measured values embedded in the table, keyed by biomarker name.
    graph_values: HashMap<String, f64>,
    config: LoadConfig,
}

impl ReferenceStore {
    /// Builds a store from raw table text.
    ///
    /// Table parsing is best-effort and never fails; an empty or
    /// unparseable table simply yields a store with no records.
    pub fn from_text(text: &str, config: LoadConfig) -> Self {
        let rows = parse_table(text, &config);
        let graph_values = extract_graph_values(&rows, &config);

        let mut records = HashMap::with_capacity(rows.len());
        for record in rows {
            let Some(identity) = record.get(&config.identity_column) else {
                continue;
            };
            records.insert(identity.trim().to_string(), record);
        }

        tracing::debug!(
            records = records.len(),
            embedded_values = graph_values.len(),
            "reference table loaded"
        );

        Self {
            records,
            graph_values,
            config,
        }
    }

    /// Builds a store from a file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P, config: LoadConfig) -> LoadResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text, config))
    }

    /// Returns the record for a biomarker by exact name match.
    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Returns the measured value embedded in the table for a biomarker,
    /// if one was present.
    pub fn graph_value(&self, name: &str) -> Option<f64> {
        self.graph_values.get(name).copied()
    }

    /// Returns the number of records in the store.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the load configuration this store was built with.
    pub fn config(&self) -> &LoadConfig {
        &self.config
    }
}
