//! Extraction of measured values embedded in the reference table.
//!
//! Some exports smuggle the latest measurement into the identity column
//! as a synthetic row of the form `<Name> Graph Value: <number>`. These
//! rows carry no ranges of their own; they override the caller's seed
//! value for the named biomarker.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::record::Record;
use crate::types::LoadConfig;

fn graph_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(.*)\s+graph value:\s*([+-]?\d*\.?\d+)").expect("valid regex")
    })
}

/// Collects embedded measured values keyed by biomarker name.
///
/// Rows whose identity field does not match the embedded-value pattern
/// are ignored; a matching row with an unparseable number contributes
/// nothing. Later rows overwrite earlier ones for the same name.
pub fn extract_graph_values(records: &[Record], config: &LoadConfig) -> HashMap<String, f64> {
    let mut values = HashMap::new();

    for record in records {
        let Some(identity) = record.get(&config.identity_column) else {
            continue;
        };
        let identity = identity.trim();
        if identity.is_empty() {
            continue;
        }

        let Some(caps) = graph_value_re().captures(identity) else {
            continue;
        };

        let name = caps[1].trim().to_string();
        if let Ok(value) = caps[2].parse::<f64>() {
            values.insert(name, value);
        }
    }

    values
}
