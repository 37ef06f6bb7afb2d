//! Header-driven record parsing for reference-range tables.
//!
//! The source table is a comma-separated, optionally double-quote-escaped
//! export whose column set is not fixed ahead of time. Records therefore
//! carry their fields as an ordered name/value list driven by the header
//! row instead of a fixed struct.

use csv::ReaderBuilder;

use crate::types::LoadConfig;

/// A single row of the reference table as named fields.
///
/// Field names come from the table's header row and keep header order,
/// which matters for resolution rules that pick the first matching
/// column.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Creates a record from an ordered list of (name, value) fields.
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Returns the value of the named field, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over (name, value) pairs in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parses raw table text into records.
///
/// The first non-empty line is the header, defining field names in
/// order. Quoting follows RFC 4180: commas inside double quotes are not
/// separators and a doubled quote is an escaped literal quote. All
/// values are trimmed; rows shorter than the header are padded with
/// empty strings; rows whose identity column is missing or blank are
/// dropped.
///
/// Parsing is best-effort and never fails: malformed quoting at worst
/// makes a field absorb more or less text than intended.
pub fn parse_table(text: &str, config: &LoadConfig) -> Vec<Record> {
    // Collapse to non-empty trimmed lines before handing off to the CSV
    // reader, so blank separator lines never produce empty records.
    let cleaned = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(cleaned.as_bytes());

    let mut rows = reader.records();

    let headers: Vec<String> = match rows.next() {
        Some(Ok(header_row)) => header_row
            .iter()
            // Handle UTF-8 BOM at start of file
            .map(|name| name.trim_start_matches('\u{feff}').to_string())
            .collect(),
        _ => return Vec::new(),
    };

    let mut records = Vec::new();
    for result in rows {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!("skipping unreadable table row: {e}");
                continue;
            }
        };

        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), row.get(i).unwrap_or("").to_string()))
            .collect();
        let record = Record::new(fields);

        let has_identity = record
            .get(&config.identity_column)
            .is_some_and(|value| !value.trim().is_empty());
        if has_identity {
            records.push(record);
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LoadConfig {
        LoadConfig::default()
    }

    #[test]
    fn test_parse_basic_table() {
        let text = "Biomarker_Name,Unit,Range_Optimal\nCreatinine,mg/dL,0.7-1.1\n";
        let records = parse_table(text, &config());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Biomarker_Name"), Some("Creatinine"));
        assert_eq!(records[0].get("Unit"), Some("mg/dL"));
        assert_eq!(records[0].get("Range_Optimal"), Some("0.7-1.1"));
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let text = "Biomarker_Name,Notes\nGlucose,\"fasting, morning draw\"\n";
        let records = parse_table(text, &config());
        assert_eq!(records[0].get("Notes"), Some("fasting, morning draw"));
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        let text = "Biomarker_Name,Notes\nGlucose,\"the \"\"gold\"\" standard\"\n";
        let records = parse_table(text, &config());
        assert_eq!(records[0].get("Notes"), Some("the \"gold\" standard"));
    }

    #[test]
    fn test_short_rows_pad_with_empty() {
        let text = "Biomarker_Name,Unit,Range_Optimal\nGlucose\n";
        let records = parse_table(text, &config());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Unit"), Some(""));
        assert_eq!(records[0].get("Range_Optimal"), Some(""));
    }

    #[test]
    fn test_blank_identity_rows_dropped() {
        let text = "Biomarker_Name,Unit\nGlucose,mg/dL\n,mg/dL\n   ,mmol/L\n";
        let records = parse_table(text, &config());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Biomarker_Name"), Some("Glucose"));
    }

    #[test]
    fn test_blank_lines_ignored() {
        let text = "\n\nBiomarker_Name,Unit\n\nGlucose,mg/dL\n   \n";
        let records = parse_table(text, &config());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse_table("", &config()).is_empty());
        assert!(parse_table("\n  \n", &config()).is_empty());
    }

    #[test]
    fn test_values_are_trimmed() {
        let text = "Biomarker_Name,Unit\n  Glucose  ,  mg/dL \n";
        let records = parse_table(text, &config());
        assert_eq!(records[0].get("Biomarker_Name"), Some("Glucose"));
        assert_eq!(records[0].get("Unit"), Some("mg/dL"));
    }

    #[test]
    fn test_bom_stripped_from_header() {
        let text = "\u{feff}Biomarker_Name,Unit\nGlucose,mg/dL\n";
        let records = parse_table(text, &config());
        assert_eq!(records[0].get("Biomarker_Name"), Some("Glucose"));
    }

    #[test]
    fn test_field_order_follows_header() {
        let text = "Biomarker_Name,B,A\nGlucose,2,1\n";
        let records = parse_table(text, &config());
        let names: Vec<&str> = records[0].fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Biomarker_Name", "B", "A"]);
    }
}
