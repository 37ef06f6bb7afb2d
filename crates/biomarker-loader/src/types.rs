//! Loader-specific types: errors and configuration.

use thiserror::Error;

/// Errors that can occur while loading a reference-range table.
///
/// Cell-level parsing never errors: malformed range text or missing
/// columns degrade to absent values. Only resource access is fallible.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error reading the table resource.
    #[error("IO error reading reference table: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("Reference table not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Configuration for loading a reference-range table.
///
/// Defaults match the standard export schema: identity in
/// `Biomarker_Name`, units in `Unit`.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Name of the column holding the biomarker identity.
    pub identity_column: String,
    /// Name of the column holding the measurement unit.
    pub unit_column: String,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            identity_column: "Biomarker_Name".to_string(),
            unit_column: "Unit".to_string(),
        }
    }
}
