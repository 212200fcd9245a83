//! Error types for tabkind-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabkind-core
#[derive(Debug, Error)]
pub enum Error {
    /// Workbook path missing or file undecodable
    #[error("Workbook not valid: {path}: {reason}")]
    WorkbookNotValid {
        /// Path the load was attempted with
        path: String,
        /// Why the workbook was rejected
        reason: String,
    },

    /// Worksheet not found by name
    #[error("Worksheet '{name}' not found in workbook {workbook}")]
    SheetNotFound {
        /// The requested sheet name
        name: String,
        /// The workbook the lookup ran against
        workbook: String,
    },
}
