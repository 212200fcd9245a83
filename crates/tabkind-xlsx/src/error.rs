//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while decoding a workbook
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Decoder error (any supported format)
    #[error("Decode error: {0}")]
    Decode(#[from] calamine::Error),

    /// XLSX-specific decoder error
    #[error("XLSX error: {0}")]
    Xlsx(#[from] calamine::XlsxError),
}
