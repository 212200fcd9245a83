//! Prelude module - common imports for tabkind users
//!
//! ```rust
//! use tabkind::prelude::*;
//! ```

pub use crate::{
    // Cell/grid model
    CellValue,
    // Error types
    Error,
    HeaderedSheet,
    // Main types
    HeaderedWorkbook,
    // Extension traits
    HeaderedWorkbookExt,
    Result,
    SheetGrid,
    TabTypeRegistry,
    // I/O types
    XlsxError,
    XlsxReader,
};
