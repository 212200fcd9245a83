//! # tabkind
//!
//! A Rust library that classifies the tabs of a spreadsheet workbook by the
//! keywords found in each tab's header row.
//!
//! Data-driven tooling often stores heterogeneous content (test cases,
//! configuration, fixtures) as separate tabs of one workbook. tabkind
//! discovers at load time which tabs are which: register a keyword per tab
//! type, load the workbook, and look tabs up by type instead of hard-coding
//! tab names.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tabkind::prelude::*;
//!
//! let mut registry = TabTypeRegistry::new();
//! registry.register("TestCases", "TestFileName");
//! registry.register("Configs", "ConfigName");
//!
//! let mut workbook = HeaderedWorkbook::new();
//! workbook.set_registry(Rc::new(RefCell::new(registry)));
//! workbook.load("suite.xlsx")?;
//!
//! for tab in workbook.tab_names_of_type("TestCases") {
//!     let sheet = workbook.sheet_by_name(tab)?;
//!     println!("{} has columns {:?}", sheet.name(), sheet.keywords());
//! }
//! # Ok::<(), tabkind::Error>(())
//! ```

pub mod prelude;

// Re-export core types
pub use tabkind_core::{
    CellValue, Error, HeaderedSheet, HeaderedWorkbook, Result, SheetGrid, TabTypeRegistry,
};

// Re-export I/O types
pub use tabkind_xlsx::{XlsxError, XlsxReader};

use std::path::Path;

/// Extension trait for [`HeaderedWorkbook`] to add file loading
pub trait HeaderedWorkbookExt {
    /// Load a workbook file, replacing the current tabs wholesale.
    ///
    /// Fails with [`Error::WorkbookNotValid`] when the path is empty or
    /// missing, or when the file cannot be decoded. A failed load leaves the
    /// workbook exactly as it was; a successful one re-extracts keywords for
    /// every tab and rebuilds the type index.
    fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()>;
}

impl HeaderedWorkbookExt for HeaderedWorkbook {
    fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() || !path.exists() {
            return Err(Error::WorkbookNotValid {
                path: path.display().to_string(),
                reason: "workbook file not found".to_string(),
            });
        }

        let grids = XlsxReader::read_file(path).map_err(|e| {
            log::error!("failed to decode workbook {}: {}", path.display(), e);
            Error::WorkbookNotValid {
                path: path.display().to_string(),
                reason: format!("failed to decode workbook: {}", e),
            }
        })?;

        self.replace_sheets(path, grids);
        Ok(())
    }
}
