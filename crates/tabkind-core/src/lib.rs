//! # tabkind-core
//!
//! Core data structures for the tabkind tab-classification library.
//!
//! This crate provides the types used throughout tabkind:
//! - [`CellValue`] and [`SheetGrid`] - the decoded-sheet model format readers
//!   produce
//! - [`TabTypeRegistry`] - keyword-to-type associations and classification
//! - [`HeaderedSheet`] - one sheet plus its extracted header keywords
//! - [`HeaderedWorkbook`] - a workbook with its tabs grouped by resolved type
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tabkind_core::{CellValue, HeaderedWorkbook, SheetGrid, TabTypeRegistry};
//!
//! let mut registry = TabTypeRegistry::new();
//! registry.register("Configs", "ConfigName");
//!
//! let mut sheet = SheetGrid::new("Configs");
//! sheet.push_row(vec![CellValue::string("ConfigName")]);
//!
//! let mut workbook = HeaderedWorkbook::new();
//! workbook.set_registry(Rc::new(RefCell::new(registry)));
//! workbook.replace_sheets("configs.xlsx", vec![sheet]);
//!
//! assert_eq!(workbook.tab_names_of_type("Configs"), ["Configs"]);
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod registry;
pub mod sheet;
pub mod workbook;

// Re-exports for convenience
pub use cell::CellValue;
pub use error::{Error, Result};
pub use grid::SheetGrid;
pub use registry::TabTypeRegistry;
pub use sheet::HeaderedSheet;
pub use workbook::HeaderedWorkbook;
