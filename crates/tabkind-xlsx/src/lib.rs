//! # tabkind-xlsx
//!
//! Workbook decoding for tabkind, backed by calamine.
//!
//! This crate turns a workbook file into the [`SheetGrid`] model consumed by
//! `tabkind-core`; it never interprets cell contents beyond the type mapping.
//!
//! [`SheetGrid`]: tabkind_core::SheetGrid

pub mod error;
pub mod reader;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
