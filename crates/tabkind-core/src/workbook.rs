//! Workbook-level tab classification

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::grid::SheetGrid;
use crate::registry::TabTypeRegistry;
use crate::sheet::HeaderedSheet;

/// A workbook whose tabs are classified by their header keywords.
///
/// The workbook holds one [`HeaderedSheet`] per tab (in the document's native
/// tab order) and a type index grouping tab names by the types their header
/// keywords classify into. The registry is a shared, caller-owned dependency;
/// one registry may serve several workbooks.
///
/// Replacing the sheets or mutating the registry invalidates the type index;
/// [`rebuild_type_index`](Self::rebuild_type_index) recomputes it from
/// scratch, so it can never diverge from the sheets and registry it is
/// derived from.
#[derive(Debug, Default)]
pub struct HeaderedWorkbook {
    /// Header row applied to every sheet created during a load
    default_header_row: usize,
    /// Shared keyword registry, if attached
    registry: Option<Rc<RefCell<TabTypeRegistry>>>,
    /// Sheets in native tab order
    sheets: Vec<HeaderedSheet>,
    /// Type label -> tab names, recomputed wholesale by rebuild_type_index
    tabs_by_type: HashMap<String, Vec<String>>,
    /// Path of the last successful load, for diagnostics
    source_path: Option<PathBuf>,
}

impl HeaderedWorkbook {
    /// Create a new empty workbook with no registry attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a shared keyword registry.
    ///
    /// The workbook keeps a reference only; the caller remains free to mutate
    /// the registry and re-classify via
    /// [`rebuild_type_index`](Self::rebuild_type_index).
    pub fn set_registry(&mut self, registry: Rc<RefCell<TabTypeRegistry>>) {
        self.registry = Some(registry);
    }

    /// Detach the registry, if any
    pub fn clear_registry(&mut self) {
        self.registry = None;
    }

    /// The attached registry, if any
    pub fn registry(&self) -> Option<&Rc<RefCell<TabTypeRegistry>>> {
        self.registry.as_ref()
    }

    /// Set the header row applied to sheets created by future loads.
    ///
    /// Values that do not convert to a row index are logged and ignored,
    /// leaving the prior value in place.
    pub fn set_default_header_row<N>(&mut self, row: N)
    where
        N: TryInto<usize>,
        N::Error: std::fmt::Display,
    {
        match row.try_into() {
            Ok(row) => self.default_header_row = row,
            Err(e) => log::warn!("ignoring invalid default header row: {}", e),
        }
    }

    /// The header row applied to sheets created during a load
    pub fn default_header_row(&self) -> usize {
        self.default_header_row
    }

    /// Replace the workbook contents with freshly decoded sheets.
    ///
    /// Records `path` as the source, wraps each grid in a [`HeaderedSheet`]
    /// configured with the default header row (keeping decoder order), and
    /// rebuilds the type index. Format readers call this after a fully
    /// successful decode, which keeps failed loads free of side effects.
    pub fn replace_sheets<P: Into<PathBuf>>(&mut self, path: P, grids: Vec<SheetGrid>) {
        self.source_path = Some(path.into());
        self.sheets = grids
            .into_iter()
            .map(|grid| HeaderedSheet::load(grid, self.default_header_row))
            .collect();
        self.rebuild_type_index();
    }

    /// Recompute the type index from the current sheets and registry.
    ///
    /// The index is cleared first; with no registry attached it stays empty.
    /// Idempotent, and safe to call repeatedly after registry changes without
    /// reloading the workbook.
    pub fn rebuild_type_index(&mut self) {
        self.tabs_by_type.clear();

        let Some(registry) = &self.registry else {
            return;
        };
        let registry = registry.borrow();

        for sheet in &self.sheets {
            for tab_type in registry.classify(sheet.keywords()) {
                self.tabs_by_type
                    .entry(tab_type)
                    .or_default()
                    .push(sheet.name().to_string());
            }
        }
    }

    /// Get a sheet by tab name
    pub fn sheet_by_name(&self, name: &str) -> Result<&HeaderedSheet> {
        self.sheets
            .iter()
            .find(|sheet| sheet.name() == name)
            .ok_or_else(|| Error::SheetNotFound {
                name: name.to_string(),
                workbook: self.source_label(),
            })
    }

    /// All tab names in native workbook order
    pub fn tab_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|sheet| sheet.name())
    }

    /// Tab names classified as `tab_type`, in tab order.
    ///
    /// Empty for types with no classified tabs.
    pub fn tab_names_of_type(&self, tab_type: &str) -> &[String] {
        self.tabs_by_type
            .get(tab_type)
            .map(|names| names.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over all sheets in native tab order
    pub fn sheets(&self) -> impl Iterator<Item = &HeaderedSheet> {
        self.sheets.iter()
    }

    /// Number of tabs
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no tabs
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// The path of the last successful load
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    fn source_label(&self) -> String {
        match &self.source_path {
            Some(path) => path.display().to_string(),
            None => "(unloaded)".to_string(),
        }
    }
}
