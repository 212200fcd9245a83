//! Worksheet wrapper with header-keyword extraction

use crate::cell::CellValue;
use crate::grid::SheetGrid;

/// A decoded sheet together with the keywords extracted from its header row.
///
/// The keyword list reflects exactly the grid handed to [`load`](Self::load);
/// it is never refreshed behind the caller's back.
#[derive(Debug, Clone)]
pub struct HeaderedSheet {
    /// Row the keywords were read from
    header_row: usize,
    /// Non-empty header-cell values in column order
    keywords: Vec<String>,
    /// The underlying decoded sheet
    grid: SheetGrid,
}

impl HeaderedSheet {
    /// Wrap a decoded sheet, extracting keywords from `header_row`.
    ///
    /// Blank and error cells contribute nothing (no placeholders); a header
    /// row past the end of the grid yields an empty keyword list.
    pub fn load(grid: SheetGrid, header_row: usize) -> Self {
        let keywords = grid
            .row(header_row)
            .map(|cells| cells.iter().filter_map(CellValue::as_keyword).collect())
            .unwrap_or_default();

        Self {
            header_row,
            keywords,
            grid,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        self.grid.name()
    }

    /// The row the keywords were extracted from
    pub fn header_row(&self) -> usize {
        self.header_row
    }

    /// The extracted header keywords, in column order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The underlying decoded sheet
    pub fn grid(&self) -> &SheetGrid {
        &self.grid
    }
}
