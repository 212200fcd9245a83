//! Workbook decoding via calamine

use std::io::{Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader, Xlsx};
use tabkind_core::{CellValue, SheetGrid};

use crate::error::XlsxResult;

/// Decodes workbook files into [`SheetGrid`]s
pub struct XlsxReader;

impl XlsxReader {
    /// Decode every sheet of the workbook at `path`, in native tab order.
    ///
    /// The format is sniffed from the file extension (XLSX first, plus the
    /// other formats calamine understands).
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Vec<SheetGrid>> {
        let mut workbook = open_workbook_auto(path)?;

        let names = workbook.sheet_names();
        let mut grids = Vec::with_capacity(names.len());
        for name in names {
            let range = workbook.worksheet_range(&name)?;
            grids.push(grid_from_range(name, &range));
        }
        Ok(grids)
    }

    /// Decode an XLSX document from an in-memory reader
    pub fn read<RS: Read + Seek>(reader: RS) -> XlsxResult<Vec<SheetGrid>> {
        let mut workbook = Xlsx::new(reader)?;

        let names = workbook.sheet_names();
        let mut grids = Vec::with_capacity(names.len());
        for name in names {
            let range = workbook.worksheet_range(&name)?;
            grids.push(grid_from_range(name, &range));
        }
        Ok(grids)
    }
}

/// Convert a decoded range into a grid in absolute sheet coordinates.
///
/// calamine ranges are anchored at their first populated cell; leading empty
/// rows and columns are padded back so row indices match the document.
fn grid_from_range(name: String, range: &Range<Data>) -> SheetGrid {
    let mut grid = SheetGrid::new(name);

    let Some((start_row, start_col)) = range.start() else {
        return grid;
    };

    for _ in 0..start_row {
        grid.push_row(Vec::new());
    }
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; start_col as usize];
        cells.extend(row.iter().map(cell_value));
        grid.push_row(cells);
    }

    grid
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
    }
}
