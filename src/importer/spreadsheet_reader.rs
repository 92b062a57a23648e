// ==========================================
// Catálogo de Marcas - spreadsheet reader
// ==========================================
// First sheet only, first row = headers. Rows are materialized once and
// shared by preview and commit. Fully blank rows are skipped.
// ==========================================

use crate::domain::types::CellValue;
use crate::importer::error::{ImportError, ImportPipelineResult};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// SheetData - parsed workbook content
// ==========================================
#[derive(Debug, Clone)]
pub struct SheetData {
    /// Header texts in column order. Positional mapping keys off this
    /// order, not the texts themselves.
    pub columns: Vec<String>,
    /// One map per data row, keyed by header text. Blank cells are absent.
    pub rows: Vec<HashMap<String, CellValue>>,
}

impl SheetData {
    /// Build from an in-memory cell range. Pure core of the reader,
    /// shared by the file path entry point and the unit tests.
    pub fn from_range(range: &Range<Data>) -> ImportPipelineResult<Self> {
        let mut rows_iter = range.rows();
        let header_row = rows_iter.next().ok_or(ImportError::EmptySheet)?;

        let columns: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in rows_iter {
            let mut row_map = HashMap::new();
            for (col_idx, cell) in data_row.iter().enumerate() {
                let value = CellValue::from(cell);
                if value.is_empty() {
                    continue;
                }
                if let Some(header) = columns.get(col_idx) {
                    row_map.insert(header.clone(), value);
                }
            }

            // skip fully blank rows
            if row_map.is_empty() {
                continue;
            }
            rows.push(row_map);
        }

        Ok(SheetData { columns, rows })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read the first worksheet of an `.xlsx`/`.xls` file.
///
/// # Errors
/// - `FileNotFound`: path does not exist
/// - `UnsupportedExtension`: not an Excel extension
/// - `WorkbookParse`: unreadable workbook
/// - `EmptySheet`: no sheets or no header row
pub fn read_workbook<P: AsRef<Path>>(file_path: P) -> ImportPipelineResult<SheetData> {
    let path = file_path.as_ref();

    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext != "xlsx" && ext != "xls" {
        return Err(ImportError::UnsupportedExtension(ext));
    }

    let mut workbook =
        open_workbook_auto(path).map_err(|e| ImportError::WorkbookParse(e.to_string()))?;

    let sheet_names = workbook.sheet_names();
    let first_sheet = sheet_names.first().cloned().ok_or(ImportError::EmptySheet)?;

    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| ImportError::WorkbookParse(e.to_string()))?;

    SheetData::from_range(&range)
}
