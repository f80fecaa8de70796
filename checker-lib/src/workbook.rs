use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::utils::{normalize_header, render_float};

pub const ID_COLUMN: &str = "id_function_original";

/// Code columns in report order
pub const CODE_COLUMNS: [&str; 6] = [
    "code_pre_commit",
    "code_post_commit",
    "code_model_llama3",
    "code_model_gpt4o",
    "code_model_geminipro",
    "code_model_claude3opus",
];

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("Failed to open workbook {path}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("Error reading sheet '{sheet}': {message}")]
    Sheet { sheet: String, message: String },

    #[error("Sheet '{sheet}' is missing the following columns: {columns:?}")]
    MissingColumns { sheet: String, columns: Vec<String> },
}

/// One function from the comparison sheet: its identifier and the six code variants
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionRow {
    pub id_function_original: String,
    pub code_pre_commit: String,
    pub code_post_commit: String,
    pub code_model_llama3: String,
    pub code_model_gpt4o: String,
    pub code_model_geminipro: String,
    pub code_model_claude3opus: String,
}

impl FunctionRow {
    /// Code variants in the same order as [`CODE_COLUMNS`]
    pub fn code_fields(&self) -> [&str; 6] {
        [
            &self.code_pre_commit,
            &self.code_post_commit,
            &self.code_model_llama3,
            &self.code_model_gpt4o,
            &self.code_model_geminipro,
            &self.code_model_claude3opus,
        ]
    }
}

/// Read every function row of `sheet_name` in `workbook_path`.
///
/// The whole sheet is loaded up front so that a broken dataset is reported
/// before any report file gets created.
pub fn load_function_rows(
    workbook_path: &Path,
    sheet_name: &str,
) -> Result<Vec<FunctionRow>, WorkbookError> {
    let mut workbook: Xlsx<_> = open_workbook(workbook_path).map_err(|e| WorkbookError::Open {
        path: workbook_path.to_path_buf(),
        message: format!("{e}"),
    })?;

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| WorkbookError::Sheet {
            sheet: sheet_name.to_string(),
            message: format!("{e}"),
        })?;

    rows_from_range(&range, sheet_name)
}

/// Map a worksheet range (header row first) to function rows.
/// Blank or missing cells become empty strings; every data row is kept so
/// the report lines up one-to-one with the sheet.
pub fn rows_from_range(
    range: &Range<Data>,
    sheet_name: &str,
) -> Result<Vec<FunctionRow>, WorkbookError> {
    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| normalize_header(&cell_to_text(cell)))
            .collect(),
        None => Vec::new(),
    };

    let id_index = column_index(&headers, ID_COLUMN);
    let code_indices: Vec<Option<usize>> = CODE_COLUMNS
        .iter()
        .map(|column| column_index(&headers, column))
        .collect();

    let missing: Vec<String> = std::iter::once((ID_COLUMN, id_index))
        .chain(CODE_COLUMNS.iter().copied().zip(code_indices.iter().copied()))
        .filter(|(_, index)| index.is_none())
        .map(|(column, _)| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(WorkbookError::MissingColumns {
            sheet: sheet_name.to_string(),
            columns: missing,
        });
    }

    let text_at = |row: &[Data], index: Option<usize>| -> String {
        index
            .and_then(|i| row.get(i))
            .map(cell_to_text)
            .unwrap_or_default()
    };

    let function_rows = rows
        .map(|row| FunctionRow {
            id_function_original: text_at(row, id_index),
            code_pre_commit: text_at(row, code_indices[0]),
            code_post_commit: text_at(row, code_indices[1]),
            code_model_llama3: text_at(row, code_indices[2]),
            code_model_gpt4o: text_at(row, code_indices[3]),
            code_model_geminipro: text_at(row, code_indices[4]),
            code_model_claude3opus: text_at(row, code_indices[5]),
        })
        .collect();

    Ok(function_rows)
}

fn column_index(headers: &[String], column: &str) -> Option<usize> {
    headers.iter().position(|header| header == column)
}

/// Plain text of a cell, with blanks and error cells as empty strings
pub fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => render_float(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) => cell.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}
