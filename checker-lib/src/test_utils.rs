// Test utilities available to both unit and integration tests
// Only compiled when testing

use calamine::{Data, Range};

use crate::syntax_checker::SyntaxChecker;
use crate::tool::Tool;
use crate::workbook::{CODE_COLUMNS, FunctionRow, ID_COLUMN};

/// Header row with every column the loader expects, in sheet order
#[allow(dead_code)]
pub fn full_header() -> Vec<String> {
    std::iter::once(ID_COLUMN)
        .chain(CODE_COLUMNS)
        .map(|column| column.to_string())
        .collect()
}

/// Build an in-memory worksheet: `header` on the first row, then `rows`.
/// Short rows are padded with empty cells.
#[allow(dead_code)]
pub fn build_range(header: &[String], rows: &[Vec<Data>]) -> Range<Data> {
    let width = rows
        .iter()
        .map(|row| row.len())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(1)
        .max(1);

    let mut range = Range::new((0, 0), (rows.len() as u32, width as u32 - 1));
    for (col, title) in header.iter().enumerate() {
        range.set_value((0, col as u32), Data::String(title.clone()));
    }
    for (row_index, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            range.set_value((row_index as u32 + 1, col as u32), cell.clone());
        }
    }
    range
}

/// A row whose six code fields all hold `code`
#[allow(dead_code)]
pub fn function_row(id: &str, code: &str) -> FunctionRow {
    FunctionRow {
        id_function_original: id.to_string(),
        code_pre_commit: code.to_string(),
        code_post_commit: code.to_string(),
        code_model_llama3: code.to_string(),
        code_model_gpt4o: code.to_string(),
        code_model_geminipro: code.to_string(),
        code_model_claude3opus: code.to_string(),
    }
}

/// A checker for `tool` whose executable is replaced by a `sh` script.
///
/// The tool flags and the source path are still appended, so the script sees
/// them as positional parameters; `$source` holds the source file path.
#[allow(dead_code)]
pub fn stub_checker(tool: Tool, script: &str) -> SyntaxChecker {
    let script = format!("for source in \"$@\"; do :; done\n{script}");
    SyntaxChecker::new(tool)
        .with_program("sh")
        .with_leading_args(["-c".to_string(), script, "stub-tool".to_string()])
}
