use checker_lib::{SyntaxChecker, Tool};
use std::path::Path;

/// Two-row copy of the comparison sheet (ids 101 and 102, 102 has no gpt4o code)
#[allow(dead_code)]
pub const FUNCTION_COMPARISON_WORKBOOK: &str = "tests/fixtures/function_comparison.xlsx";

// Re-export shared test utilities from src/test_utils.rs
pub use checker_lib::test_utils::{build_range, full_header, function_row, stub_checker};

/// Stub that passes any snippet and writes the source path to stdout
#[allow(dead_code)]
pub fn accepting_checker(tool: Tool, scratch_dir: &Path) -> SyntaxChecker {
    stub_checker(tool, r#"echo "$source""#).with_scratch_dir(scratch_dir)
}

/// Stub that rejects any snippet, reporting the source path on stderr
#[allow(dead_code)]
pub fn rejecting_checker(tool: Tool, scratch_dir: &Path) -> SyntaxChecker {
    stub_checker(tool, r#"echo "  $source: error: rejected  " >&2; exit 1"#)
        .with_scratch_dir(scratch_dir)
}

/// Number of entries left in a directory
#[allow(dead_code)]
pub fn entry_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

/// Read a report back as rows of strings, header included
#[allow(dead_code)]
pub fn read_report(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|record| record.unwrap().iter().map(|f| f.to_string()).collect())
        .collect()
}
