#![allow(clippy::needless_return)]

pub mod batch;
pub mod report;
pub mod syntax_checker;
pub mod tool;
pub mod utils;
pub mod workbook;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use batch::{BatchProcessor, BatchSummary};
pub use report::{REPORT_HEADER, ReportRow, ReportWriter, report_file_path};
pub use syntax_checker::{OK_VERDICT, SyntaxChecker, Verdict, check_syntax};
pub use tool::{ConfigError, SuccessRule, Tool};
pub use workbook::{CODE_COLUMNS, FunctionRow, ID_COLUMN, WorkbookError, load_function_rows};

pub const ERRORS_LOG_FILE: &str = "errors.log";

/// Input workbook used when none is given on the command line
pub const DEFAULT_INPUT_FILE: &str = "tb_function_comparison2.xlsx";
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";
pub const DEFAULT_OUTPUT_DIR: &str = "./";
pub const DEFAULT_TOOL: &str = "cppcheck";
