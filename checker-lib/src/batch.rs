use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::report::{ReportRow, ReportWriter, report_file_path};
use crate::syntax_checker::SyntaxChecker;
use crate::utils::write_error_to_log;
use crate::workbook::{FunctionRow, load_function_rows};

/// Outcome of a finished batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows_processed: usize,
    /// Number of `OK` verdicts per code column, in report order
    pub ok_counts: [usize; 6],
    pub report_path: PathBuf,
}

impl BatchSummary {
    pub fn total_checks(&self) -> usize {
        self.rows_processed * self.ok_counts.len()
    }

    pub fn total_ok(&self) -> usize {
        self.ok_counts.iter().sum()
    }
}

/// Checks every code variant of every function row with a single tool
pub struct BatchProcessor {
    checker: SyntaxChecker,
}

impl BatchProcessor {
    pub fn new(checker: SyntaxChecker) -> Self {
        BatchProcessor { checker }
    }

    pub fn checker(&self) -> &SyntaxChecker {
        &self.checker
    }

    /// Run the six checks of one row, in column order
    pub fn check_row(&self, row: &FunctionRow) -> ReportRow {
        let verdicts = row.code_fields().map(|code| self.checker.check(code));
        ReportRow::new(row.id_function_original.clone(), verdicts)
    }

    /// Load the workbook, check it and write the report into `output_dir`.
    ///
    /// No report is written if the workbook cannot be read; the failure goes
    /// to the checker's error log instead.
    pub fn process_workbook(
        &self,
        workbook_path: &Path,
        sheet_name: &str,
        output_dir: &Path,
    ) -> Result<BatchSummary> {
        let rows = match load_function_rows(workbook_path, sheet_name) {
            Ok(rows) => rows,
            Err(e) => {
                write_error_to_log(self.checker.error_log(), "Workbook Read Error", &e.to_string());
                return Err(e.into());
            }
        };
        self.process_rows(&rows, output_dir)
    }

    /// Check `rows` and write one report line per row, in input order
    pub fn process_rows(&self, rows: &[FunctionRow], output_dir: &Path) -> Result<BatchSummary> {
        let report_path = report_file_path(output_dir, self.checker.tool());
        let mut writer = ReportWriter::create(&report_path)
            .with_context(|| format!("Failed to create report {}", report_path.display()))?;

        let mut ok_counts = [0usize; 6];
        for row in rows {
            let report_row = self.check_row(row);
            for (count, verdict) in ok_counts.iter_mut().zip(report_row.verdicts()) {
                if verdict.is_ok() {
                    *count += 1;
                }
            }
            writer.write_row(&report_row).with_context(|| {
                format!(
                    "Failed to write results for function '{}'",
                    row.id_function_original
                )
            })?;
        }

        let report_path = writer.finish()?;
        Ok(BatchSummary {
            rows_processed: rows.len(),
            ok_counts,
            report_path,
        })
    }
}
