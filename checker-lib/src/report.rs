use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::syntax_checker::Verdict;
use crate::tool::Tool;

/// Header of the report, in column order
pub const REPORT_HEADER: [&str; 7] = [
    "id_function_original",
    "code_pre_commit_result",
    "code_post_commit_result",
    "code_model_llama3_result",
    "code_model_gpt4o_result",
    "code_model_geminipro_result",
    "code_model_claude3opus_result",
];

/// One line of the report. Field order matches [`REPORT_HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub id_function_original: String,
    pub code_pre_commit_result: Verdict,
    pub code_post_commit_result: Verdict,
    pub code_model_llama3_result: Verdict,
    pub code_model_gpt4o_result: Verdict,
    pub code_model_geminipro_result: Verdict,
    pub code_model_claude3opus_result: Verdict,
}

impl ReportRow {
    pub fn new(id_function_original: String, verdicts: [Verdict; 6]) -> Self {
        let [pre, post, llama3, gpt4o, geminipro, claude3opus] = verdicts;
        ReportRow {
            id_function_original,
            code_pre_commit_result: pre,
            code_post_commit_result: post,
            code_model_llama3_result: llama3,
            code_model_gpt4o_result: gpt4o,
            code_model_geminipro_result: geminipro,
            code_model_claude3opus_result: claude3opus,
        }
    }

    pub fn verdicts(&self) -> [&Verdict; 6] {
        [
            &self.code_pre_commit_result,
            &self.code_post_commit_result,
            &self.code_model_llama3_result,
            &self.code_model_gpt4o_result,
            &self.code_model_geminipro_result,
            &self.code_model_claude3opus_result,
        ]
    }
}

/// `<output_dir>/syntax_check_results_<tool>.csv`
pub fn report_file_path(output_dir: &Path, tool: Tool) -> PathBuf {
    output_dir.join(format!("syntax_check_results_{}.csv", tool.name()))
}

/// Streams report rows to a CSV file, flushing after every row
pub struct ReportWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
}

impl ReportWriter {
    /// Create (or truncate) the report file and write the header
    pub fn create(path: &Path) -> Result<Self> {
        // Quote fields only when necessary (diagnostics are full of commas and newlines)
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .has_headers(false)
            .from_path(path)?;

        writer.write_record(REPORT_HEADER)?;
        writer.flush()?;

        Ok(ReportWriter {
            writer,
            path: path.to_path_buf(),
        })
    }

    pub fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> ReportRow {
        ReportRow::new(
            id.to_string(),
            [
                Verdict::Ok,
                Verdict::Rejected("file.cpp:3: error: expected ';', got '}'".to_string()),
                Verdict::Ok,
                Verdict::Failed("Failed to run cppcheck".to_string()),
                Verdict::Rejected("line one\nline two".to_string()),
                Verdict::Ok,
            ],
        )
    }

    #[test]
    fn test_report_file_name_embeds_tool() {
        let path = report_file_path(Path::new("./"), Tool::CppLinter);
        assert_eq!(path, Path::new("./syntax_check_results_cpp-linter.csv"));
    }

    #[test]
    fn test_report_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let mut writer = ReportWriter::create(&path).unwrap();
        writer.write_row(&row("1")).unwrap();
        writer.write_row(&row("2")).unwrap();
        writer.finish().unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let header: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(header, REPORT_HEADER);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "1");
        assert_eq!(&records[0][1], "OK");
        assert_eq!(&records[0][2], "file.cpp:3: error: expected ';', got '}'");
        assert_eq!(&records[0][4], "Failed to run cppcheck");
        assert_eq!(&records[0][5], "line one\nline two");
        assert_eq!(&records[1][0], "2");
    }

    #[test]
    fn test_header_is_written_even_without_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        ReportWriter::create(&path).unwrap().finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{}\n", REPORT_HEADER.join(",")));
    }
}
