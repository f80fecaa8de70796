// reset; cargo run -- --tool cpplint
// reset; cargo run -- --input-file ./data/tb_function_comparison2.xlsx --tool cpplint --tool-path python3 --tool-arg=-m --tool-arg=cpplint

use checker_lib::{
    BatchProcessor, CODE_COLUMNS, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_SHEET_NAME,
    DEFAULT_TOOL, ERRORS_LOG_FILE, SyntaxChecker, Tool,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cpp-syntax-checker")]
#[command(about = "Batch-check C++ snippets from an Excel sheet with cpplint, cppcheck or cpp-linter")]
#[command(version)]
struct Args {
    /// Path to the Excel file holding the functions to check
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    input_file: PathBuf,

    /// Sheet to read the functions from
    #[arg(long, default_value = DEFAULT_SHEET_NAME)]
    sheet_name: String,

    /// Directory where syntax_check_results_<tool>.csv is written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Tool used for the checks: cpplint, cppcheck or cpp-linter
    #[arg(short, long, default_value = DEFAULT_TOOL)]
    tool: String,

    /// Executable to run instead of the tool found on PATH
    #[arg(long)]
    tool_path: Option<PathBuf>,

    /// Extra argument passed to the executable before the tool flags (repeatable)
    #[arg(long, allow_hyphen_values = true)]
    tool_arg: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arguments = Args::parse();

    // An unknown tool is a configuration mistake, stop before touching any file
    let tool: Tool = match arguments.tool.parse() {
        Ok(tool) => tool,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };

    let mut checker = SyntaxChecker::new(tool).with_leading_args(arguments.tool_arg);
    if let Some(tool_path) = arguments.tool_path {
        checker = checker.with_program(tool_path);
    }
    let processor = BatchProcessor::new(checker);

    println!(
        "🔎 Checking {} (sheet {}) with {tool}",
        arguments.input_file.display(),
        arguments.sheet_name
    );

    match processor.process_workbook(
        &arguments.input_file,
        &arguments.sheet_name,
        &arguments.output_dir,
    ) {
        Ok(summary) => {
            println!(
                "✅ Processing complete. Results saved in {}",
                summary.report_path.display()
            );
            println!(
                "   {} functions, {}/{} checks OK",
                summary.rows_processed,
                summary.total_ok(),
                summary.total_checks()
            );
            for (column, ok_count) in CODE_COLUMNS.iter().zip(summary.ok_counts) {
                println!("   {column}: {ok_count}/{}", summary.rows_processed);
            }
        }
        Err(e) => {
            eprintln!("❌ Processing failed with error: {e:#}");
            eprintln!("❌ Check {} for details.", ERRORS_LOG_FILE);
            std::process::exit(1);
        }
    }

    Ok(())
}
