use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::ERRORS_LOG_FILE;
use crate::tool::{ConfigError, SuccessRule, Tool};
use crate::utils::write_error_to_log;

/// Text recorded for a clean pass
pub const OK_VERDICT: &str = "OK";

/// Outcome of a single syntax check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The tool accepted the code
    Ok,
    /// The tool rejected the code, with its diagnostic output
    Rejected(String),
    /// The check could not be carried out (tool missing, I/O error, ...)
    Failed(String),
}

impl Verdict {
    pub fn as_str(&self) -> &str {
        match self {
            Verdict::Ok => OK_VERDICT,
            Verdict::Rejected(text) | Verdict::Failed(text) => text,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Reports only ever carry the flat text
impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Runs one external tool against C++ snippets
#[derive(Debug, Clone)]
pub struct SyntaxChecker {
    tool: Tool,
    program: OsString,
    leading_args: Vec<OsString>,
    scratch_dir: Option<PathBuf>,
    error_log: PathBuf,
}

impl SyntaxChecker {
    pub fn new(tool: Tool) -> Self {
        SyntaxChecker {
            tool,
            program: OsString::from(tool.default_program()),
            leading_args: Vec::new(),
            scratch_dir: None,
            error_log: PathBuf::from(ERRORS_LOG_FILE),
        }
    }

    /// Use a different executable for the tool. Flags and the success rule
    /// still come from the tool itself.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments placed before the tool flags, for wrappers such as `python3 -m cpplint`
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Directory for the transient `.cpp` files (defaults to the system temp dir)
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    /// Log file that failed checks are appended to (defaults to `errors.log`)
    pub fn with_error_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_log = path.into();
        self
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn error_log(&self) -> &Path {
        &self.error_log
    }

    /// Check a code snippet. Never fails: anything that goes wrong while
    /// running the tool ends up as the verdict text.
    pub fn check(&self, code: &str) -> Verdict {
        match self.run_check(code) {
            Ok(verdict) => verdict,
            Err(e) => {
                let message = format!("{e:#}");
                write_error_to_log(
                    &self.error_log,
                    "Syntax Check Failure",
                    &format!("{} could not check the snippet: {}", self.tool, message),
                );
                Verdict::Failed(message)
            }
        }
    }

    fn run_check(&self, code: &str) -> Result<Verdict> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("syntax_check_").suffix(".cpp");
        let mut source_file = match &self.scratch_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .context("Failed to create temporary source file")?;

        source_file.write_all(code.as_bytes())?;
        source_file.flush()?;

        // The file is deleted on drop as well, so an early return cannot leak it
        let output = self.invoke(source_file.path())?;

        let source_path = source_file.path().to_path_buf();
        if let Err(e) = source_file.close() {
            write_error_to_log(
                &self.error_log,
                "Temporary File Cleanup Error",
                &format!("Failed to remove {}: {}", source_path.display(), e),
            );
        }

        Ok(verdict_from_output(self.tool.success_rule(), &output))
    }

    fn invoke(&self, source_path: &Path) -> Result<Output> {
        // cpp-linter runs from another directory, so neither path may stay relative
        let source_path = std::path::absolute(source_path)?;
        let program = resolve_program(&self.program)?;
        let mut command = Command::new(&program);
        command
            .args(&self.leading_args)
            .args(self.tool.args())
            .arg(&source_path);
        if let Some(dir) = self.tool.working_dir() {
            command.current_dir(dir);
        }

        command.output().with_context(|| {
            format!(
                "Failed to run {} ({})",
                self.tool,
                Path::new(&self.program).display()
            )
        })
    }
}

/// Make a program given as a relative path (`./bin/cpplint`) absolute.
/// Bare names are left alone for the `PATH` lookup.
pub fn resolve_program(program: &OsStr) -> std::io::Result<OsString> {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return Ok(std::path::absolute(path)?.into_os_string());
    }
    return Ok(program.to_os_string());
}

/// Turn a finished tool run into a verdict
///
/// A rejection always carries some text: stderr first, then stdout, then the exit status.
pub fn verdict_from_output(rule: SuccessRule, output: &Output) -> Verdict {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let passed = match rule {
        SuccessRule::ExitCodeOnly => output.status.success(),
        SuccessRule::ExitCodeAndEmptyStderr => output.status.success() && stderr.is_empty(),
    };
    if passed {
        return Verdict::Ok;
    }

    let diagnostic = stderr.trim();
    if !diagnostic.is_empty() {
        return Verdict::Rejected(diagnostic.to_string());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stdout = stdout.trim();
    if !stdout.is_empty() {
        return Verdict::Rejected(stdout.to_string());
    }

    let status = match output.status.code() {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    };
    Verdict::Rejected(status)
}

/// Check `code` with the tool called `tool_name`.
///
/// The tool name is resolved before anything touches the filesystem, so an
/// unsupported name fails fast with a [`ConfigError`].
pub fn check_syntax(code: &str, tool_name: &str) -> Result<Verdict, ConfigError> {
    let tool: Tool = tool_name.parse()?;
    return Ok(SyntaxChecker::new(tool).check(code));
}
