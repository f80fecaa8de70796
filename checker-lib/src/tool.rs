use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported tool '{0}'. Use 'cpplint', 'cpp-linter' or 'cppcheck'.")]
    UnsupportedTool(String),
}

/// When a tool run counts as a clean pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessRule {
    /// Exit code zero is enough
    ExitCodeOnly,
    /// Exit code zero and nothing written to stderr
    ExitCodeAndEmptyStderr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Cpplint,
    Cppcheck,
    CppLinter,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Cpplint, Tool::Cppcheck, Tool::CppLinter];

    /// The name used on the command line and in the report file name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Cpplint => "cpplint",
            Tool::Cppcheck => "cppcheck",
            Tool::CppLinter => "cpp-linter",
        }
    }

    /// Executable looked up on `PATH` when no override is given
    pub fn default_program(&self) -> &'static str {
        self.name()
    }

    /// Fixed flags passed before the source file path
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            // Only runtime, build and readability categories matter here
            Tool::Cpplint => &["--filter=-whitespace,-legal"],
            Tool::Cppcheck => &["--enable=all"],
            Tool::CppLinter => &["--tidy-checks"],
        }
    }

    pub fn success_rule(&self) -> SuccessRule {
        match self {
            Tool::Cpplint => SuccessRule::ExitCodeOnly,
            Tool::Cppcheck | Tool::CppLinter => SuccessRule::ExitCodeAndEmptyStderr,
        }
    }

    /// cpp-linter drops artifacts into its working directory, so it runs from the temp dir
    pub fn working_dir(&self) -> Option<PathBuf> {
        match self {
            Tool::CppLinter => Some(std::env::temp_dir()),
            Tool::Cpplint | Tool::Cppcheck => None,
        }
    }
}

impl FromStr for Tool {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "cpplint" => Ok(Tool::Cpplint),
            "cppcheck" => Ok(Tool::Cppcheck),
            "cpp-linter" => Ok(Tool::CppLinter),
            other => Err(ConfigError::UnsupportedTool(other.to_string())),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names_round_trip_through_from_str() {
        for tool in Tool::ALL {
            assert_eq!(tool.name().parse::<Tool>(), Ok(tool));
        }
    }

    #[test]
    fn test_unknown_tool_is_rejected() {
        let result = "clang-format".parse::<Tool>();
        assert_eq!(
            result,
            Err(ConfigError::UnsupportedTool("clang-format".to_string()))
        );

        // Names are case sensitive
        assert!("CPPLINT".parse::<Tool>().is_err());
        assert!("".parse::<Tool>().is_err());
    }

    #[test]
    fn test_success_rules() {
        assert_eq!(Tool::Cpplint.success_rule(), SuccessRule::ExitCodeOnly);
        assert_eq!(
            Tool::Cppcheck.success_rule(),
            SuccessRule::ExitCodeAndEmptyStderr
        );
        assert_eq!(
            Tool::CppLinter.success_rule(),
            SuccessRule::ExitCodeAndEmptyStderr
        );
    }

    #[test]
    fn test_only_cpp_linter_changes_working_dir() {
        assert_eq!(Tool::CppLinter.working_dir(), Some(std::env::temp_dir()));
        assert_eq!(Tool::Cpplint.working_dir(), None);
        assert_eq!(Tool::Cppcheck.working_dir(), None);
    }

    #[test]
    fn test_error_message_lists_supported_tools() {
        let message = ConfigError::UnsupportedTool("pylint".to_string()).to_string();
        assert!(message.contains("'pylint'"));
        assert!(message.contains("cpplint"));
        assert!(message.contains("cppcheck"));
        assert!(message.contains("cpp-linter"));
    }
}
