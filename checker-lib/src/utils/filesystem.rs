use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::utils::get_utc_iso_datetime;

/// Centralized function to write error messages to the errors log file
///
/// # Arguments
/// * `log_path` - The log file, normally [`crate::ERRORS_LOG_FILE`]
/// * `error_type` - A description of the error category (e.g., "Syntax Check Failure")
/// * `error_message` - The actual error message content
pub fn write_error_to_log(log_path: &Path, error_type: &str, error_message: &str) {
    // A log that cannot be written must not take the batch down with it
    let _ = append_log_entry(log_path, error_type, error_message);
}

/// Append one timestamped entry to the log at `log_path`, creating it if needed
pub fn append_log_entry(
    log_path: &Path,
    error_type: &str,
    error_message: &str,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let timestamp = get_utc_iso_datetime();
    writeln!(file, "\n[{timestamp}] {error_type}:\n{error_message}\n")
}
