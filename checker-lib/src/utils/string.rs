/// Normalize a sheet header so it can be matched against the expected column names.
/// Control characters (newlines, tabs, etc.) become spaces, runs of whitespace
/// collapse to a single space and the result is trimmed.
pub fn normalize_header(value: &str) -> String {
    return value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ");
}

/// Render a spreadsheet float the way an identifier is expected to look:
/// integral values lose the trailing `.0` (`42.0` -> `42`), anything else is kept as is.
pub fn render_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    return value.to_string();
}
