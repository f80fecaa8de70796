use chrono::{SecondsFormat, Utc};

/// UTC timestamp used to stamp error log entries, e.g. `2026-10-19T08:15:02Z`
pub fn get_utc_iso_datetime() -> String {
    return Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
}
