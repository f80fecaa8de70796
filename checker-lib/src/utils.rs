mod datetime;
mod filesystem;
mod string;

pub use datetime::get_utc_iso_datetime;
pub use filesystem::{append_log_entry, write_error_to_log};
pub use string::{normalize_header, render_float};
