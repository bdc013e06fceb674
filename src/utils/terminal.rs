//! Colored terminal output
//!
//! Per-file result lines shown to the user. Only three styles are needed,
//! so the ANSI sequences are spelled out here directly.

pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const WHITE: &str = "\x1b[37m";
pub const RESET: &str = "\x1b[0m";

/// Formats a per-file success line: highlighted path plus optional detail
pub fn success_line(path: &str, detail: &str) -> String {
    if detail.is_empty() {
        format!("{}{}{}:{}", GREEN, path, WHITE, RESET)
    } else {
        format!("{}{}{}: {}{}", GREEN, path, WHITE, detail, RESET)
    }
}

/// Formats a per-file failure line
pub fn failure_line(path: &str, detail: &str) -> String {
    format!("{}{}{}: {}{}", RED, path, WHITE, detail, RESET)
}
