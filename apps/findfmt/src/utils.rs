//! Message prefixes shared by the binary's stderr diagnostics.
//!
//! Callers pass the effective color choice, usually from
//! [`crate::output::use_colors`], so `--no-color` and `color = false` apply
//! here as well.

use owo_colors::OwoColorize;

/// `error:` prefix, red when `color` is set.
pub fn error_prefix(color: bool) -> String {
    if color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// `note:` prefix, cyan when `color` is set.
pub fn note_prefix(color: bool) -> String {
    if color {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}
