//! Output formatting utilities

use colored::Colorize;
use serde::Serialize;

use crate::error::{CliError, Result};

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print a warning message
pub(crate) fn warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// Print an error message
pub(crate) fn error(msg: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), msg);
}

/// Print any serializable value as pretty JSON on stdout
pub(crate) fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| CliError::InvalidData(e.to_string()))?;
    println!("{text}");
    Ok(())
}

/// Format a similarity score for display
pub(crate) fn score(value: f32) -> String {
    format!("{value:.3}")
}

/// `"title - artist"`, falling back to the identifier when the title is empty
pub(crate) fn display_name(id: &str, title: &str, artist: &str) -> String {
    match (title.is_empty(), artist.is_empty()) {
        (true, _) => id.to_string(),
        (false, true) => title.to_string(),
        (false, false) => format!("{title} - {artist}"),
    }
}
