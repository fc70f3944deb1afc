//! Shared utility functions for tree walking

use std::cmp::Ordering;
use std::path::Path;

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a size in bytes to human-readable format.
///
/// Scales by 1024 up to GB and never further, so terabyte sizes show as a
/// large GB figure.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", size, SIZE_UNITS[unit])
}

/// Case-insensitive name ordering; exact name breaks ties so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Get the final segment of a path, falling back to the whole path for roots like `/`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Two spaces per nesting level.
pub fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
