//! Writing rendered documents to disk

use std::fs;
use std::io;
use std::path::Path;

/// Write `markdown` to `dest` as UTF-8, creating parent directories and
/// replacing any existing file.
pub fn save_markdown(markdown: &str, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(dest, markdown)?;
    log::info!("wrote {} bytes to {}", markdown.len(), dest.display());
    Ok(())
}
