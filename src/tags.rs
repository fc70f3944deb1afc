//! Hashtag extraction for directories
//!
//! A directory's tags come from two places:
//!
//! - inline tokens in its own name (`api#backend#urgent`)
//! - a `.tags` sidecar file inside it, scanned with the same pattern
//!
//! Tags are stored lowercased and without the leading `#`.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Name of the sidecar file whose contents are scanned for extra tags.
pub const SIDECAR_FILE: &str = ".tags";

/// `#` followed by one or more word characters.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("TAG_PATTERN regex is invalid"));

/// Lowercased, deduplicated tags. Iterates alphabetically.
pub type TagSet = BTreeSet<String>;

/// Collect every `#word` token in `text`.
pub fn scan_tags(text: &str) -> TagSet {
    TAG_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Normalize a user-supplied tag: strip a leading `#`, trim, lowercase.
///
/// Returns `None` for input that is empty after normalization.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().trim_start_matches('#').trim();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_lowercase())
    }
}

/// Tags for the directory at `dir`, whose display name is `name`.
pub fn extract_tags(name: &str, dir: &Path) -> TagSet {
    let mut tags = scan_tags(name);
    tags.extend(read_sidecar_tags(dir));
    tags
}

/// Scan `dir/.tags` for tokens.
///
/// Every failure here (missing file, permissions, invalid UTF-8) is swallowed
/// on purpose: a broken sidecar contributes no tags and never aborts or
/// annotates the render.
fn read_sidecar_tags(dir: &Path) -> TagSet {
    let path = dir.join(SIDECAR_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => scan_tags(&content),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::debug!("ignoring unreadable {}: {}", path.display(), e);
            }
            TagSet::new()
        }
    }
}
