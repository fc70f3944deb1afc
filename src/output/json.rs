//! JSON output formatting

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::tree::{RenderConfig, RenderLine, display_name};

/// The same facts as the markdown document, for tooling.
#[derive(Debug, Serialize)]
pub struct JsonDocument<'a> {
    pub name: String,
    pub root: &'a Path,
    #[serde(skip_serializing_if = "is_unfiltered")]
    pub tag_filter: &'a BTreeSet<String>,
    pub lines: &'a [RenderLine],
}

fn is_unfiltered(tags: &&BTreeSet<String>) -> bool {
    tags.is_empty()
}

/// Serialize walker output as pretty-printed JSON.
pub fn render_json(
    root: &Path,
    config: &RenderConfig,
    lines: &[RenderLine],
) -> serde_json::Result<String> {
    let doc = JsonDocument {
        name: display_name(root),
        root,
        tag_filter: &config.tag_filter,
        lines,
    };
    serde_json::to_string_pretty(&doc)
}
