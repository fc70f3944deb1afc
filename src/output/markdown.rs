//! Markdown output formatting
//!
//! This module provides `MarkdownFormatter` which turns walker output into
//! a checklist document: a header block followed by one `- [ ]` line per
//! entry, indented two spaces per level.

use std::path::Path;

use crate::tree::{LineKind, RenderConfig, RenderLine, display_name, format_size, indent};

pub const SECTION_TITLE: &str = "## Directory Structure Tasks";
pub const NO_MATCHES_NOTE: &str = "*No directories found matching the specified tags.*";

/// Markdown output formatter - renders checklist lines under a header.
pub struct MarkdownFormatter<'a> {
    config: &'a RenderConfig,
}

impl<'a> MarkdownFormatter<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Build the whole document. `root` must already be resolved.
    ///
    /// Lines are joined with `\n`; there is no trailing newline.
    pub fn format(&self, root: &Path, lines: &[RenderLine]) -> String {
        let mut out = self.header(root);

        if lines.is_empty() && self.config.is_tag_filtered() {
            out.push(NO_MATCHES_NOTE.to_string());
        } else {
            out.extend(lines.iter().map(format_line));
        }

        out.join("\n")
    }

    fn header(&self, root: &Path) -> Vec<String> {
        let mut header = vec![
            format!("# Todo List for: {}", display_name(root)),
            String::new(),
            format!("*Generated from folder structure: `{}`*", root.display()),
            String::new(),
        ];

        if self.config.is_tag_filtered() {
            let tags: Vec<String> = self
                .config
                .tag_filter
                .iter()
                .map(|t| format!("`#{}`", t))
                .collect();
            header.push(format!("*Filtered by tags: {}*", tags.join(", ")));
            header.push(String::new());
        }

        header.push(SECTION_TITLE.to_string());
        header.push(String::new());
        header
    }
}

/// Format a single checklist line, including its indentation.
pub fn format_line(line: &RenderLine) -> String {
    let mut out = indent(line.depth);
    out.push_str("- [ ] ");

    match &line.kind {
        LineKind::Directory { name } => {
            out.push_str("**");
            out.push_str(name);
            out.push_str("/**");
            for tag in &line.tags {
                out.push_str(" `#");
                out.push_str(tag);
                out.push('`');
            }
        }
        LineKind::File { name, size_bytes } => {
            out.push_str(name);
            out.push_str(" `(");
            out.push_str(&format_size(*size_bytes));
            out.push_str(")`");
        }
        LineKind::PermissionDenied => out.push_str("*Permission denied*"),
    }

    out
}
