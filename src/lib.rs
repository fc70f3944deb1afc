//! dirtodo - turn a folder structure into a markdown todo list

pub mod error;
pub mod file_utils;
pub mod output;
pub mod tags;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{RenderError, Result};
pub use file_utils::save_markdown;
pub use output::{MarkdownFormatter, format_line, render_json};
pub use tags::{TagSet, extract_tags, scan_tags};
pub use tree::{LineKind, RenderConfig, RenderLine, TreeRenderer, format_size, render, resolve_root};
