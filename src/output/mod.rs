//! Document formatting
//!
//! - `markdown` - the checklist document
//! - `json` - the same line sequence as JSON

mod json;
mod markdown;

pub use json::{JsonDocument, render_json};
pub use markdown::{MarkdownFormatter, NO_MATCHES_NOTE, SECTION_TITLE, format_line};
