//! Directory tree walking logic
//!
//! `TreeRenderer` descends depth-first from a root directory and returns
//! one `RenderLine` per rendered entry, in pre-order. Exclusions, the depth
//! limit and tag pruning are all applied during the walk, so skipped subtrees
//! are never read.

mod config;
mod filter;
mod line;
mod traversal;
mod utils;

// Re-export public types
pub use config::{DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES, DEFAULT_MAX_DEPTH, RenderConfig};
pub use filter::ExclusionFilter;
pub use line::{LineKind, RenderLine};
pub use traversal::{TreeRenderer, render, resolve_root};
pub use utils::{compare_names, display_name, format_size, indent};
