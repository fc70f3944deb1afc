//! Configuration types for the tree renderer

use std::collections::BTreeSet;

use crate::tags::normalize_tag;

/// Depth limit used when none is given.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Directory names skipped unless the caller replaces the set.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[".git", "__pycache__", ".vscode", "node_modules", ".idea"];

/// File names skipped unless the caller replaces the set.
pub const DEFAULT_EXCLUDE_FILES: &[&str] = &[".DS_Store", ".gitignore", "Thumbs.db"];

/// Configuration for one render call.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of nested levels to render. `None` renders the whole tree.
    pub max_depth: Option<usize>,
    /// Directory names excluded by exact match.
    pub exclude_dirs: BTreeSet<String>,
    /// File names or glob patterns (`*.log`) to exclude.
    pub exclude_files: BTreeSet<String>,
    pub include_files: bool,
    /// Normalized tags; empty means no filtering.
    pub tag_filter: BTreeSet<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            exclude_files: DEFAULT_EXCLUDE_FILES.iter().map(|s| s.to_string()).collect(),
            include_files: true,
            tag_filter: BTreeSet::new(),
        }
    }
}

impl RenderConfig {
    /// Set the depth limit. `0` falls back to `DEFAULT_MAX_DEPTH`; use
    /// `unlimited_depth` to render the whole tree.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(if depth == 0 { DEFAULT_MAX_DEPTH } else { depth });
        self
    }

    pub fn unlimited_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    pub fn with_include_files(mut self, include: bool) -> Self {
        self.include_files = include;
        self
    }

    /// Add directory names on top of the current exclusions.
    pub fn exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add file names or patterns on top of the current exclusions.
    pub fn exclude_files<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_files.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Filter on these tags. Leading `#` and case are ignored; blanks are dropped.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tag_filter
            .extend(tags.into_iter().filter_map(|t| normalize_tag(t.as_ref())));
        self
    }

    pub fn is_tag_filtered(&self) -> bool {
        !self.tag_filter.is_empty()
    }

    /// Check if `depth` is past the rendered range.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
