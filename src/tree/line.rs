//! Rendered line types produced by the walker

use serde::Serialize;

use crate::tags::TagSet;

/// What a single line stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineKind {
    Directory { name: String },
    File { name: String, size_bytes: u64 },
    /// Placeholder for a directory whose listing was refused.
    PermissionDenied,
}

/// One checklist row, in traversal order. Depth maps directly to indentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderLine {
    pub depth: usize,
    #[serde(flatten)]
    pub kind: LineKind,
    #[serde(skip_serializing_if = "TagSet::is_empty")]
    pub tags: TagSet,
}

impl RenderLine {
    pub fn directory(depth: usize, name: impl Into<String>, tags: TagSet) -> Self {
        Self {
            depth,
            kind: LineKind::Directory { name: name.into() },
            tags,
        }
    }

    pub fn file(depth: usize, name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            depth,
            kind: LineKind::File {
                name: name.into(),
                size_bytes,
            },
            tags: TagSet::new(),
        }
    }

    pub fn permission_denied(depth: usize) -> Self {
        Self {
            depth,
            kind: LineKind::PermissionDenied,
            tags: TagSet::new(),
        }
    }

    pub fn is_permission_error(&self) -> bool {
        matches!(self.kind, LineKind::PermissionDenied)
    }

    /// Entry name, or `None` for placeholders.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Directory { name } | LineKind::File { name, .. } => Some(name),
            LineKind::PermissionDenied => None,
        }
    }
}
