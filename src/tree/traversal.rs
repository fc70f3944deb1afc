//! Recursive directory traversal producing checklist lines.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};
use crate::output::MarkdownFormatter;
use crate::tags::extract_tags;

use super::config::RenderConfig;
use super::filter::ExclusionFilter;
use super::line::RenderLine;
use super::utils::{compare_names, display_name};

/// A child entry that survived exclusion, ready for sorting.
#[derive(Debug)]
struct Entry {
    name: String,
    path: PathBuf,
    /// `None` for directories.
    size: Option<u64>,
}

/// Walks a directory tree depth-first and renders it as a checklist.
pub struct TreeRenderer {
    config: RenderConfig,
    filter: ExclusionFilter,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let filter = ExclusionFilter::new(&config.exclude_dirs, &config.exclude_files);
        Self { config, filter }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the tree at `root` as a complete markdown document.
    pub fn render(&self, root: &Path) -> Result<String> {
        let root = resolve_root(root)?;
        let lines = self.walk_dir(&root, 0);
        let formatter = MarkdownFormatter::new(&self.config);
        Ok(formatter.format(&root, &lines))
    }

    /// Resolve `root` and return its checklist lines without the header.
    pub fn collect_lines(&self, root: &Path) -> Result<Vec<RenderLine>> {
        let root = resolve_root(root)?;
        Ok(self.walk_dir(&root, 0))
    }

    fn walk_dir(&self, path: &Path, depth: usize) -> Vec<RenderLine> {
        if self.config.at_max_depth(depth) {
            return Vec::new();
        }

        let (dirs, files) = match self.read_entries(path) {
            Ok(entries) => entries,
            Err(e) => return listing_failure(path, depth, &e),
        };

        let mut lines = Vec::new();

        for dir in dirs {
            let tags = extract_tags(&dir.name, &dir.path);
            if self.config.is_tag_filtered() && tags.is_disjoint(&self.config.tag_filter) {
                log::trace!("pruning {} (tags {:?})", dir.path.display(), tags);
                continue;
            }
            lines.push(RenderLine::directory(depth, dir.name, tags));
            lines.extend(self.walk_dir(&dir.path, depth + 1));
        }

        // Files carry no tags, so they are left out entirely when filtering by tag.
        if self.config.include_files && !self.config.is_tag_filtered() {
            for file in files {
                lines.push(RenderLine::file(depth, file.name, file.size.unwrap_or(0)));
            }
        }

        lines
    }

    /// List, classify, filter and sort the children of `path`.
    ///
    /// The directory handle is released before this returns, so it is never
    /// held open while descending.
    fn read_entries(&self, path: &Path) -> io::Result<(Vec<Entry>, Vec<Entry>)> {
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::debug!("skipping unreadable entry in {}: {}", path.display(), e);
                    continue;
                }
            };
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            // Follows symlinks; broken links have no metadata and are skipped.
            // A listable but unsearchable directory fails here for every child,
            // so permission errors fail the whole listing.
            let metadata = match fs::metadata(&entry_path) {
                Ok(m) => m,
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => return Err(e),
                Err(e) => {
                    log::debug!("skipping {}: {}", entry_path.display(), e);
                    continue;
                }
            };

            if metadata.is_dir() {
                if self.filter.excludes_dir(&name) {
                    log::trace!("excluded directory {}", entry_path.display());
                    continue;
                }
                dirs.push(Entry {
                    name,
                    path: entry_path,
                    size: None,
                });
            } else if metadata.is_file() && self.config.include_files {
                if self.filter.excludes_file(&name) {
                    log::trace!("excluded file {}", entry_path.display());
                    continue;
                }
                files.push(Entry {
                    name,
                    path: entry_path,
                    size: Some(metadata.len()),
                });
            }
        }

        dirs.sort_by(|a, b| compare_names(&a.name, &b.name));
        files.sort_by(|a, b| compare_names(&a.name, &b.name));

        Ok((dirs, files))
    }
}

/// Lines standing in for a directory that could not be listed.
///
/// Permission failures become a placeholder at the directory's own child
/// depth; anything else contributes nothing.
fn listing_failure(path: &Path, depth: usize, err: &io::Error) -> Vec<RenderLine> {
    if err.kind() == io::ErrorKind::PermissionDenied {
        log::debug!("permission denied listing {}", path.display());
        vec![RenderLine::permission_denied(depth)]
    } else {
        log::warn!("cannot list {}: {}", path.display(), err);
        Vec::new()
    }
}

/// Canonicalize `path` and check that it names a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let resolved = fs::canonicalize(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => RenderError::NotFound(absolute_or_given(path)),
        _ => RenderError::Io {
            path: absolute_or_given(path),
            source: e,
        },
    })?;

    if !resolved.is_dir() {
        return Err(RenderError::NotADirectory(resolved));
    }

    log::debug!("rendering {} ({})", display_name(&resolved), resolved.display());
    Ok(resolved)
}

fn absolute_or_given(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Render `root` with `config`.
pub fn render(root: &Path, config: &RenderConfig) -> Result<String> {
    TreeRenderer::new(config.clone()).render(root)
}
