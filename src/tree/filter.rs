//! Name-based exclusion for tree walking

use std::collections::BTreeSet;

use glob::Pattern;

/// Decides which entries are dropped before sorting.
///
/// Directories match only by exact name. Files match by exact name or by any
/// pattern in the file set that compiles as a glob.
pub struct ExclusionFilter {
    dirs: BTreeSet<String>,
    file_names: BTreeSet<String>,
    file_patterns: Vec<Pattern>,
}

impl ExclusionFilter {
    pub fn new(dirs: &BTreeSet<String>, files: &BTreeSet<String>) -> Self {
        // Patterns that fail to compile still work as literal names.
        let file_patterns = files
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    log::debug!("exclude pattern '{}' is not a glob ({}), matching literally", p, e);
                    None
                }
            })
            .collect();

        Self {
            dirs: dirs.clone(),
            file_names: files.clone(),
            file_patterns,
        }
    }

    pub fn excludes_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    pub fn excludes_file(&self, name: &str) -> bool {
        self.file_names.contains(name) || self.file_patterns.iter().any(|p| p.matches(name))
    }
}
