use crate::classifier::Classifier;
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

pub trait FileReader {
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Reads whole files as UTF-8; anything else is an error.
pub struct StdFileReader;

impl FileReader for StdFileReader {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Depth-first walk of `root` in file-name order, skipping directories the
/// classifier refuses to descend into. The root itself is never pruned.
pub fn walk<'a>(root: &Path, classifier: &'a Classifier<'_>) -> impl Iterator<Item = walkdir::Result<DirEntry>> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| e.depth() == 0 || !e.file_type().is_dir() || classifier.should_descend(e.path()))
}

/// Regular files, and symlinks that resolve to one.
pub fn is_file_entry(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    ft.is_file() || (ft.is_symlink() && entry.path().is_file())
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
