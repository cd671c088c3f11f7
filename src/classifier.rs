use crate::policy::{InclusionPolicy, RunMode};
use std::path::{Path, PathBuf};

/// Decides which walked entries end up in the artifact.
///
/// Paths handed to the classifier are compared verbatim against the
/// excluded set, so callers should pass absolute paths rooted at a
/// canonical directory.
#[derive(Debug, Clone)]
pub struct Classifier<'a> {
    mode: RunMode,
    policy: &'a InclusionPolicy,
    excluded: Vec<PathBuf>,
}

impl<'a> Classifier<'a> {
    pub fn new(mode: RunMode, policy: &'a InclusionPolicy) -> Self {
        Self { mode, policy, excluded: Vec::new() }
    }

    /// Never include `path`, whatever the mode.
    pub fn excluding(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded.push(path.into());
        self
    }

    pub fn should_include(&self, path: &Path) -> bool {
        if self.excluded.iter().any(|p| p == path) {
            return false;
        }
        match self.mode {
            RunMode::All => true,
            RunMode::Filtered => self.policy.allows_file(path),
        }
    }

    /// Whether the walker may descend into directory `dir`.
    pub fn should_descend(&self, dir: &Path) -> bool {
        match self.mode {
            RunMode::All => true,
            RunMode::Filtered => dir
                .file_name()
                .map(|name| !self.policy.ignores_folder(&name.to_string_lossy()))
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
