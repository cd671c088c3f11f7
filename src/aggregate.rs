use crate::classifier::Classifier;
use crate::error::CollectError;
use crate::fs::{FileReader, is_file_entry, walk};
use crate::policy::{InclusionPolicy, RunMode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

pub const HEADER_MARKER: &str = "▶️";

/// Summary of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
    /// Files whose content was embedded.
    pub files_written: usize,
    /// Files that got a read-error placeholder instead of content.
    pub files_failed: usize,
    pub output_path: PathBuf,
}

/// Header line plus dashed underline for one file entry.
pub fn format_header(display_path: &str) -> String {
    format!("{} {}\n{}\n", HEADER_MARKER, display_path, "-".repeat(display_path.chars().count() + 2))
}

fn display_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

struct ArtifactWriter {
    inner: BufWriter<File>,
    path: PathBuf,
}

impl ArtifactWriter {
    fn create(path: &Path) -> Result<Self, CollectError> {
        let file = File::create(path).map_err(|source| CollectError::CreateOutput { path: path.to_path_buf(), source })?;
        Ok(Self { inner: BufWriter::new(file), path: path.to_path_buf() })
    }

    fn write(&mut self, s: &str) -> Result<(), CollectError> {
        self.inner
            .write_all(s.as_bytes())
            .map_err(|source| CollectError::WriteOutput { path: self.path.clone(), source })
    }

    fn finish(mut self) -> Result<(), CollectError> {
        self.inner.flush().map_err(|source| CollectError::WriteOutput { path: self.path, source })
    }
}

/// `path` with its directory resolved but its last component kept, so an
/// output that is itself a symlink is still matched by its own name.
fn resolve_parent(path: &Path) -> io::Result<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    Ok(parent.canonicalize()?.join(name))
}

fn running_executable() -> Option<PathBuf> {
    std::env::current_exe().and_then(|p| p.canonicalize()).ok()
}

/// Walk `root` and write every file the classifier accepts into `output`.
///
/// Unreadable files are noted in place and do not stop the walk; only
/// failing to open `root` or to create/write `output` is fatal.
pub fn aggregate(
    root: &Path,
    output: &Path,
    mode: RunMode,
    policy: &InclusionPolicy,
    reader: &dyn FileReader,
) -> Result<AggregationResult, CollectError> {
    let root_err = |source| CollectError::Root { path: root.to_path_buf(), source };
    let root = root.canonicalize().map_err(root_err)?;
    if !root.is_dir() {
        return Err(root_err(io::Error::new(io::ErrorKind::InvalidInput, "not a directory")));
    }
    let mut writer = ArtifactWriter::create(output)?;
    let output_err = |source| CollectError::CreateOutput { path: output.to_path_buf(), source };
    let output_target = output.canonicalize().map_err(output_err)?;
    let output_link = resolve_parent(output).map_err(output_err)?;

    let mut classifier = Classifier::new(mode, policy).excluding(output_target).excluding(output_link);
    if let Some(exe) = running_executable() {
        classifier = classifier.excluding(exe);
    }
    debug!(root = %root.display(), output = %output.display(), ?mode, "Aggregating");

    let mut files_written = 0;
    let mut files_failed = 0;
    for entry in walk(&root, &classifier) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !is_file_entry(&entry) || !classifier.should_include(entry.path()) {
            continue;
        }
        let rel = display_path(entry.path(), &root);
        trace!("Embedding {}", rel);
        writer.write(&format_header(&rel))?;
        match reader.read_to_string(entry.path()) {
            Ok(content) => {
                writer.write(&content)?;
                writer.write("\n\n")?;
                files_written += 1;
            }
            Err(e) => {
                warn!("Could not read {}: {:#}", rel, e);
                writer.write(&format!("[Error reading file: {:#}]\n\n", e))?;
                files_failed += 1;
            }
        }
    }
    writer.finish()?;

    Ok(AggregationResult { files_written, files_failed, output_path: output.to_path_buf() })
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
