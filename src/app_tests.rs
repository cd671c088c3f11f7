use super::*;
use crate::clipboard::ClipboardSink;
use crate::error::ClipboardError;
use crate::fs::StdFileReader;
use clap::Parser;
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::tempdir;

struct RecordingClipboard(Rc<RefCell<Option<String>>>);

impl ClipboardSink for RecordingClipboard {
    fn name(&self) -> &str {
        "recording"
    }

    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.0.replace(Some(text.to_string()));
        Ok(())
    }
}

struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn name(&self) -> &str {
        "xclip"
    }

    fn set_text(&self, _: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Spawn {
            program: "xclip".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }
}

fn args_for(root: &std::path::Path, out: &std::path::Path, extra: &[&str]) -> Args {
    let mut argv = vec!["code-collector".to_string(), root.display().to_string()];
    argv.push("-o".to_string());
    argv.push(out.display().to_string());
    argv.extend(extra.iter().map(|s| s.to_string()));
    Args::parse_from(argv)
}

#[test]
fn app_runs_and_copies_artifact() {
    let d = tempdir().unwrap();
    fs::write(d.path().join("a.txt"), "x\n").unwrap();
    let out = d.path().join("collected_code.txt");
    let seen = Rc::new(RefCell::new(None));
    let dispatcher = ClipboardDispatcher::new(vec![Box::new(RecordingClipboard(Rc::clone(&seen)))]);
    let policy = InclusionPolicy::default();
    let deps = Deps { policy: &policy, reader: &StdFileReader, clipboard: Some(&dispatcher) };

    let outcome = run_app(deps, &args_for(d.path(), &out, &["--no-color"])).unwrap();
    assert_eq!(outcome.aggregation.files_written, 1);
    assert_eq!(outcome.clipboard, ClipboardStatus::Copied("recording".to_string()));
    assert_eq!(seen.borrow().as_deref(), Some("▶️ a.txt\n-------\nx\n\n\n"));
}

#[test]
fn clipboard_failure_is_not_an_error() {
    let d = tempdir().unwrap();
    fs::write(d.path().join("a.txt"), "x").unwrap();
    let out = d.path().join("collected_code.txt");
    let dispatcher = ClipboardDispatcher::new(vec![Box::new(BrokenClipboard)]);
    let policy = InclusionPolicy::default();
    let deps = Deps { policy: &policy, reader: &StdFileReader, clipboard: Some(&dispatcher) };

    let outcome = run_app(deps, &args_for(d.path(), &out, &[])).unwrap();
    assert_eq!(outcome.clipboard, ClipboardStatus::Unavailable);
    assert!(out.exists());
}

#[test]
fn no_dispatcher_skips_delivery() {
    let d = tempdir().unwrap();
    fs::write(d.path().join("a.txt"), "x").unwrap();
    let out = d.path().join("collected_code.txt");
    let policy = InclusionPolicy::default();
    let deps = Deps { policy: &policy, reader: &StdFileReader, clipboard: None };

    let outcome = run_app(deps, &args_for(d.path(), &out, &["--all"])).unwrap();
    assert_eq!(outcome.clipboard, ClipboardStatus::Skipped);
}

#[test]
fn output_failure_surfaces_with_cause() {
    let d = tempdir().unwrap();
    let out = d.path().join("no/such/dir/out.txt");
    let policy = InclusionPolicy::default();
    let deps = Deps { policy: &policy, reader: &StdFileReader, clipboard: None };

    let err = run_app(deps, &args_for(d.path(), &out, &[])).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("Failed to create output file"));
}
