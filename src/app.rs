use crate::aggregate::{aggregate, AggregationResult};
use crate::cli::Args;
use crate::clipboard::ClipboardDispatcher;
use crate::fs::FileReader;
use crate::policy::InclusionPolicy;
use crate::ui;
use anyhow::{Context, Result};

pub struct Deps<'a> {
    pub policy: &'a InclusionPolicy,
    pub reader: &'a dyn FileReader,
    /// `None` skips delivery.
    pub clipboard: Option<&'a ClipboardDispatcher>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardStatus {
    Skipped,
    Copied(String),
    Unavailable,
}

#[derive(Debug)]
pub struct Outcome {
    pub aggregation: AggregationResult,
    pub clipboard: ClipboardStatus,
}

/// Aggregate, then hand the artifact to the clipboard. Only aggregation
/// failures are returned as errors.
pub fn run_app(deps: Deps, args: &Args) -> Result<Outcome> {
    ui::print_banner();
    ui::print_mode(args.mode());

    let aggregation = aggregate(&args.root, &args.output, args.mode(), deps.policy, deps.reader)
        .with_context(|| format!("Aggregation of {} failed", args.root.display()))?;
    ui::print_done(&aggregation);

    let clipboard = match deps.clipboard {
        Some(dispatcher) => copy_artifact(dispatcher, &aggregation),
        None => ClipboardStatus::Skipped,
    };
    Ok(Outcome { aggregation, clipboard })
}

fn copy_artifact(dispatcher: &ClipboardDispatcher, aggregation: &AggregationResult) -> ClipboardStatus {
    let path = &aggregation.output_path;
    let text = match std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display())) {
        Ok(t) => t,
        Err(e) => {
            ui::print_unreadable_artifact(path, &e);
            return ClipboardStatus::Unavailable;
        }
    };
    match dispatcher.deliver(&text) {
        Some(via) => {
            ui::print_copied(path, via);
            ClipboardStatus::Copied(via.to_string())
        }
        None => {
            ui::print_clipboard_unavailable(&dispatcher.remediation());
            ClipboardStatus::Unavailable
        }
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
