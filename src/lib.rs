pub mod aggregate;
pub mod app;
pub mod classifier;
pub mod cli;
pub mod clipboard;
pub mod error;
pub mod fs;
pub mod logger;
pub mod policy;
pub mod ui;

pub use aggregate::{aggregate, AggregationResult};
pub use app::{run_app, ClipboardStatus, Deps, Outcome};
pub use classifier::Classifier;
pub use cli::Args;
pub use clipboard::ClipboardDispatcher;
pub use error::{ClipboardError, CollectError};
pub use policy::{InclusionPolicy, RunMode};
