use crate::ui::color_enabled;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber. `RUST_LOG` wins over `verbose`.
pub fn initialize_logger(verbose: bool, no_color: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(color_enabled(no_color, &std::io::stderr()))
        .with_writer(std::io::stderr)
        .try_init();
    // A subscriber installed earlier (an embedding program, a test harness) keeps working.
    if let Err(e) = installed {
        tracing::debug!("Keeping existing tracing subscriber: {}", e);
    }
}
