use crate::aggregate::AggregationResult;
use crate::policy::RunMode;
use colored::Colorize;
use std::io::IsTerminal;
use std::path::Path;

const BANNER: &str = r"
  ____          _       ____      _ _           _
 / ___|___   __| | ___ / ___|___ | | | ___  ___| |_ ___  _ __
| |   / _ \ / _` |/ _ \ |   / _ \| | |/ _ \/ __| __/ _ \| '__|
| |__| (_) | (_| |  __/ |__| (_) | | |  __/ (__| || (_) | |
 \____\___/ \__,_|\___|\____\___/|_|_|\___|\___|\__\___/|_|
";

fn color_allowed(no_color_flag: bool, is_terminal: bool, no_color_env: bool) -> bool {
    !no_color_flag && is_terminal && !no_color_env
}

/// Whether a stream may carry ANSI colors: it must be a terminal, and
/// neither `--no-color` nor `NO_COLOR` may be set.
pub fn color_enabled(no_color: bool, stream: &impl IsTerminal) -> bool {
    color_allowed(no_color, stream.is_terminal(), std::env::var_os("NO_COLOR").is_some())
}

/// Decide whether stdout gets ANSI colors and apply it process-wide.
pub fn configure_color(no_color: bool) -> bool {
    let enabled = color_enabled(no_color, &std::io::stdout());
    colored::control::set_override(enabled);
    enabled
}

pub fn print_banner() {
    println!("{}", BANNER.cyan().bold());
}

pub fn print_mode(mode: RunMode) {
    let line = match mode {
        RunMode::All => "Running in ALL mode...",
        RunMode::Filtered => "Aggregating selected files...",
    };
    println!("{}", line.cyan());
}

pub fn print_done(result: &AggregationResult) {
    println!(
        "{}",
        format!("Done! Aggregated {} files into {}", result.files_written, result.output_path.display()).green()
    );
    if result.files_failed > 0 {
        println!(
            "{}",
            format!("{} files could not be read (see warnings above)", result.files_failed).yellow()
        );
    }
}

pub fn print_copied(output: &Path, via: &str) {
    println!("{}", format!("Copied {} to clipboard via {}.", output.display(), via).green());
}

pub fn print_clipboard_unavailable(hint: &str) {
    println!("{}", hint.yellow());
}

pub fn print_unreadable_artifact(output: &Path, err: &anyhow::Error) {
    println!("{}", format!("Could not read {} to copy: {:#}", output.display(), err).magenta());
}

/// Last line of a failed run; colored according to stderr, not stdout.
pub fn print_fatal(err: &anyhow::Error, no_color: bool) {
    colored::control::set_override(color_enabled(no_color, &std::io::stderr()));
    eprintln!("{}", format!("Error: {:#}", err).magenta());
}

#[cfg(test)]
#[path = "ui_tests.rs"]
mod tests;
