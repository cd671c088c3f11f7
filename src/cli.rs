use crate::policy::RunMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "code-collector")]
#[command(about = "Aggregate code files into one text file, then copy the result to the clipboard. Without --all only known source/config files are taken and dependency/build folders are skipped.")]
pub struct Args {
    /// Directory to collect from
    #[arg(default_value = ".")]
    pub root: PathBuf,
    /// Aggregate every file in every folder
    #[arg(long)]
    pub all: bool,
    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
    /// Skip copying the result to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,
    /// Output file
    #[arg(short, long, default_value = "collected_code.txt")]
    pub output: PathBuf,
    /// Log diagnostics at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn mode(&self) -> RunMode {
        if self.all { RunMode::All } else { RunMode::Filtered }
    }
}
