//! Clipboard delivery through a chain of platform strategies.
//!
//! Native helper programs are tried first, the `arboard` GUI clipboard last.
//! Every failure is soft: the dispatcher logs it and moves on.

use crate::error::ClipboardError;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

pub trait ClipboardSink {
    fn name(&self) -> &str;
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinEncoding {
    Utf8,
    /// `clip.exe` reads UTF-16LE.
    Utf16Le,
}

impl StdinEncoding {
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            StdinEncoding::Utf8 => text.as_bytes().to_vec(),
            StdinEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }
}

/// Pipes the text into an external helper program.
#[derive(Debug, Clone)]
pub struct CommandSink {
    program: String,
    args: Vec<String>,
    encoding: StdinEncoding,
}

impl CommandSink {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            encoding: StdinEncoding::Utf8,
        }
    }

    pub fn with_encoding(mut self, encoding: StdinEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl ClipboardSink for CommandSink {
    fn name(&self) -> &str {
        &self.program
    }

    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        // Helpers like xclip fork and keep inherited pipes open, so only stdin is piped.
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn { program: self.program.clone(), source })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(source) = stdin.write_all(&self.encoding.encode(text)) {
                let _ = child.wait();
                return Err(ClipboardError::Pipe { program: self.program.clone(), source });
            }
        }

        let status = child
            .wait()
            .map_err(|source| ClipboardError::Pipe { program: self.program.clone(), source })?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Exit { program: self.program.clone(), status })
        }
    }
}

/// The system clipboard through the `arboard` crate.
pub struct ArboardSink;

impl ClipboardSink for ArboardSink {
    fn name(&self) -> &str {
        "arboard"
    }

    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

fn is_wayland_session() -> bool {
    std::env::var_os("WAYLAND_DISPLAY").is_some()
        || std::env::var("XDG_SESSION_TYPE").is_ok_and(|s| s == "wayland")
}

fn unix_helpers() -> Vec<Box<dyn ClipboardSink>> {
    vec![
        Box::new(CommandSink::new("xclip", &["-selection", "clipboard"])),
        Box::new(CommandSink::new("xsel", &["--clipboard", "--input"])),
    ]
}

/// Native helper programs for `os` (a `std::env::consts::OS` value), in the
/// order they are tried.
pub fn native_strategies(os: &str, wayland: bool) -> Vec<Box<dyn ClipboardSink>> {
    match os {
        "macos" => vec![Box::new(CommandSink::new("pbcopy", &[]))],
        "windows" => vec![Box::new(CommandSink::new("clip", &[]).with_encoding(StdinEncoding::Utf16Le))],
        "linux" if wayland => {
            let mut sinks: Vec<Box<dyn ClipboardSink>> = vec![Box::new(CommandSink::new("wl-copy", &[]))];
            sinks.extend(unix_helpers());
            sinks
        }
        _ => unix_helpers(),
    }
}

/// Ordered fallback chain of delivery strategies; first success wins.
pub struct ClipboardDispatcher {
    strategies: Vec<Box<dyn ClipboardSink>>,
}

impl ClipboardDispatcher {
    pub fn new(strategies: Vec<Box<dyn ClipboardSink>>) -> Self {
        Self { strategies }
    }

    pub fn for_current_platform() -> Self {
        let mut strategies = native_strategies(std::env::consts::OS, is_wayland_session());
        strategies.push(Box::new(ArboardSink));
        Self::new(strategies)
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Returns the name of the strategy that took the text, or `None` when
    /// every strategy failed.
    pub fn deliver(&self, text: &str) -> Option<&str> {
        for strategy in &self.strategies {
            debug!("Trying clipboard strategy {}", strategy.name());
            match strategy.set_text(text) {
                Ok(()) => return Some(strategy.name()),
                Err(e) => debug!("Clipboard strategy {} failed: {}", strategy.name(), e),
            }
        }
        None
    }

    /// Operator hint listing what could have been installed.
    pub fn remediation(&self) -> String {
        let helpers: Vec<&str> = self.strategy_names().into_iter().filter(|n| *n != "arboard").collect();
        if helpers.is_empty() {
            "Clipboard not available. Run inside a graphical session.".to_string()
        } else {
            format!(
                "Clipboard not available. Install one of {} or run inside a graphical session.",
                helpers.join("/")
            )
        }
    }
}

#[cfg(test)]
#[path = "clipboard_tests.rs"]
mod tests;
