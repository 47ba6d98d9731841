//! Terminal UI implementation.

use std::io::Write;

use console::{style, Term};

use super::{OutputMode, UserInterface};

/// Check whether colored output should be used.
///
/// Honors the `NO_COLOR` convention and falls back to terminal detection.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    Term::stdout().features().colors_supported()
}

/// Terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    mode: OutputMode,
    colors: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            mode,
            colors: should_use_colors(),
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            if self.colors {
                writeln!(self.term, "{} {}", style("✓").green(), msg).ok();
            } else {
                writeln!(self.term, "✓ {}", msg).ok();
            }
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            if self.colors {
                eprintln!("{} {}", style("⚠").yellow(), msg);
            } else {
                eprintln!("⚠ {}", msg);
            }
        }
    }

    fn error(&mut self, msg: &str) {
        if self.colors {
            eprintln!("{} {}", style("✗").red(), msg);
        } else {
            eprintln!("✗ {}", msg);
        }
    }
}
