//! Error messages on stderr, colored when stderr is a terminal.
//!
//! Format: `✖ {error_type}: {message}` then an optional `  × {detail}` line.

use std::io::{IsTerminal, Write};

const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Formatter that colors only when stderr is a terminal and `NO_COLOR` is unset.
    #[must_use]
    pub fn stderr() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::with_colors(!no_color && std::io::stderr().is_terminal())
    }

    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn print_error(&self, error_type: &str, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail);
    }

    /// Writes the error to `w`. Write failures are ignored.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(w, "{BOLD}{RED}✖ {error_type}:{RESET} {message}");
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {DIM}× {d}{RESET}");
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }
    }
}

/// Prints an error to stderr with auto-detected colors.
pub fn print_error_full(error_type: &str, message: &str, detail: Option<&str>) {
    ErrorOutput::stderr().print_error(error_type, message, detail);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
