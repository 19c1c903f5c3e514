//! Terminal output formatting for the sigma CLI.
//!
//! Status lines go to stderr with right-aligned coloured verbs. Stdout only
//! carries results (generated paths, palette rows) so it can be piped.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Colour;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal. In JSON mode status lines
/// are still printed, but results are written as one JSON document.
pub struct Printer {
    color: bool,
    json: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            json: false,
        }
    }

    /// Switch result output to JSON.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print a status line with a green bold verb.
    /// e.g. "  Generating thumbnail for youtube (1280x720)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print a success/completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format a string as bold.
    pub fn bold(&self, text: &str) -> String {
        if self.color {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format a string as cyan (for paths, info).
    pub fn cyan(&self, text: &str) -> String {
        if self.color {
            format!("{CYAN}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// A two-cell true-colour swatch, or nothing without colour support.
    pub fn swatch(&self, colour: Colour) -> String {
        if self.color {
            let (r, g, b) = colour.to_tuple();
            format!("\x1b[48;2;{r};{g};{b}m  {RESET} ")
        } else {
            String::new()
        }
    }

    /// Write result paths to stdout, one per line or as a JSON array.
    pub fn paths(&self, paths: &[PathBuf]) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write_paths(&mut stdout, paths, self.json)?;
        Ok(())
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Write `paths` to `out`, one per line or as a JSON array of strings.
pub fn write_paths(out: &mut impl Write, paths: &[PathBuf], json: bool) -> io::Result<()> {
    if json {
        let list: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        serde_json::to_writer(&mut *out, &list)?;
        writeln!(out)
    } else {
        for path in paths {
            writeln!(out, "{}", path.display())?;
        }
        Ok(())
    }
}

/// Pluralize a count: `plural(1, "slide", "slides")` → "1 slide".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

/// `1280x720`
pub fn dimensions((width, height): (u32, u32)) -> String {
    format!("{}x{}", width, height)
}
