//! Output formatting for command results.
//!
//! Text messages go to stdout (warnings to stderr) and are skipped in JSON
//! mode, where only the serialized result is printed.

use colored::Colorize;
use serde::Serialize;

use crate::commands::Session;
use crate::OutputFormat;

impl Session {
    fn text_enabled(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }

    /// Print the serialized result in JSON mode.
    pub fn print<T: Serialize>(&self, value: &T) {
        if self.quiet || self.format != OutputFormat::Json {
            return;
        }
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn success(&self, msg: &str) {
        if self.text_enabled() {
            println!("{} {}", "✓".green().bold(), msg);
        }
    }

    pub fn info(&self, msg: &str) {
        if self.text_enabled() {
            println!("{}", msg);
        }
    }

    pub fn warning(&self, msg: &str) {
        if self.text_enabled() {
            eprintln!("{} {}", "⚠".yellow().bold(), msg);
        }
    }

    /// Print a block of preformatted text (reports).
    pub fn block(&self, text: impl std::fmt::Display) {
        if self.text_enabled() {
            print!("{}", text);
        }
    }
}

/// Format a point for text output.
pub fn point(x: f64, y: f64) -> String {
    format!("({:.3}, {:.3})", x, y)
}
