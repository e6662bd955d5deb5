//! Terminal output formatting
//!
//! Supports plain, colored, and JSON output. Handlers report results
//! through this type only, so the transport layer owns all presentation.

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;

/// Formats handler output for the terminal
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter from the global CLI flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON output was requested
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success line
    pub fn success(&self, message: &str) {
        if self.json {
            return;
        }
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Print an informational line
    pub fn info(&self, message: &str) {
        if self.json {
            return;
        }
        println!("{message}");
    }

    /// Print an error line
    pub fn error(&self, message: &str) {
        if self.no_color || self.json {
            eprintln!("Error: {message}");
        } else {
            eprintln!("{} {message}", "Error:".red().bold());
        }
    }

    /// Serialize a value as pretty JSON to stdout
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)
            .map_err(|e| crate::error::HelpdeskError::custom(e.to_string()))?;
        println!("{output}");
        Ok(())
    }
}
