//! Output formatting utilities
//!
//! Status lines for people. Anything a CI step parses is printed unstyled
//! by the commands themselves.

use console::{style, Style};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}
