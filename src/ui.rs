//! Terminal output for the command-line tool.
//!
//! The version string is the only thing written to stdout so build scripts
//! can capture it directly; everything else goes to stderr.

use console::style;

/// Format an error message with a red `ERROR:` label.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print the resolved version to stdout.
pub fn display_version(version: &str) {
    println!("{}", version);
}
