//! Terminal output helpers for consistent CLI presentation.
//!
//! Errors go to stderr so that `--dry-run` plans on stdout stay parseable.

use colored::*;
use std::path::PathBuf;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with a green checkmark
pub fn print_success(message: &str) {
    eprintln!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    eprintln!("\n{}\n", message.white());
}

/// Lists the files of a change set, numbered from 1
pub fn print_change_set(files: &[PathBuf]) {
    for (index, file) in files.iter().enumerate() {
        eprintln!(
            "  {} {}",
            format!("[{}]", index + 1).bright_black(),
            file.display().to_string().yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_functions_do_not_panic() {
        print_error("Test error message");
        print_success("Operation completed");
        print_info("Information message");
        print_change_set(&[PathBuf::from("src/lib.rs")]);
    }
}
