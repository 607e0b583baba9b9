//! Terminal message formatting for the CLI (non-launcher) surface.
//!
//! The `search` subcommand talks JSON on stdout; these helpers are for the
//! `refresh` subcommand and fatal startup errors, keeping colors and spacing
//! consistent.

use colored::*;

/// Formats and prints an error message with consistent styling
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}
