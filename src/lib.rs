//! # template-init
//!
//! One-shot interactive configurator for the test-automation template:
//! prompts for project metadata, rewrites the manifest, and optionally
//! removes example content and resets git history.

use colored::Colorize;

pub mod cleaner;
pub mod cli;
pub mod error;
pub mod git;
pub mod manifest;
pub mod prompt;
pub mod wizard;

/// Print a green checkmarked status line.
pub fn success(message: &str) {
    println!("{}", format!("✅ {message}").green());
}

/// Print a yellow warning line.
pub fn warning(message: &str) {
    println!("{}", format!("⚠️  {message}").yellow());
}
