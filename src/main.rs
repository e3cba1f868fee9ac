//! # template-init
//!
//! Run once after cloning the test-automation template to personalize it:
//! update `package.json` with your project details, optionally remove the
//! example tests, and optionally start a fresh git history.
//!
//! ## Usage
//!
//! - From the project root: `template-init`
//! - From elsewhere: `template-init --root path/to/project`
//!
//! The run is fully interactive; see README.md for a walkthrough.

/// Entry point for the CLI tool.
fn main() {
    template_init::cli::run_cli();
}
