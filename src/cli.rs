//! CLI module containing the main entry point logic.
//!
//! The run itself is fully interactive; the only flags locate the project
//! being personalized.

use crate::prompt::Prompter;
use crate::wizard;
use clap::Parser as ClapParser;
use colored::Colorize;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the initializer.
#[derive(ClapParser)]
#[command(name = "template-init")]
#[command(version = PKG_VERSION)]
#[command(about = "Personalize a fresh checkout of the test-automation template", long_about = None)]
struct Cli {
    /// Project root containing the manifest (defaults to the current directory)
    #[arg(long, value_name = "PATH", default_value = ".")]
    root: PathBuf,

    /// Manifest file name inside the project root
    #[arg(long, value_name = "FILE", default_value = "package.json")]
    manifest_name: String,
}

/// Parse arguments and drive the interactive flow.
///
/// Completion and operator cancellation both exit 0; a fatal error prints
/// the message and exits 1.
pub fn run_cli() {
    let cli = Cli::parse();
    let mut prompter = Prompter::from_stdio();

    if let Err(e) = wizard::run(&cli.root, &cli.manifest_name, &mut prompter) {
        eprintln!("\n{}\n", format!("❌ Error: {e}").bold());
        std::process::exit(1);
    }
}
