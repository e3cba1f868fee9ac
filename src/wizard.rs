//! The sequential initialization flow: prompt, summarize, confirm, apply.
//!
//! Nothing on disk is touched until the operator confirms the summary;
//! declining is a normal exit, not an error.

use crate::cleaner;
use crate::error::InitError;
use crate::git;
use crate::manifest::{self, ProjectDetails};
use crate::prompt::Prompter;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::Path;

/// How a run ended: either every change was applied, or the operator
/// declined the final confirmation and nothing was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

/// Drive one full interactive run against the project at `root`.
///
/// # Errors
/// Returns [`InitError`] if the manifest cannot be loaded or rewritten, if
/// example removal fails partway, or if input cannot be read. Git failures
/// are handled internally as warnings and never surface here.
pub fn run<R: BufRead, W: Write>(
    root: &Path,
    manifest_name: &str,
    prompter: &mut Prompter<R, W>,
) -> Result<Outcome, InitError> {
    println!("\n{}\n", "🎭 Playwright Template Initialization".bold());
    println!("This script will help you customize the template for your project.\n");

    // Loaded up front so prompts can default to the current values.
    let manifest_path = root.join(manifest_name);
    let mut manifest = manifest::load(&manifest_path)?;

    println!("{}\n", "📝 Project Information".blue());
    let details = ProjectDetails {
        name: ask(prompter, "Project name", manifest.field_or_empty("name"))?,
        description: ask(
            prompter,
            "Project description",
            manifest.field_or_empty("description"),
        )?,
        author: ask(prompter, "Author name", manifest.field_or_empty("author"))?,
        repository: ask(
            prompter,
            "Repository URL",
            manifest.field_or_empty("repository"),
        )?,
    };

    println!("\n{}\n", "🧹 Cleanup Options".blue());
    let remove_examples = prompter
        .ask_yes_no("Remove example tests?")
        .map_err(input_error)?;
    let reinit_git = prompter
        .ask_yes_no("Reinitialize git repository (removes history)?")
        .map_err(input_error)?;

    println!("\n{}\n", "📋 Summary of Changes:".yellow());
    println!("  • Project Name: {}", details.name);
    println!("  • Description: {}", details.description);
    println!("  • Author: {}", details.author);
    println!("  • Repository: {}", details.repository);
    println!("  • Remove Examples: {}", yes_no(remove_examples));
    println!("  • Reinitialize Git: {}", yes_no(reinit_git));
    println!();

    if !prompter
        .confirm("Proceed with these changes?")
        .map_err(input_error)?
    {
        println!("\n{}\n", "❌ Initialization cancelled.".yellow());
        return Ok(Outcome::Cancelled);
    }

    println!("\n{}\n", "⚙️  Applying changes...".green());

    manifest.apply(&details);
    manifest.save(&manifest_path)?;
    crate::success(&format!("Updated {manifest_name}"));

    if remove_examples {
        for path in cleaner::remove_examples(root)? {
            crate::success(&format!("Removed {}", path.display()));
        }
    }

    if reinit_git {
        reset_history_or_warn(root);
    }

    println!("\n{}\n", "🎉 Template initialization complete!".green().bold());
    println!("{}", "Next steps:".blue());
    println!("  1. Update .env with your configuration (cp .env.example .env)");
    println!("  2. Update playwright.config.ts with your baseURL");
    println!("  3. Update tests/utils/constants.ts with your API endpoints");
    println!("  4. Start writing your tests!");
    println!("\n📖 See TEMPLATE_SETUP.md and PROJECT_CUSTOMIZATION.md for detailed guidance.\n");

    Ok(Outcome::Completed)
}

fn ask<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    question: &str,
    default: &str,
) -> Result<String, InitError> {
    prompter.ask(question, default).map_err(input_error)
}

fn input_error(source: std::io::Error) -> InitError {
    InitError::io("failed to read input", source)
}

/// Run the history reset, downgrading any failure to a warning.
///
/// This is the one step that must not abort the run: by this point the
/// manifest is already rewritten and the project is usable without git.
fn reset_history_or_warn(root: &Path) {
    if !git::git_available() {
        crate::warning("Git reinitialization failed: git executable not found");
        return;
    }
    if let Err(e) = git::reset_history(root) {
        crate::warning(&format!("Git reinitialization failed: {e}"));
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
