//! Fresh git history for the personalized project.
//!
//! The template ships with its own history; once personalized, the new
//! project usually wants to start from a single commit. Every git
//! invocation here is synchronous with piped stdio, and the wizard treats
//! any failure from this module as a warning rather than an error.

use crate::error::InitError;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

/// Message of the single commit a reset history starts with.
pub const COMMIT_MESSAGE: &str = "chore: initialize project from template";

/// Whether a git executable can be found on `PATH`.
#[must_use]
pub fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Drop any existing history and create a fresh repository with one commit.
///
/// Deletes `root/.git` if present, then runs `git init`, `git add .`, and
/// `git commit` in sequence, printing a status line after each completed
/// step. Check [`git_available`] before calling so a missing binary does
/// not destroy history it cannot recreate.
///
/// # Errors
/// Returns [`InitError::Io`] if the old metadata cannot be deleted, or
/// [`InitError::Command`] if a git invocation fails.
pub fn reset_history(root: &Path) -> Result<(), InitError> {
    let git_dir = root.join(".git");
    if git_dir.exists() {
        fs::remove_dir_all(&git_dir)
            .map_err(|e| InitError::io(format!("failed to remove {}", git_dir.display()), e))?;
        crate::success("Removed .git directory");
    }

    run_git(root, &["init"])?;
    crate::success("Reinitialized git repository");

    run_git(root, &["add", "."])?;
    run_git(root, &["commit", "-m", COMMIT_MESSAGE])?;
    crate::success("Created initial commit");

    Ok(())
}

/// Run one git command under `root`, capturing output.
fn run_git(root: &Path, args: &[&str]) -> Result<(), InitError> {
    let command_line = format!("git {}", args.join(" "));
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| InitError::command(&command_line, e.to_string()))?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let detail = if stderr.trim().is_empty() {
        format!("exited with {}", output.status)
    } else {
        stderr.trim().to_string()
    };
    Err(InitError::command(command_line, detail))
}
