//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push("template-init");

    // If the binary doesn't exist in debug, try building it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "template-init"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build template-init binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// A minimal template manifest matching the fields the wizard edits
pub const SAMPLE_MANIFEST: &str =
    r#"{"name":"old","description":"d","author":"a","repository":"r","version":"0.1.0"}"#;

/// Helper to write a package.json into a project directory
pub fn write_manifest(dir: &Path, content: &str) {
    fs::write(dir.join("package.json"), content).unwrap();
}

/// Helper to read back the package.json as raw text
pub fn read_manifest_raw(dir: &Path) -> String {
    fs::read_to_string(dir.join("package.json")).unwrap()
}

/// Helper to read back the package.json as a JSON value
pub fn read_manifest_value(dir: &Path) -> serde_json::Value {
    serde_json::from_str(&read_manifest_raw(dir)).unwrap()
}

/// Build a Command for the binary pointed at `root`, with piped stdio
pub fn init_command(binary: &Path, root: &Path) -> Command {
    let mut cmd = Command::new(binary);
    cmd.arg("--root")
        .arg(root)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

/// Spawn the command, feed `answers` on stdin, and wait for it to finish.
/// Write errors are ignored: the binary may exit before reading everything.
pub fn run_with_answers(cmd: &mut Command, answers: &str) -> Output {
    let mut child = cmd.spawn().expect("Failed to spawn binary");
    if let Some(stdin) = child.stdin.as_mut() {
        let _ = stdin.write_all(answers.as_bytes());
    }
    child.wait_with_output().expect("Failed to wait for binary")
}

/// One full interactive run: spawn against `root` and feed `answers`
pub fn run_init(binary: &Path, root: &Path, answers: &str) -> Output {
    run_with_answers(&mut init_command(binary, root), answers)
}

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
