//! Removal of the example tests and fixtures shipped with the template.

use crate::error::InitError;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything in the template that exists purely as example content,
/// relative to the project root.
pub const EXAMPLE_PATHS: [&str; 12] = [
    "tests/api-tests/articles",
    "tests/api-tests/tags",
    "tests/api-tests/user",
    "tests/ui-tests/feature/login",
    "tests/ui-tests/pages/Homepage",
    "tests/ui-tests/pages/LoginPage",
    "tests/response-schemas/articles",
    "tests/response-schemas/profiles",
    "tests/response-schemas/tags",
    "tests/response-schemas/users",
    "request-objects/articles",
    "request-objects/user",
];

/// Delete every example path that exists under `root`.
///
/// Missing paths are skipped silently, so running this twice is a no-op the
/// second time. Returns the relative paths that were actually removed, in
/// list order.
///
/// # Errors
/// Returns [`InitError::Io`] on the first deletion that fails; remaining
/// paths are left as they are.
pub fn remove_examples(root: &Path) -> Result<Vec<PathBuf>, InitError> {
    let mut removed = Vec::new();

    for rel in EXAMPLE_PATHS {
        let full = root.join(rel);
        if !full.exists() {
            continue;
        }

        let result = if full.is_dir() {
            fs::remove_dir_all(&full)
        } else {
            fs::remove_file(&full)
        };
        result.map_err(|e| InitError::io(format!("failed to remove {}", full.display()), e))?;

        removed.push(PathBuf::from(rel));
    }

    Ok(removed)
}
