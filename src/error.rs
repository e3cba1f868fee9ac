//! Error types for the initializer.
//!
//! Three failure classes exist: the manifest is not valid JSON, a file
//! operation failed, or an external git command failed. The first two are
//! fatal; git failures are caught by the wizard and downgraded to a warning.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// An error raised while personalizing the template.
#[derive(Debug)]
pub enum InitError {
    /// The manifest file is not well-formed JSON (or not a JSON object).
    Parse {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },
    /// A read, write, or delete on the filesystem failed.
    Io {
        /// What was being attempted, e.g. `failed to read package.json`.
        context: String,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// An external git invocation could not be spawned or exited nonzero.
    Command {
        /// The full command line, e.g. `git commit -m "..."`.
        command: String,
        /// Spawn error or captured stderr.
        detail: String,
    },
}

impl InitError {
    /// Build an [`InitError::Parse`] for the given manifest path.
    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        InitError::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Build an [`InitError::Io`] with a human-readable context line.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        InitError::Io {
            context: context.into(),
            source,
        }
    }

    /// Build an [`InitError::Command`] for a failed git invocation.
    pub fn command(command: impl Into<String>, detail: impl Into<String>) -> Self {
        InitError::Command {
            command: command.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            InitError::Io { context, source } => write!(f, "{context}: {source}"),
            InitError::Command { command, detail } => write!(f, "`{command}` failed: {detail}"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Parse { source, .. } => Some(source),
            InitError::Io { source, .. } => Some(source),
            InitError::Command { .. } => None,
        }
    }
}
