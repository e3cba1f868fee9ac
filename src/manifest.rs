//! Loading, editing, and rewriting the project manifest (`package.json`).
//!
//! The manifest is held as a raw JSON object so that fields the initializer
//! does not know about survive the rewrite untouched, in their original
//! order (`serde_json` with `preserve_order`).

use crate::error::InitError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Version every freshly personalized project starts from.
pub const INITIAL_VERSION: &str = "1.0.0";

/// Project metadata captured from the operator's answers.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetails {
    pub name: String,
    pub description: String,
    pub author: String,
    pub repository: String,
}

/// A parsed manifest: the top-level JSON object of `package.json`.
#[derive(Debug, Clone)]
pub struct Manifest {
    fields: Map<String, Value>,
}

/// Read and parse the manifest at `path`.
///
/// # Errors
/// Returns [`InitError::Io`] if the file cannot be read, or
/// [`InitError::Parse`] if it is not a JSON object.
pub fn load(path: &Path) -> Result<Manifest, InitError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| InitError::io(format!("failed to read {}", path.display()), e))?;
    let fields: Map<String, Value> =
        serde_json::from_str(&raw).map_err(|e| InitError::parse(path, e))?;
    Ok(Manifest { fields })
}

impl Manifest {
    /// Current string value of a top-level field, used as a prompt default.
    ///
    /// Absent or non-string fields yield an empty default rather than an
    /// error; the operator can still type a fresh value.
    #[must_use]
    pub fn field_or_empty(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Overwrite the four metadata fields and reset `version`.
    ///
    /// Existing keys keep their position in the object; keys the template
    /// manifest somehow lacks are appended at the end.
    pub fn apply(&mut self, details: &ProjectDetails) {
        self.set_string("name", &details.name);
        self.set_string("description", &details.description);
        self.set_string("author", &details.author);
        self.set_string("repository", &details.repository);
        // Reset version for the new project
        self.set_string("version", INITIAL_VERSION);
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    /// Serialize with tab indentation and overwrite the file in place.
    ///
    /// # Errors
    /// Returns [`InitError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), InitError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.fields
            .serialize(&mut ser)
            .map_err(|e| InitError::io("failed to serialize manifest", std::io::Error::other(e)))?;
        buf.push(b'\n');
        fs::write(path, buf)
            .map_err(|e| InitError::io(format!("failed to write {}", path.display()), e))
    }
}
