//! Workbook document handling
//!
//! Wraps the parsed Azure Monitor workbook JSON and owns the two boundary
//! operations of the pipeline: reading the source file into a document tree
//! and writing the mutated tree back over it.
//!
//! Objects keep their key insertion order across a load/save round trip
//! (serde_json `preserve_order`), and non-ASCII characters are written
//! literally, so a saved document differs from its source only where the
//! patch operations changed it.

use crate::error::{LoadError, SaveError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// An Azure Monitor workbook document
///
/// The root is expected to be a JSON object carrying a top-level `items`
/// array, but no shape is enforced at load time: the patch operations
/// navigate defensively and skip whatever does not match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workbook {
    root: Value,
}

impl Workbook {
    /// Wrap an already-parsed JSON value
    #[inline]
    #[must_use]
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Read and parse a workbook file
    ///
    /// # Errors
    /// - `LoadError::Io` if the file cannot be read
    /// - `LoadError::Syntax` if the content is not well-formed JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| LoadError::io_error(path, e))?;
        let workbook: Self = serde_json::from_str(&content)
            .map_err(|e| LoadError::syntax_error(path, e.to_string()))?;
        tracing::debug!("Loaded workbook {} ({} bytes)", path.display(), content.len());
        Ok(workbook)
    }

    /// Serialize the document and overwrite the destination file
    ///
    /// Renders with stable 2-space indentation. The destination is written
    /// in place; there is no temp-file-then-rename step.
    ///
    /// # Errors
    /// - `SaveError::Io` if the destination cannot be written
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let rendered = serde_json::to_string_pretty(self)
            .map_err(|e| SaveError::Serialization(e.to_string()))?;
        fs::write(path, &rendered).map_err(|e| SaveError::io_error(path, e))?;
        tracing::debug!("Saved workbook {} ({} bytes)", path.display(), rendered.len());
        Ok(())
    }

    /// Root JSON value
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Mutable root JSON value
    #[inline]
    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkbookError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Workbook::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn load_invalid_json_is_syntax_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"items\": [").unwrap();

        let result = Workbook::load(&path);
        assert!(matches!(result, Err(LoadError::Syntax { .. })));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbook.json");
        let workbook = Workbook::from_value(json!({
            "version": "Notebook/1.0",
            "items": [{"type": 1, "name": "text - 0"}]
        }));

        workbook.save(&path).unwrap();
        let reloaded = Workbook::load(&path).unwrap();
        assert_eq!(workbook, reloaded);
    }

    #[test]
    fn save_uses_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbook.json");
        Workbook::from_value(json!({"items": []}))
            .save(&path)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"items\": []\n}");
    }

    #[test]
    fn save_preserves_non_ascii_literally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbook.json");
        Workbook::from_value(json!({"title": "Übersicht ✓"}))
            .save(&path)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Übersicht ✓"));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn load_preserves_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbook.json");
        fs::write(&path, r#"{"zebra": 1, "apple": 2, "mango": 3}"#).unwrap();

        let workbook = Workbook::load(&path).unwrap();
        let keys: Vec<&String> = workbook.root().as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn errors_convert_into_workbook_error() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Workbook, WorkbookError> =
            Workbook::load(dir.path().join("absent.json")).map_err(Into::into);
        assert!(matches!(result, Err(WorkbookError::Load(_))));
    }
}
