//! Document loading and pretty-printed rendering
//!
//! A document is parsed exactly once at startup. Both the pretty-printed text
//! shown in the left pane and the engine-side representation are cached here,
//! so each keystroke re-runs only the query itself.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Document used when no file is given on the command line.
pub const SAMPLE_DOCUMENT: &str =
    r#"{"a": "foo", "b": "bar", "c": {"d": "baz", "e": [1, 2, 3]}}"#;

/// Indent width used when no configuration overrides it.
pub const DEFAULT_INDENT: usize = 2;

/// Errors raised while loading a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The text is not valid JSON
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The query engine rejected the parsed text
    #[error("query engine rejected document: {message}")]
    Engine {
        /// Error message reported by the engine
        message: String,
    },
}

/// A JSON document loaded for querying.
///
/// Holds the parsed value, the engine-side representation handed to each
/// evaluation, and the pretty-printed text for display.
#[derive(Debug)]
pub struct Document {
    value: Value,
    engine: jmespath::Rcvar,
    pretty: String,
    indent: usize,
}

impl Document {
    /// Parse a document from JSON text.
    pub fn from_text(text: &str, indent: usize) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)?;
        let engine = jmespath::Variable::from_json(text)
            .map(jmespath::Rcvar::new)
            .map_err(|message| DocumentError::Engine { message })?;
        let pretty = to_pretty_string(&value, indent);
        Ok(Self {
            value,
            engine,
            pretty,
            indent,
        })
    }

    /// Read and parse a document from a file.
    pub fn from_path(path: &Path, indent: usize) -> Result<Self, DocumentError> {
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text, indent)
    }

    /// The parsed document value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Engine-side representation of the document
    pub fn engine_value(&self) -> &jmespath::Rcvar {
        &self.engine
    }

    /// Pretty-printed document text
    pub fn pretty(&self) -> &str {
        &self.pretty
    }

    /// Indent width used when rendering JSON
    pub fn indent(&self) -> usize {
        self.indent
    }
}

/// Pretty-print a serializable value with the given indent width.
///
/// Returns an empty string if serialization fails, which cannot happen for
/// the JSON values this crate produces.
pub fn to_pretty_string<T: Serialize>(value: &T, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    if value.serialize(&mut serializer).is_err() {
        return String::new();
    }
    String::from_utf8(out).unwrap_or_default()
}
