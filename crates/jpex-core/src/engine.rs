//! Query compilation and evaluation
//!
//! Wraps the JMESPath engine behind a small trait so the controller can be
//! exercised with a scripted engine in tests. Engine outcomes are tagged
//! values, never exceptions: a query that matches nothing is [`Outcome::Absent`],
//! and compile or runtime failures come back as [`QueryError`] variants.

use std::fmt;

use serde_json::Value;

use crate::document::Document;

/// Errors raised while compiling or running a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The expression text failed to parse
    #[error("{message}")]
    Compile {
        /// Parser diagnostic for the expression
        message: String,
    },

    /// The compiled expression failed while running against the document
    #[error("{message}")]
    Eval {
        /// Runtime diagnostic from the engine
        message: String,
    },
}

impl QueryError {
    /// Create a compile error
    pub fn compile(message: impl Into<String>) -> Self {
        Self::Compile {
            message: message.into(),
        }
    }

    /// Create an evaluation error
    pub fn eval(message: impl Into<String>) -> Self {
        Self::Eval {
            message: message.into(),
        }
    }

    /// Diagnostic text carried by either variant
    pub fn message(&self) -> &str {
        match self {
            Self::Compile { message } | Self::Eval { message } => message,
        }
    }
}

/// Result of running a compiled query against a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The query produced a value
    Value(Value),
    /// The query ran cleanly but matched nothing in the document
    Absent,
}

/// Compiles expression text and runs compiled queries against a document.
pub trait QueryEngine {
    /// Compiled form of an expression
    type Query;

    /// Compile raw expression text
    fn compile(&self, expression: &str) -> Result<Self::Query, QueryError>;

    /// Run a compiled query against a document
    fn evaluate(&self, query: &Self::Query, document: &Document) -> Result<Outcome, QueryError>;
}

/// An expression compiled by [`JmespathEngine`].
pub struct CompiledQuery {
    expr: jmespath::Expression<'static>,
}

impl CompiledQuery {
    /// Original expression text
    pub fn as_str(&self) -> &str {
        self.expr.as_str()
    }
}

impl fmt::Debug for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledQuery")
            .field("expression", &self.expr.as_str())
            .finish()
    }
}

/// [`QueryEngine`] backed by the `jmespath` crate.
///
/// The engine reports a query that matches nothing as null, so null search
/// results map to [`Outcome::Absent`]. A document null selected directly is
/// reported the same way.
#[derive(Debug, Default, Clone, Copy)]
pub struct JmespathEngine;

impl JmespathEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }
}

impl QueryEngine for JmespathEngine {
    type Query = CompiledQuery;

    fn compile(&self, expression: &str) -> Result<CompiledQuery, QueryError> {
        jmespath::compile(expression)
            .map(|expr| CompiledQuery { expr })
            .map_err(|err| QueryError::compile(err.to_string()))
    }

    fn evaluate(&self, query: &CompiledQuery, document: &Document) -> Result<Outcome, QueryError> {
        let found = query
            .expr
            .search(document.engine_value().clone())
            .map_err(|err| QueryError::eval(err.to_string()))?;
        if found.is_null() {
            return Ok(Outcome::Absent);
        }
        serde_json::to_value(&*found)
            .map(Outcome::Value)
            .map_err(|err| QueryError::eval(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DEFAULT_INDENT, SAMPLE_DOCUMENT};
    use assert_matches::assert_matches;
    use serde_json::json;

    fn sample() -> Document {
        Document::from_text(SAMPLE_DOCUMENT, DEFAULT_INDENT).unwrap()
    }

    #[test]
    fn test_compile_accepts_valid_expression() {
        let engine = JmespathEngine::new();
        let query = engine.compile("c.e[0]").unwrap();
        assert_eq!(query.as_str(), "c.e[0]");
    }

    #[test]
    fn test_compile_rejects_empty_expression() {
        let engine = JmespathEngine::new();
        assert_matches!(engine.compile(""), Err(QueryError::Compile { .. }));
    }

    #[test]
    fn test_compile_rejects_unbalanced_bracket() {
        let engine = JmespathEngine::new();
        assert_matches!(engine.compile("a["), Err(QueryError::Compile { .. }));
    }

    #[test]
    fn test_key_lookup_finds_value() {
        let engine = JmespathEngine::new();
        let query = engine.compile("a").unwrap();
        let outcome = engine.evaluate(&query, &sample()).unwrap();
        assert_eq!(outcome, Outcome::Value(json!("foo")));
    }

    #[test]
    fn test_nested_index_finds_value() {
        let engine = JmespathEngine::new();
        let query = engine.compile("c.e[1]").unwrap();
        let outcome = engine.evaluate(&query, &sample()).unwrap();
        assert_eq!(outcome, Outcome::Value(json!(2)));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let engine = JmespathEngine::new();
        let query = engine.compile("nope").unwrap();
        let outcome = engine.evaluate(&query, &sample()).unwrap();
        assert_eq!(outcome, Outcome::Absent);
    }

    #[test]
    fn test_out_of_bounds_index_is_absent() {
        let engine = JmespathEngine::new();
        let query = engine.compile("c.e[9]").unwrap();
        let outcome = engine.evaluate(&query, &sample()).unwrap();
        assert_eq!(outcome, Outcome::Absent);
    }

    #[test]
    fn test_literal_null_reads_as_absent() {
        let engine = JmespathEngine::new();
        let query = engine.compile("`null`").unwrap();
        let outcome = engine.evaluate(&query, &sample()).unwrap();
        assert_eq!(outcome, Outcome::Absent);
    }

    #[test]
    fn test_runtime_type_failure_is_eval_error() {
        let engine = JmespathEngine::new();
        // avg() requires an array of numbers, the root is an object
        let query = engine.compile("avg(@)").unwrap();
        let result = engine.evaluate(&query, &sample());
        assert_matches!(result, Err(QueryError::Eval { .. }));
    }

    #[test]
    fn test_whole_document_query() {
        let engine = JmespathEngine::new();
        let query = engine.compile("@").unwrap();
        let outcome = engine.evaluate(&query, &sample()).unwrap();
        assert_matches!(outcome, Outcome::Value(Value::Object(_)));
    }

    #[test]
    fn test_error_message_accessor() {
        let err = QueryError::compile("syntax error at 3");
        assert_eq!(err.message(), "syntax error at 3");
        assert_eq!(err.to_string(), "syntax error at 3");
    }
}
