//! Error types for querychain.

use thiserror::Error;

use crate::ast::{Noun, Operator};

/// The main error type for building and rendering queries.
///
/// Every variant except the I/O and decoding ones describes a malformed or
/// internally inconsistent token tree. None of them are recoverable at
/// render time.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A clause that may appear once was found more than once.
    #[error("Ambiguous {clause} clause: expected at most one, found {count}")]
    AmbiguousClause { clause: Noun, count: usize },

    /// A clause that must reference at least one table resolved to nothing.
    #[error("Missing required {clause} clause: {reason}")]
    MissingRequiredClause { clause: Noun, reason: String },

    /// A token the renderer has no dispatch for.
    #[error("Unsupported token in {clause} clause: {found}")]
    UnsupportedExpression { clause: Noun, found: String },

    /// A comparator that is not valid for the expression carrying it.
    #[error("Unsupported comparator '{operator}' in {context}")]
    UnsupportedComparator {
        operator: Operator,
        context: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QueryError {
    pub fn ambiguous(clause: Noun, count: usize) -> Self {
        Self::AmbiguousClause { clause, count }
    }

    pub fn missing(clause: Noun, reason: impl Into<String>) -> Self {
        Self::MissingRequiredClause {
            clause,
            reason: reason.into(),
        }
    }

    pub fn unsupported(clause: Noun, found: impl Into<String>) -> Self {
        Self::UnsupportedExpression {
            clause,
            found: found.into(),
        }
    }

    pub fn comparator(operator: Operator, context: &'static str) -> Self {
        Self::UnsupportedComparator { operator, context }
    }
}

/// Result type alias for querychain operations.
pub type QueryResult<T> = Result<T, QueryError>;
