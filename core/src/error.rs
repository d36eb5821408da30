//! Evaluation error types.
//!
//! These failures depend on the concrete value tree, so they surface at
//! evaluate time rather than compile time. Parse-time failures live in
//! the parser crate.

use thiserror::Error;

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering a value tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The directive expects one shape of value and found another,
    /// e.g. a container directive against a leaf.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A leaf directive declares a different number of fields than the
    /// record provides.
    #[error("arity mismatch: leaf declares {declared} fields, record has {actual}")]
    ArityMismatch { declared: usize, actual: usize },

    /// No renderer is registered for the format code.
    #[error("unknown format code '{code}'")]
    UnknownFormatCode { code: String },

    /// A custom renderer reported a failure.
    #[error("renderer '{code}' failed: {message}")]
    RendererFailed { code: String, message: String },
}

impl RenderError {
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }

    pub fn arity_mismatch(declared: usize, actual: usize) -> Self {
        Self::ArityMismatch { declared, actual }
    }

    pub fn unknown_format_code(code: impl Into<String>) -> Self {
        Self::UnknownFormatCode { code: code.into() }
    }

    pub fn renderer_failed(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RendererFailed {
            code: code.into(),
            message: message.into(),
        }
    }
}
