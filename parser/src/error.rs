//! Spec parse error types.
//!
//! Every variant carries the byte offset into the spec string where the
//! problem was detected, so callers can point at the offending character.

use thiserror::Error;

/// Result type for spec compilation.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised while compiling a spec string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// A `{` was opened and never closed.
    #[error("unbalanced braces: '{{' at byte {pos} is never closed")]
    UnbalancedOpen { pos: usize },

    /// A `}` appeared with no matching `{`.
    #[error("unbalanced braces: stray '}}' at byte {pos}")]
    StrayClose { pos: usize },

    /// A backslash escape named an unrecognized target.
    #[error("unknown escape '\\{found}' at byte {pos}")]
    UnknownEscape { found: char, pos: usize },

    /// The spec ended in the middle of an escape sequence.
    #[error("dangling escape at byte {pos}: spec ends after '\\'")]
    DanglingEscape { pos: usize },

    /// A container directive did not split into open/sep/close/inner.
    #[error("container directive at byte {pos} has {found} sections, expected 4")]
    SectionCount { pos: usize, found: usize },

    /// A leaf field has no `%`-introduced format code.
    #[error("leaf field at byte {pos} is missing a format code")]
    MissingFormatCode { pos: usize },

    /// A format code is empty or not an identifier.
    #[error("invalid format code '{found}' at byte {pos}")]
    InvalidFormatCode { found: String, pos: usize },

    /// A leaf directive declares no fields at all.
    #[error("leaf directive at byte {pos} declares no fields")]
    EmptyLeaf { pos: usize },

    /// Directive nesting exceeded the depth limit.
    #[error("spec nesting at byte {pos} exceeds the depth limit of {limit}")]
    TooDeep { pos: usize, limit: usize },
}

impl SpecError {
    /// Byte offset into the spec string where the error was detected.
    pub fn position(&self) -> usize {
        match self {
            SpecError::UnbalancedOpen { pos }
            | SpecError::StrayClose { pos }
            | SpecError::UnknownEscape { pos, .. }
            | SpecError::DanglingEscape { pos }
            | SpecError::SectionCount { pos, .. }
            | SpecError::MissingFormatCode { pos }
            | SpecError::InvalidFormatCode { pos, .. }
            | SpecError::EmptyLeaf { pos }
            | SpecError::TooDeep { pos, .. } => *pos,
        }
    }
}
