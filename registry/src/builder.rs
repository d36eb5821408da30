//! RegistryBuilder for constructing an immutable Registry.

use crate::registry::{CODE_DECIMAL, CODE_VERBATIM};
use crate::{Registry, Renderer};
use fmtree_core::{RenderResult, Value};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("format code '{0}' is reserved for a built-in renderer")]
    ReservedCode(String),

    #[error("duplicate format code: {0}")]
    DuplicateCode(String),

    #[error("format code '{0}' is not a valid identifier")]
    InvalidCode(String),
}

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Builder for constructing an immutable Registry.
///
/// Registration is the single-threaded setup phase; `build` publishes the
/// read-only registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    custom: HashMap<String, Renderer>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom renderer under a format code.
    ///
    /// The code must be an identifier, must not collide with the built-in
    /// codes (`d`, `s`), and must not already be registered.
    pub fn register<F>(&mut self, code: impl Into<String>, f: F) -> RegistryResult<&mut Self>
    where
        F: Fn(&Value) -> RenderResult<String> + Send + Sync + 'static,
    {
        let code = code.into();
        if !is_identifier(&code) {
            return Err(RegistryError::InvalidCode(code));
        }
        if code == CODE_DECIMAL || code == CODE_VERBATIM {
            return Err(RegistryError::ReservedCode(code));
        }
        if self.custom.contains_key(&code) {
            return Err(RegistryError::DuplicateCode(code));
        }
        self.custom.insert(code, Renderer::Custom(Box::new(f)));
        Ok(self)
    }

    /// Finish construction, producing the immutable registry.
    pub fn build(self) -> Registry {
        Registry::new(self.custom)
    }
}

/// A format code must look like an identifier so the parser can recognize
/// it after `%` in a leaf field.
fn is_identifier(code: &str) -> bool {
    let mut chars = code.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
