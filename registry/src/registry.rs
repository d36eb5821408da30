//! The Registry - immutable format-code lookup.

use crate::Renderer;
use std::collections::HashMap;

/// Built-in code for decimal integer rendering.
pub(crate) const CODE_DECIMAL: &str = "d";
/// Built-in code for verbatim text rendering.
pub(crate) const CODE_VERBATIM: &str = "s";

/// Runtime lookup of renderers by format code.
/// Immutable after construction (use `RegistryBuilder` to add customs).
#[derive(Debug)]
pub struct Registry {
    /// Built-in decimal renderer, always present under `d`.
    decimal: Renderer,
    /// Built-in verbatim renderer, always present under `s`.
    verbatim: Renderer,
    /// Custom renderers by format code.
    custom: HashMap<String, Renderer>,
}

impl Registry {
    pub(crate) fn new(custom: HashMap<String, Renderer>) -> Self {
        Self {
            decimal: Renderer::Decimal,
            verbatim: Renderer::Verbatim,
            custom,
        }
    }

    /// Look up the renderer for a format code. Built-ins take precedence;
    /// `None` means the code is unknown (the evaluator reports it, never
    /// defaults).
    pub fn lookup(&self, code: &str) -> Option<&Renderer> {
        match code {
            CODE_DECIMAL => Some(&self.decimal),
            CODE_VERBATIM => Some(&self.verbatim),
            _ => self.custom.get(code),
        }
    }

    /// Returns true if a renderer exists for the code.
    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// Number of custom renderers registered.
    pub fn custom_count(&self) -> usize {
        self.custom.len()
    }
}

impl Default for Registry {
    /// A registry with only the built-in renderers.
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}
