//! The Engine facade.

use crate::evaluator::evaluate;
use fmtree_core::{RenderError, RenderResult, Value};
use fmtree_parser::{parse_spec, Directive, SpecError, SpecResult};
use fmtree_registry::Registry;
use thiserror::Error;

/// Errors surfaced by a one-shot `render` call: either the spec failed to
/// compile or evaluation against the value tree failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("malformed spec: {0}")]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Compile a spec string into a reusable directive AST.
pub fn compile(spec: &str) -> SpecResult<Vec<Directive>> {
    parse_spec(spec)
}

/// One-shot render with a built-ins-only registry.
pub fn render(spec: &str, value: &Value) -> EngineResult<String> {
    Engine::new().render(spec, value)
}

/// Parser + evaluator + registry behind a single entry point.
///
/// The engine owns no per-call state; a shared `Engine` may serve
/// concurrent render calls.
#[derive(Debug, Default)]
pub struct Engine {
    registry: Registry,
}

impl Engine {
    /// An engine with only the built-in renderers.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine over a caller-built registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    /// The registry this engine dispatches through.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Compile a spec string. Identical to the free `compile`; present so
    /// callers holding an engine need only one handle.
    pub fn compile(&self, spec: &str) -> SpecResult<Vec<Directive>> {
        parse_spec(spec)
    }

    /// Evaluate a compiled AST against a value tree.
    pub fn evaluate(&self, ast: &[Directive], value: &Value) -> RenderResult<String> {
        evaluate(ast, value, &self.registry)
    }

    /// Compile and evaluate in one call.
    pub fn render(&self, spec: &str, value: &Value) -> EngineResult<String> {
        let ast = parse_spec(spec)?;
        Ok(evaluate(&ast, value, &self.registry)?)
    }
}
