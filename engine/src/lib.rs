//! fmtree Engine
//!
//! Ties the spec parser, evaluator and renderer registry together behind a
//! single entry point.
//!
//! Responsibilities:
//! - `compile` a spec string into a reusable directive AST
//! - `evaluate` an AST against a value tree through a registry
//! - `Engine` facade owning a registry, with a one-shot `render`
//!
//! A render call holds no state between invocations; a compiled AST and a
//! built registry can be shared across threads.

mod engine;
mod evaluator;

pub use engine::{compile, render, Engine, EngineError, EngineResult};
pub use evaluator::evaluate;

// Re-export the types a facade caller needs.
pub use fmtree_core::{RenderError, RenderResult, Value};
pub use fmtree_parser::{Directive, SpecError, SpecResult};
pub use fmtree_registry::{Registry, RegistryBuilder, RegistryError};
