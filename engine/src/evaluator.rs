//! The evaluator - structural recursion over an AST/value pair.
//!
//! The directive tree and the value tree are walked in lock-step: a
//! `Container` directive consumes one level of `Seq` nesting, a `Leaf`
//! directive consumes a record (or a bare scalar, treated as a one-field
//! record). A shape disagreement between the two trees is a `TypeMismatch`.
//!
//! Output order is fully determined by value order and directive order;
//! the evaluator never sorts, filters or deduplicates.

use fmtree_core::{RenderError, RenderResult, Value};
use fmtree_parser::{ContainerSpec, Directive, LeafSpec};
use fmtree_registry::Registry;

/// Render a compiled directive sequence against a value tree.
pub fn evaluate(ast: &[Directive], value: &Value, registry: &Registry) -> RenderResult<String> {
    let mut out = String::new();
    eval_pieces(ast, value, registry, &mut out)?;
    Ok(out)
}

fn eval_pieces(
    pieces: &[Directive],
    value: &Value,
    registry: &Registry,
    out: &mut String,
) -> RenderResult<()> {
    for piece in pieces {
        match piece {
            Directive::Literal(text) => out.push_str(text),
            Directive::Escape(c) => out.push(*c),
            Directive::Container(spec) => eval_container(spec, value, registry, out)?,
            Directive::Leaf(spec) => eval_leaf(spec, value, registry, out)?,
        }
    }
    Ok(())
}

/// Emit open, the elements joined by sep, then close. Elements keep their
/// original order; no separator leads or trails.
fn eval_container(
    spec: &ContainerSpec,
    value: &Value,
    registry: &Registry,
    out: &mut String,
) -> RenderResult<()> {
    let Some(elems) = value.as_seq() else {
        return Err(RenderError::type_mismatch("Seq", value.type_name()));
    };

    eval_pieces(&spec.open, value, registry, out)?;
    for (i, elem) in elems.iter().enumerate() {
        if i > 0 {
            eval_pieces(&spec.sep, value, registry, out)?;
        }
        eval_pieces(&spec.inner, elem, registry, out)?;
    }
    eval_pieces(&spec.close, value, registry, out)
}

/// Emit each declared field's prefix followed by the rendered field value.
fn eval_leaf(
    spec: &LeafSpec,
    value: &Value,
    registry: &Registry,
    out: &mut String,
) -> RenderResult<()> {
    // A bare scalar behaves as a one-field record, so `{=%d}` applies
    // directly to the elements of a flat integer sequence.
    let fields: &[Value] = match value {
        Value::Record(fields) => fields,
        Value::Int(_) | Value::Text(_) => std::slice::from_ref(value),
        Value::Seq(_) => {
            return Err(RenderError::type_mismatch("Record", "Seq"));
        }
    };

    if spec.arity() != fields.len() {
        return Err(RenderError::arity_mismatch(spec.arity(), fields.len()));
    }

    for field in &spec.fields {
        eval_pieces(&field.prefix, value, registry, out)?;
        let renderer = registry
            .lookup(&field.code)
            .ok_or_else(|| RenderError::unknown_format_code(&field.code))?;
        out.push_str(&renderer.format(&fields[field.index])?);
    }
    Ok(())
}

// ==================== TESTS ====================
