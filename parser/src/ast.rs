//! Directive AST types.
//!
//! A compiled spec is a sequence of directives. The AST is immutable after
//! construction and may be reused across any number of renders; compiling
//! the same spec twice yields structurally equal trees.

/// One parsed unit of a format spec.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Raw characters emitted verbatim.
    Literal(String),
    /// A structural character admitted as literal output via an escape.
    Escape(char),
    /// One level of container rendering.
    Container(ContainerSpec),
    /// A multi-field leaf rendering.
    Leaf(LeafSpec),
}

/// How to render one level of container nesting.
///
/// `open` is emitted before the first element, `sep` between siblings,
/// `close` after the last. `inner` is the sub-spec applied recursively to
/// each element; it may itself contain a `Container`, giving arbitrary
/// nesting depth.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSpec {
    pub open: Vec<Directive>,
    pub sep: Vec<Directive>,
    pub close: Vec<Directive>,
    pub inner: Vec<Directive>,
}

/// How to render a multi-field leaf record.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafSpec {
    /// Field specs in declaration order. The i-th spec binds to the i-th
    /// record field.
    pub fields: Vec<FieldSpec>,
}

impl LeafSpec {
    /// Number of fields this leaf declares.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

/// One field slot of a leaf directive.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Literal prefix emitted before the rendered field value.
    pub prefix: Vec<Directive>,
    /// Positional selector: which record field this spec binds to.
    pub index: usize,
    /// Format code naming the renderer to apply.
    pub code: String,
}
