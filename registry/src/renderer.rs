//! Leaf rendering strategies.

use fmtree_core::{RenderError, RenderResult, Value};

/// Boxed custom rendering function. Must be `Send + Sync` so a built
/// registry can be shared across threads.
pub type RenderFn = Box<dyn Fn(&Value) -> RenderResult<String> + Send + Sync>;

/// A rendering strategy for one leaf field.
///
/// Built-ins are closed variants; open-ended extension goes through
/// `Custom`, keyed by format code in the registry.
pub enum Renderer {
    /// `Int` as a decimal literal.
    Decimal,
    /// `Text` verbatim, embedded whitespace preserved.
    Verbatim,
    /// Caller-supplied rendering function.
    Custom(RenderFn),
}

impl Renderer {
    /// Render one leaf value with this strategy.
    pub fn format(&self, value: &Value) -> RenderResult<String> {
        match self {
            Renderer::Decimal => match value {
                Value::Int(i) => Ok(i.to_string()),
                other => Err(RenderError::type_mismatch("Int", other.type_name())),
            },
            Renderer::Verbatim => match value {
                Value::Text(s) => Ok(s.clone()),
                other => Err(RenderError::type_mismatch("Text", other.type_name())),
            },
            Renderer::Custom(f) => f(value),
        }
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Renderer::Decimal => write!(f, "Decimal"),
            Renderer::Verbatim => write!(f, "Verbatim"),
            Renderer::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}
