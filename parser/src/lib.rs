//! fmtree Spec Parser
//!
//! This crate compiles a format-spec string into a directive AST:
//! - Literal text and escaped structural characters
//! - Container directives (open/sep/close sections plus a recursive
//!   per-element inner spec)
//! - Leaf directives (ordered fields with prefixes and format codes)
//! - Error reporting with byte positions
//!
//! All malformed-spec conditions are detected here, at compile time;
//! nothing is deferred to evaluation.

mod ast;
mod error;
mod parser;

pub use ast::*;
pub use error::*;
pub use parser::{parse_spec, MAX_DEPTH};
