//! fmtree Core Types
//!
//! This crate provides the foundational types shared across the fmtree
//! workspace:
//! - The `Value` tree (the data being rendered)
//! - The `RenderError` taxonomy for evaluation-time failures

mod error;
mod value;

pub use error::*;
pub use value::*;
