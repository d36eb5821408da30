//! fmtree Renderer Registry
//!
//! Maps format codes to leaf renderers:
//! - Built-in renderers for integers (`d`, decimal) and text (`s`, verbatim)
//! - Custom renderers registered under caller-chosen codes
//!
//! Registration happens through `RegistryBuilder` during a single-threaded
//! setup phase; the built `Registry` is immutable and safe to share across
//! concurrent render calls.

mod builder;
mod registry;
mod renderer;

pub use builder::{RegistryBuilder, RegistryError, RegistryResult};
pub use registry::Registry;
pub use renderer::Renderer;
