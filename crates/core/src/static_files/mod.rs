//! Static asset serving.
//!
//! Mounts are consulted in the order the host registered them and the first
//! mount that both covers the request path and holds the file answers it.
//! The default host mounts its own content root first and library bundles
//! after it, so host files shadow library files with the same URL.

pub mod content_type;
pub mod pipeline;

pub use content_type::content_type_for;
pub use pipeline::{StaticAsset, StaticFilePipeline, StaticMount};
