//! Template resolution.
//!
//! Host and library templates are reached through an ordered list of
//! [`FileProvider`](navkit_api::FileProvider)s collected in a
//! [`ServiceCollection`] during startup. Once the host is built the list is
//! frozen into a [`ViewEngine`] which walks it on every render; the first
//! source holding a candidate path wins.

pub mod engine;
pub mod services;

pub use engine::{RenderedView, ResolvedView, ViewEngine};
pub use services::ServiceCollection;
