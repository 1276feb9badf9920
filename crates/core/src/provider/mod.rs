//! Host-side file providers.
//!
//! Library bundles are embedded at build time (`navkit_api::EmbeddedBundle`);
//! the host's own views and static content live on disk and are served by
//! [`DirectoryProvider`].

pub mod directory;

pub use directory::DirectoryProvider;
