pub mod component;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod provider;
pub mod static_files;
pub mod view;

pub use component::ComponentRegistry;
pub use config::HostConfig;
pub use error::{NavkitError, Result};
pub use host::{Host, HostBuilder};
pub use provider::DirectoryProvider;
pub use static_files::{StaticAsset, StaticFilePipeline, StaticMount};
pub use view::{RenderedView, ResolvedView, ServiceCollection, ViewEngine};
