pub mod bundle;
pub mod component;
pub mod error;
pub mod models;
pub mod provider;
pub mod registration;

// Re-export commonly used types
pub use bundle::{EmbeddedBundle, Manifest};
pub use component::ViewComponent;
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use provider::{FileEntry, FileProvider};
pub use registration::{StaticFileRegistry, ViewSourceRegistry};
