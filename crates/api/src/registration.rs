use crate::component::ViewComponent;
use crate::models::path::MountPrefix;
use crate::provider::FileProvider;
use std::sync::Arc;

/// Host-side service registration surface used by library view registrars.
///
/// Implementations keep sources in registration order and only ever append.
pub trait ViewSourceRegistry {
    /// Append a template source. Earlier sources win on conflicting paths.
    fn add_view_source(&mut self, source: Arc<dyn FileProvider>);

    /// Register a component under its name, replacing any previous entry.
    fn add_component(&mut self, component: Arc<dyn ViewComponent>);
}

/// Host-side static pipeline surface used by library static registrars.
pub trait StaticFileRegistry {
    /// Append a mount. Mounts are consulted in registration order.
    fn mount(&mut self, prefix: MountPrefix, source: Arc<dyn FileProvider>);
}
