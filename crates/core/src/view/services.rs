use super::engine::ViewEngine;
use crate::component::ComponentRegistry;
use navkit_api::{
    ComponentViewConvention, FileProvider, ViewComponent, ViewLocationConvention,
    ViewSourceRegistry,
};
use std::sync::Arc;

/// Startup-time service registration: view sources, components and the
/// view location convention.
///
/// Owned by the host builder and handed to library registrars by `&mut`.
#[derive(Debug, Clone)]
pub struct ServiceCollection {
    view_sources: Vec<Arc<dyn FileProvider>>,
    components: ComponentRegistry,
    convention: Arc<dyn ViewLocationConvention>,
}

impl ServiceCollection {
    pub fn new() -> Self {
        Self {
            view_sources: Vec::new(),
            components: ComponentRegistry::new(),
            convention: Arc::new(ComponentViewConvention::default()),
        }
    }

    /// Override how component names map to template paths.
    pub fn set_view_convention(&mut self, convention: Arc<dyn ViewLocationConvention>) {
        self.convention = convention;
    }

    pub fn view_sources(&self) -> &[Arc<dyn FileProvider>] {
        &self.view_sources
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    /// Freeze into the runtime view engine and component registry.
    pub fn into_parts(self) -> (ViewEngine, ComponentRegistry) {
        (
            ViewEngine::new(self.view_sources, self.convention),
            self.components,
        )
    }
}

impl Default for ServiceCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSourceRegistry for ServiceCollection {
    fn add_view_source(&mut self, source: Arc<dyn FileProvider>) {
        tracing::debug!(
            "Adding view source {} at position {}",
            source.name(),
            self.view_sources.len()
        );
        self.view_sources.push(source);
    }

    fn add_component(&mut self, component: Arc<dyn ViewComponent>) {
        self.components.register(component);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navkit_api::{ComponentName, EmbeddedBundle, Manifest, ViewResult};

    static VIEWS: Manifest = &[("Views/Menu/Default.html", b"<ul></ul>")];

    struct Menu;

    impl ViewComponent for Menu {
        fn name(&self) -> ComponentName {
            ComponentName::new("Menu").unwrap()
        }

        fn invoke(&self) -> ViewResult {
            ViewResult::default_view(self.name())
        }
    }

    #[test]
    fn test_sources_append_in_order() {
        let mut services = ServiceCollection::new();
        let first: Arc<dyn FileProvider> =
            Arc::new(EmbeddedBundle::from_manifest("first", &[]).unwrap());
        let second: Arc<dyn FileProvider> =
            Arc::new(EmbeddedBundle::from_manifest("second", VIEWS).unwrap());
        services.add_view_source(first);
        services.add_view_source(second);

        let names: Vec<&str> = services.view_sources().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_custom_convention_reaches_engine() {
        let mut services = ServiceCollection::new();
        services.add_view_source(Arc::new(EmbeddedBundle::from_manifest("views", VIEWS).unwrap()));
        services.add_component(Arc::new(Menu));
        services.set_view_convention(Arc::new(
            ComponentViewConvention::new().with_roots(["Views"]),
        ));

        let (engine, components) = services.into_parts();
        let directive = components.invoke("Menu").unwrap();
        assert_eq!(engine.render(&directive).unwrap().markup, "<ul></ul>");
    }
}
