//! Name → component lookup owned by the host.

use crate::error::{NavkitError, Result};
use indexmap::IndexMap;
use navkit_api::{ComponentName, ViewComponent, ViewResult};
use std::sync::Arc;

/// Registered components in registration order.
///
/// Registering a name twice replaces the earlier component in place, so a
/// registrar that runs twice does not produce a second entry.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    components: IndexMap<ComponentName, Arc<dyn ViewComponent>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component. Returns `true` if it replaced an existing one.
    pub fn register(&mut self, component: Arc<dyn ViewComponent>) -> bool {
        let name = component.name();
        let replaced = self.components.insert(name.clone(), component).is_some();
        if replaced {
            tracing::debug!("Component {} registered again; keeping the latest", name);
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn ViewComponent>> {
        self.components.get(name)
    }

    /// Invoke a component by name and return its render directive.
    pub fn invoke(&self, name: &str) -> Result<ViewResult> {
        self.get(name)
            .map(|component| component.invoke())
            .ok_or_else(|| NavkitError::ComponentNotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &ComponentName> {
        self.components.keys()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.components.keys()).finish()
    }
}
