use crate::error::{NavkitError, Result};
use navkit_api::{
    ComponentName, ComponentViewConvention, FileEntry, FileProvider, ResourcePath,
    ViewLocationConvention, ViewResult,
};
use serde::Serialize;
use std::sync::Arc;

/// A template located for a render directive.
#[derive(Debug, Clone)]
pub struct ResolvedView {
    pub template: ResourcePath,
    /// Name of the source that supplied the template.
    pub source: String,
    pub file: FileEntry,
}

/// Markup produced for a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    pub component: ComponentName,
    pub template: ResourcePath,
    pub source: String,
    pub markup: String,
}

/// Immutable template resolver over an ordered list of view sources.
#[derive(Debug, Clone)]
pub struct ViewEngine {
    sources: Vec<Arc<dyn FileProvider>>,
    convention: Arc<dyn ViewLocationConvention>,
}

impl ViewEngine {
    pub fn new(
        sources: Vec<Arc<dyn FileProvider>>,
        convention: Arc<dyn ViewLocationConvention>,
    ) -> Self {
        Self {
            sources,
            convention,
        }
    }

    pub fn with_default_convention(sources: Vec<Arc<dyn FileProvider>>) -> Self {
        Self::new(sources, Arc::new(ComponentViewConvention::default()))
    }

    pub fn sources(&self) -> &[Arc<dyn FileProvider>] {
        &self.sources
    }

    /// Locate the template for `result`.
    ///
    /// Candidates are tried in convention order; for each candidate the
    /// sources are tried in registration order.
    pub fn find_view(&self, result: &ViewResult) -> Result<ResolvedView> {
        let candidates = self.convention.candidate_paths(result);

        for candidate in &candidates {
            for source in &self.sources {
                if let Some(file) = source.get_file(candidate) {
                    tracing::debug!(
                        "Resolved view {} for {} from {}",
                        candidate,
                        result.component,
                        source.name()
                    );
                    return Ok(ResolvedView {
                        template: candidate.clone(),
                        source: source.name().to_string(),
                        file,
                    });
                }
            }
        }

        Err(NavkitError::ViewNotFound {
            component: result.component.to_string(),
            searched: candidates.iter().map(|c| c.to_string()).collect(),
        })
    }

    /// Resolve and render a directive. Templates carry no model, so the
    /// rendered markup is the template text itself.
    pub fn render(&self, result: &ViewResult) -> Result<RenderedView> {
        let view = self.find_view(result)?;
        let markup = String::from_utf8(view.file.contents.into_owned()).map_err(|e| {
            NavkitError::Template(format!("{} is not valid UTF-8: {}", view.template, e))
        })?;

        Ok(RenderedView {
            component: result.component.clone(),
            template: view.template,
            source: view.source,
            markup,
        })
    }
}
