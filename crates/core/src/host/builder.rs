use super::Host;
use crate::config::HostConfig;
use crate::error::Result;
use crate::provider::DirectoryProvider;
use crate::static_files::StaticFilePipeline;
use crate::view::ServiceCollection;
use navkit_api::{ApiResult, MountPrefix, StaticFileRegistry, ViewSourceRegistry};
use std::sync::Arc;

/// Mutable host under construction.
///
/// Registration happens in two phases mirroring a web host's startup:
/// [`configure_services`](Self::configure_services) for view sources and
/// components, then [`configure`](Self::configure) for the static pipeline.
pub struct HostBuilder {
    config: HostConfig,
    services: ServiceCollection,
    pipeline: StaticFilePipeline,
}

impl HostBuilder {
    /// A builder with no sources or mounts at all.
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            services: ServiceCollection::new(),
            pipeline: StaticFilePipeline::new(),
        }
    }

    /// A builder that already holds the host's own views and static content.
    ///
    /// The views root becomes the first view source and the content root the
    /// first mount (at `/`), so anything a library registers later comes
    /// after the host.
    pub fn from_config(config: HostConfig) -> Result<Self> {
        let mut builder = Self::new(config);

        if let Some(views_root) = builder.config.views_root.clone() {
            let provider = DirectoryProvider::new(&views_root)?.with_name("host views");
            tracing::info!("Host views root: {}", provider.root().display());
            builder.services.add_view_source(Arc::new(provider));
        }

        if let Some(content_root) = builder.config.content_root.clone() {
            let provider = DirectoryProvider::new(&content_root)?.with_name("host content");
            tracing::info!("Host content root: {}", provider.root().display());
            builder.pipeline.mount(MountPrefix::root(), Arc::new(provider));
        }

        Ok(builder)
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Run a service registration step, e.g. a library's view registrar.
    pub fn configure_services<F>(mut self, configure: F) -> Result<Self>
    where
        F: FnOnce(&mut ServiceCollection) -> ApiResult<()>,
    {
        configure(&mut self.services)?;
        Ok(self)
    }

    /// Run a pipeline registration step, e.g. a library's static registrar.
    pub fn configure<F>(mut self, configure: F) -> Result<Self>
    where
        F: FnOnce(&mut StaticFilePipeline) -> ApiResult<()>,
    {
        configure(&mut self.pipeline)?;
        Ok(self)
    }

    pub fn build(self) -> Host {
        let (views, components) = self.services.into_parts();
        tracing::info!(
            "Host built: {} view source(s), {} component(s), {} static mount(s)",
            views.sources().len(),
            components.len(),
            self.pipeline.len()
        );
        Host::from_parts(self.config, views, components, self.pipeline)
    }
}
