//! Host application assembly.
//!
//! ```text
//! HostBuilder::from_config ── host views root ──▶ ServiceCollection ─┐
//!        │                 └─ host content root ─▶ StaticFilePipeline ┤
//!        │                                                            │
//!  library registrars (append only) ──────────────────────────────────┤
//!        ▼                                                            ▼
//!   build() ─────────────────────────────▶ Host (Arc, read-only) ─▶ axum Router
//! ```

pub mod builder;
pub mod router;

pub use builder::HostBuilder;
pub use router::router;

use crate::component::ComponentRegistry;
use crate::config::HostConfig;
use crate::error::Result;
use crate::static_files::{StaticAsset, StaticFilePipeline, StaticMount};
use crate::view::{RenderedView, ViewEngine};
use navkit_api::FileProvider;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// A built host. Cheap to clone; every clone shares the same frozen state.
#[derive(Debug, Clone)]
pub struct Host {
    inner: Arc<HostInner>,
}

#[derive(Debug)]
struct HostInner {
    config: HostConfig,
    views: ViewEngine,
    components: ComponentRegistry,
    statics: StaticFilePipeline,
}

impl Host {
    pub(crate) fn from_parts(
        config: HostConfig,
        views: ViewEngine,
        components: ComponentRegistry,
        statics: StaticFilePipeline,
    ) -> Self {
        Self {
            inner: Arc::new(HostInner {
                config,
                views,
                components,
                statics,
            }),
        }
    }

    pub fn config(&self) -> &HostConfig {
        &self.inner.config
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.inner.components
    }

    pub fn view_sources(&self) -> &[Arc<dyn FileProvider>] {
        self.inner.views.sources()
    }

    pub fn mounts(&self) -> &[StaticMount] {
        self.inner.statics.mounts()
    }

    /// Invoke a component and render its template.
    pub fn render_component(&self, name: &str) -> Result<RenderedView> {
        let directive = self.inner.components.invoke(name)?;
        self.inner.views.render(&directive)
    }

    pub fn resolve_static(&self, request_path: &str) -> Option<StaticAsset> {
        self.inner.statics.resolve(request_path)
    }

    pub fn router(&self) -> axum::Router {
        router(self.clone())
    }

    /// Serve HTTP on `listener` until `cancel_token` fires.
    pub async fn serve(&self, listener: TcpListener, cancel_token: CancellationToken) -> Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!("navkit host listening on http://{}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                cancel_token.cancelled().await;
            })
            .await?;

        tracing::info!("navkit host on {} stopped", addr);
        Ok(())
    }
}
