use super::content_type::content_type_for;
use navkit_api::{FileEntry, FileProvider, MountPrefix, ResourcePath, StaticFileRegistry};
use std::sync::Arc;

/// A provider reachable under a URL prefix.
#[derive(Debug, Clone)]
pub struct StaticMount {
    pub prefix: MountPrefix,
    pub source: Arc<dyn FileProvider>,
}

/// A static file matched for a request.
#[derive(Debug, Clone)]
pub struct StaticAsset {
    pub mount: MountPrefix,
    pub source: String,
    pub content_type: &'static str,
    pub file: FileEntry,
}

/// Ordered static mounts. Append-only during startup, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StaticFilePipeline {
    mounts: Vec<StaticMount>,
}

impl StaticFilePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounts(&self) -> &[StaticMount] {
        &self.mounts
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    /// Resolve a request path (`/Scripts/Script.js`) against the mounts.
    ///
    /// Returns `None` for paths that do not normalize (traversal, empty) and
    /// for paths no mount can serve.
    pub fn resolve(&self, request_path: &str) -> Option<StaticAsset> {
        let path = match ResourcePath::parse(request_path) {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("Rejected static request {:?}: {}", request_path, e);
                return None;
            }
        };

        self.mounts.iter().find_map(|mount| {
            let relative = mount.prefix.relative_path(&path)?;
            let file = mount.source.get_file(&relative)?;
            tracing::trace!("Static {} served by {} ({})", path, mount.prefix, mount.source.name());
            Some(StaticAsset {
                mount: mount.prefix.clone(),
                source: mount.source.name().to_string(),
                content_type: content_type_for(&relative),
                file,
            })
        })
    }
}

impl StaticFileRegistry for StaticFilePipeline {
    fn mount(&mut self, prefix: MountPrefix, source: Arc<dyn FileProvider>) {
        tracing::debug!(
            "Mounting {} at {} (position {})",
            source.name(),
            prefix,
            self.mounts.len()
        );
        self.mounts.push(StaticMount { prefix, source });
    }
}
