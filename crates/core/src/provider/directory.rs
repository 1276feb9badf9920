use crate::error::{NavkitError, Result};
use navkit_api::{FileEntry, FileProvider, ResourcePath};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Serves files from a physical directory.
///
/// Lookups are confined to the root: a path whose canonical location falls
/// outside of it (e.g. through a symlink) is treated as missing.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    name: String,
    root: PathBuf,
}

impl DirectoryProvider {
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = std::fs::canonicalize(root.as_ref())?;
        if !root.is_dir() {
            return Err(NavkitError::Config(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        Ok(Self {
            name: root.display().to_string(),
            root,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn locate(&self, path: &ResourcePath) -> Option<PathBuf> {
        let candidate = path
            .segments()
            .fold(self.root.clone(), |acc, segment| acc.join(segment));
        let resolved = std::fs::canonicalize(&candidate).ok()?;
        if !resolved.starts_with(&self.root) {
            tracing::warn!(
                "Refusing {} from {}: resolves outside the root",
                path,
                self.name
            );
            return None;
        }
        resolved.is_file().then_some(resolved)
    }
}

impl FileProvider for DirectoryProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_file(&self, path: &ResourcePath) -> Option<FileEntry> {
        let location = self.locate(path)?;
        match std::fs::read(&location) {
            Ok(bytes) => Some(FileEntry::new(path.clone(), bytes)),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", location.display(), e);
                None
            }
        }
    }

    fn entries(&self) -> Vec<ResourcePath> {
        let mut entries: Vec<ResourcePath> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let relative = e.path().strip_prefix(&self.root).ok()?;
                ResourcePath::parse(&relative.to_string_lossy()).ok()
            })
            .collect();
        entries.sort();
        entries
    }
}
