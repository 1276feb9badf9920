use crate::models::path::ResourcePath;
use std::borrow::Cow;
use std::fmt::Debug;

/// A file returned by a [`FileProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: ResourcePath,
    pub contents: Cow<'static, [u8]>,
}

impl FileEntry {
    pub fn new(path: ResourcePath, contents: impl Into<Cow<'static, [u8]>>) -> Self {
        Self {
            path,
            contents: contents.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Read-only source of files addressed by relative path.
///
/// Providers are shared between request tasks, so lookups take `&self` and
/// must not block on anything but local I/O.
pub trait FileProvider: Send + Sync + Debug {
    /// Human-readable label used in logs and listings.
    fn name(&self) -> &str;

    /// Look up a single file. `None` means the provider does not have it.
    fn get_file(&self, path: &ResourcePath) -> Option<FileEntry>;

    /// Every path this provider can serve, sorted.
    fn entries(&self) -> Vec<ResourcePath>;

    fn contains(&self, path: &ResourcePath) -> bool {
        self.get_file(path).is_some()
    }
}
