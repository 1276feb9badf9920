//! Build-time embedded resource bundles.
//!
//! A bundle is created from a manifest generated by `navkit-build`: a static
//! slice of `(relative path, bytes)` pairs compiled into the library. The
//! bundle never changes after construction and can be read from any thread.

use crate::error::{ApiError, ApiResult};
use crate::models::path::ResourcePath;
use crate::provider::{FileEntry, FileProvider};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Manifest layout emitted by the build step.
pub type Manifest = &'static [(&'static str, &'static [u8])];

#[derive(Debug, Clone)]
pub struct EmbeddedBundle {
    name: String,
    files: BTreeMap<ResourcePath, &'static [u8]>,
}

impl EmbeddedBundle {
    /// Build a bundle from a manifest, normalizing every path.
    ///
    /// Fails when a path is invalid or when two manifest entries normalize to
    /// the same path.
    pub fn from_manifest(name: impl Into<String>, manifest: Manifest) -> ApiResult<Self> {
        let name = name.into();
        let mut files = BTreeMap::new();

        for (raw, bytes) in manifest {
            let path = ResourcePath::parse(raw)?;
            match files.entry(path) {
                Entry::Vacant(slot) => {
                    slot.insert(*bytes);
                }
                Entry::Occupied(slot) => {
                    return Err(ApiError::DuplicatePath {
                        bundle: name,
                        path: slot.key().to_string(),
                    });
                }
            }
        }

        Ok(Self { name, files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, path: &ResourcePath) -> Option<&'static [u8]> {
        self.files.get(path).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResourcePath, &'static [u8])> {
        self.files.iter().map(|(path, bytes)| (path, *bytes))
    }
}

impl FileProvider for EmbeddedBundle {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_file(&self, path: &ResourcePath) -> Option<FileEntry> {
        self.get(path).map(|bytes| FileEntry::new(path.clone(), bytes))
    }

    fn entries(&self) -> Vec<ResourcePath> {
        self.files.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static MANIFEST: Manifest = &[
        ("Shared/Components/Nav/Default.html", b"<nav></nav>"),
        ("Script.js", b"console.log('nav');"),
    ];

    #[test]
    fn test_lookup_and_enumeration() {
        let bundle = EmbeddedBundle::from_manifest("nav", MANIFEST).unwrap();
        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.name(), "nav");

        let script = ResourcePath::parse("Script.js").unwrap();
        let entry = bundle.get_file(&script).unwrap();
        assert_eq!(entry.contents.as_ref(), b"console.log('nav');");

        let listed: Vec<String> = bundle.entries().into_iter().map(String::from).collect();
        assert_eq!(listed, vec!["Script.js", "Shared/Components/Nav/Default.html"]);

        assert!(!bundle.contains(&ResourcePath::parse("Missing.js").unwrap()));
    }

    #[test]
    fn test_paths_are_normalized() {
        static RAW: Manifest = &[("\\Scripts\\Script.js", b"x")];
        let bundle = EmbeddedBundle::from_manifest("raw", RAW).unwrap();
        assert!(bundle.get(&ResourcePath::parse("Scripts/Script.js").unwrap()).is_some());
    }

    #[test]
    fn test_duplicate_paths_are_rejected() {
        static DUP: Manifest = &[("a/b.js", b"1"), ("a//b.js", b"2")];
        let err = EmbeddedBundle::from_manifest("dup", DUP).unwrap_err();
        assert!(matches!(err, ApiError::DuplicatePath { ref path, .. } if path == "a/b.js"));
    }

    #[test]
    fn test_empty_manifest() {
        let bundle = EmbeddedBundle::from_manifest("empty", &[]).unwrap();
        assert!(bundle.is_empty());
        assert!(bundle.entries().is_empty());
    }
}
