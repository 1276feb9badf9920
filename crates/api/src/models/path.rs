use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized, relative resource path.
///
/// Segments are separated by `/`, there is no leading separator and no empty,
/// `.` or `..` segment. Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Parse a raw path (`/Scripts//Script.js`, `Shared\\Nav.html`, ...).
    ///
    /// Backslashes are treated as separators. A `..` segment is rejected
    /// instead of resolved, so a parsed path can never leave its root.
    pub fn parse(raw: &str) -> ApiResult<Self> {
        let segments = normalized_segments(raw)?;
        if segments.is_empty() {
            return Err(ApiError::InvalidArgument(format!(
                "empty resource path: {:?}",
                raw
            )));
        }
        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Last segment of the path.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Extension of the last segment, without the dot.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ResourcePath {
    type Error = ApiError;

    fn try_from(value: String) -> ApiResult<Self> {
        Self::parse(&value)
    }
}

impl From<ResourcePath> for String {
    fn from(value: ResourcePath) -> Self {
        value.0
    }
}

/// URL path segment under which a static bundle becomes reachable.
///
/// Stored without leading or trailing `/`; the empty prefix is the root mount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MountPrefix(String);

impl MountPrefix {
    pub fn parse(raw: &str) -> ApiResult<Self> {
        Ok(Self(normalized_segments(raw)?.join("/")))
    }

    /// The mount covering every request path.
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Strip this prefix from a request path.
    ///
    /// Matches only on segment boundaries: `/Scripts` covers `/Scripts/a.js`
    /// but neither `/ScriptsX/a.js` nor `/Scripts` itself.
    pub fn relative_path(&self, request: &ResourcePath) -> Option<ResourcePath> {
        if self.is_root() {
            return Some(request.clone());
        }
        let rest = request.as_str().strip_prefix(self.0.as_str())?;
        let rest = rest.strip_prefix('/')?;
        // `request` is already normalized, so any non-empty tail is too
        (!rest.is_empty()).then(|| ResourcePath(rest.to_string()))
    }
}

impl fmt::Display for MountPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

impl TryFrom<String> for MountPrefix {
    type Error = ApiError;

    fn try_from(value: String) -> ApiResult<Self> {
        Self::parse(&value)
    }
}

impl From<MountPrefix> for String {
    fn from(value: MountPrefix) -> Self {
        value.to_string()
    }
}

fn normalized_segments(raw: &str) -> ApiResult<Vec<&str>> {
    let mut segments = Vec::new();
    for segment in raw.split(['/', '\\']) {
        match segment {
            "" | "." => continue,
            ".." => {
                return Err(ApiError::InvalidArgument(format!(
                    "path escapes its root: {:?}",
                    raw
                )));
            }
            s => segments.push(s),
        }
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_separators() {
        let path = ResourcePath::parse("/Shared//Components\\Nav/./Default.html").unwrap();
        assert_eq!(path.as_str(), "Shared/Components/Nav/Default.html");
        assert_eq!(path.file_name(), "Default.html");
        assert_eq!(path.extension(), Some("html"));
    }

    #[test]
    fn test_parse_rejects_traversal_and_empty() {
        assert!(ResourcePath::parse("Scripts/../secret.txt").is_err());
        assert!(ResourcePath::parse("/").is_err());
        assert!(ResourcePath::parse("").is_err());
    }

    #[test]
    fn test_extension_edge_cases() {
        assert_eq!(ResourcePath::parse(".gitignore").unwrap().extension(), None);
        assert_eq!(ResourcePath::parse("Makefile").unwrap().extension(), None);
        assert_eq!(
            ResourcePath::parse("lib/app.min.js").unwrap().extension(),
            Some("js")
        );
    }

    #[test]
    fn test_mount_prefix_segment_boundary() {
        let prefix = MountPrefix::parse("/Scripts/").unwrap();
        assert_eq!(prefix.to_string(), "/Scripts");

        let hit = ResourcePath::parse("/Scripts/lib/Script.js").unwrap();
        assert_eq!(
            prefix.relative_path(&hit).unwrap().as_str(),
            "lib/Script.js"
        );

        let sibling = ResourcePath::parse("/ScriptsX/Script.js").unwrap();
        assert!(prefix.relative_path(&sibling).is_none());

        let bare = ResourcePath::parse("/Scripts").unwrap();
        assert!(prefix.relative_path(&bare).is_none());
    }

    #[test]
    fn test_root_mount_covers_everything() {
        let root = MountPrefix::parse("/").unwrap();
        assert!(root.is_root());
        assert_eq!(root, MountPrefix::root());
        assert_eq!(root.to_string(), "/");

        let path = ResourcePath::parse("css/site.css").unwrap();
        assert_eq!(root.relative_path(&path), Some(path));
    }

    #[test]
    fn test_mount_prefix_is_case_sensitive() {
        let prefix = MountPrefix::parse("Scripts").unwrap();
        let path = ResourcePath::parse("scripts/Script.js").unwrap();
        assert!(prefix.relative_path(&path).is_none());
    }
}
