use super::component::ViewResult;
use super::path::ResourcePath;
use std::fmt::Debug;

/// Maps a render directive to the template paths a view engine should try.
///
/// Implementations must be deterministic: the same directive always yields
/// the same candidates in the same order.
pub trait ViewLocationConvention: Send + Sync + Debug {
    /// Candidate template paths, most specific first.
    fn candidate_paths(&self, result: &ViewResult) -> Vec<ResourcePath>;
}

/// Default component convention: `{root}/{component}/{view}.{extension}`.
///
/// With the defaults the `Nav` component's default slot resolves to
/// `Shared/Components/Nav/Default.html`.
#[derive(Debug, Clone)]
pub struct ComponentViewConvention {
    roots: Vec<String>,
    extension: String,
}

impl ComponentViewConvention {
    pub const DEFAULT_ROOT: &'static str = "Shared/Components";
    pub const DEFAULT_EXTENSION: &'static str = "html";

    pub fn new() -> Self {
        Self {
            roots: vec![Self::DEFAULT_ROOT.to_string()],
            extension: Self::DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Replace the search roots. Roots are tried in the given order.
    pub fn with_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension: String = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Default for ComponentViewConvention {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLocationConvention for ComponentViewConvention {
    fn candidate_paths(&self, result: &ViewResult) -> Vec<ResourcePath> {
        let file = if self.extension.is_empty() {
            result.view_name().to_string()
        } else {
            format!("{}.{}", result.view_name(), self.extension)
        };

        self.roots
            .iter()
            .filter_map(|root| {
                // A view name that tries to climb out of its folder yields no candidate
                ResourcePath::parse(&format!("{}/{}/{}", root, result.component, file)).ok()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::component::ComponentName;

    fn nav() -> ComponentName {
        ComponentName::new("Nav").unwrap()
    }

    #[test]
    fn test_default_location() {
        let convention = ComponentViewConvention::default();
        let paths = convention.candidate_paths(&ViewResult::default_view(nav()));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].as_str(), "Shared/Components/Nav/Default.html");
    }

    #[test]
    fn test_overridden_roots_and_extension() {
        let convention = ComponentViewConvention::new()
            .with_roots(["Home/Components", "Shared/Components"])
            .with_extension(".cshtml");
        let paths = convention.candidate_paths(&ViewResult::named(nav(), "Compact"));
        let paths: Vec<&str> = paths.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "Home/Components/Nav/Compact.cshtml",
                "Shared/Components/Nav/Compact.cshtml"
            ]
        );
    }

    #[test]
    fn test_traversing_view_name_is_dropped() {
        let convention = ComponentViewConvention::default();
        let paths = convention.candidate_paths(&ViewResult::named(nav(), "../../secret"));
        assert!(paths.is_empty());
    }
}
