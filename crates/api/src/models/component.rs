use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Template slot used when a component does not pick a view explicitly.
pub const DEFAULT_VIEW_NAME: &str = "Default";

/// Type-name suffixes dropped when deriving a component name.
const COMPONENT_SUFFIXES: [&str; 2] = ["ViewComponent", "Component"];

/// Name under which a host requests rendering of a component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: impl Into<String>) -> ApiResult<Self> {
        let name = name.into();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(ApiError::InvalidArgument(format!(
                "invalid component name: {:?}",
                name
            )));
        }
        Ok(Self(name))
    }

    /// Derive the name from a type name: `NavComponent` becomes `Nav`,
    /// `MenuViewComponent` becomes `Menu`. A bare suffix is kept as-is.
    pub fn from_type_name(type_name: &str) -> ApiResult<Self> {
        // Accept `std::any::type_name` output as well
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        let stripped = COMPONENT_SUFFIXES
            .iter()
            .find_map(|suffix| short.strip_suffix(suffix).filter(|s| !s.is_empty()))
            .unwrap_or(short);
        Self::new(stripped)
    }

    /// Name from a compile-time literal that is known to be valid.
    pub fn from_static(name: &'static str) -> Self {
        debug_assert!(Self::new(name).is_ok(), "invalid component name {:?}", name);
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ComponentName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ComponentName {
    type Error = ApiError;

    fn try_from(value: String) -> ApiResult<Self> {
        Self::new(value)
    }
}

impl From<ComponentName> for String {
    fn from(value: ComponentName) -> Self {
        value.0
    }
}

/// Render directive returned by a component invocation.
///
/// Points at a template by convention and carries no model data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewResult {
    pub component: ComponentName,
    pub view_name: Option<String>,
}

impl ViewResult {
    /// Directive for the component's default template slot.
    pub fn default_view(component: ComponentName) -> Self {
        Self {
            component,
            view_name: None,
        }
    }

    pub fn named(component: ComponentName, view_name: impl Into<String>) -> Self {
        Self {
            component,
            view_name: Some(view_name.into()),
        }
    }

    /// The template slot, falling back to [`DEFAULT_VIEW_NAME`].
    pub fn view_name(&self) -> &str {
        self.view_name.as_deref().unwrap_or(DEFAULT_VIEW_NAME)
    }
}
