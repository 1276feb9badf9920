use navkit_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavkitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Component not found: {0}")]
    ComponentNotFound(String),
    #[error("View for component {component} not found; searched: {}", .searched.join(", "))]
    ViewNotFound {
        component: String,
        searched: Vec<String>,
    },
    #[error("Template error: {0}")]
    Template(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NavkitError {
    /// Misses that a host reports as "not found" rather than as a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NavkitError::ComponentNotFound(_) | NavkitError::ViewNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NavkitError>;
