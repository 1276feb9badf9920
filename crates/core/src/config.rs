use crate::error::{NavkitError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Host settings, loaded from a JSON file. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Address the HTTP server binds to.
    pub bind: String,
    /// Host's own static content, mounted at `/` ahead of library mounts.
    pub content_root: Option<PathBuf>,
    /// Host's own templates, searched before library view bundles.
    pub views_root: Option<PathBuf>,
    pub log_to_stderr: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            content_root: None,
            views_root: None,
            log_to_stderr: true,
        }
    }
}

impl HostConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut config = Self::from_json_str(&raw)?;

        // Relative roots are taken relative to the config file
        if let Some(base) = path.parent() {
            config.content_root = config.content_root.map(|p| rebase(base, p));
            config.views_root = config.views_root.map(|p| rebase(base, p));
        }
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr().map(|_| ())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| NavkitError::Config(format!("invalid bind address {:?}: {}", self.bind, e)))
    }
}

fn rebase(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}
