use navkit_core::{Host, HostBuilder, HostConfig};
use std::path::Path;

pub use navkit_core::{NavkitError, Result};

/// Bootstraps a host with every bundled library registered.
///
/// The host's own views and content (from `config`) are registered first,
/// then each library's views during service configuration and its static
/// files during pipeline configuration.
pub fn build_default_host(config: HostConfig) -> Result<Host> {
    let host = HostBuilder::from_config(config)?
        .configure_services(|services| navkit_nav::add_nav_views(services))?
        .configure(|pipeline| navkit_nav::use_nav_static_files(pipeline))?
        .build();
    Ok(host)
}

/// Load a config file if given, otherwise start from defaults.
pub fn load_config(path: Option<&Path>) -> Result<HostConfig> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            HostConfig::load(path)
        }
        None => Ok(HostConfig::default()),
    }
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    navkit_core::logging::init_logging(component, to_stderr)
}
