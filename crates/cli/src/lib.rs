mod assets;
mod cat;
mod render;
mod serve;

use clap::{Parser, Subcommand};
use navkit_core::HostConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "navkit",
    version,
    about = "Host and inspect embedded UI component bundles",
    long_about = "navkit assembles a web host from reusable libraries that ship their templates \
                  and static files embedded at build time. Libraries append their bundles to the \
                  host's view sources and static mounts; lookups are first match wins."
)]
pub struct Cli {
    /// JSON config file (bind address, host content and views roots)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP host
    #[command(
        long_about = "Serves registered components under /components/{name} and static files \
                      from every mount. Host content is mounted at / ahead of library mounts."
    )]
    Serve {
        /// Address to bind, e.g. 127.0.0.1:5000
        #[arg(long)]
        bind: Option<String>,
        /// Directory with the host's own static files
        #[arg(long, value_name = "DIR")]
        content_root: Option<PathBuf>,
        /// Directory with the host's own templates
        #[arg(long, value_name = "DIR")]
        views_root: Option<PathBuf>,
    },
    /// Render a component and print its markup
    Render {
        /// Component name, e.g. Nav
        #[arg(value_name = "COMPONENT")]
        component: String,
    },
    /// List view sources, static mounts and their files
    Assets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a static file as the host would serve it
    Cat {
        /// Request path, e.g. /Scripts/Script.js
        #[arg(value_name = "REQUEST_PATH")]
        path: String,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = navkit_runtime::load_config(cli.config.as_deref())?;
    if let Commands::Serve {
        bind,
        content_root,
        views_root,
    } = &cli.command
    {
        apply_overrides(&mut config, bind.clone(), content_root.clone(), views_root.clone());
        config.validate()?;
    }

    // Initialize logging based on command
    let component = match &cli.command {
        Commands::Serve { .. } => "serve",
        _ => "cli",
    };
    let _guard = navkit_runtime::init_logging(component, config.log_to_stderr);

    match cli.command {
        Commands::Serve { .. } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(serve::run(config))
        }
        Commands::Render { component } => render::run(config, &component),
        Commands::Assets { json } => assets::run(config, json),
        Commands::Cat { path } => cat::run(config, &path),
    }
}

fn apply_overrides(
    config: &mut HostConfig,
    bind: Option<String>,
    content_root: Option<PathBuf>,
    views_root: Option<PathBuf>,
) {
    if let Some(bind) = bind {
        config.bind = bind;
    }
    if content_root.is_some() {
        config.content_root = content_root;
    }
    if views_root.is_some() {
        config.views_root = views_root;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let mut config = HostConfig {
            views_root: Some(PathBuf::from("/srv/views")),
            ..HostConfig::default()
        };
        apply_overrides(
            &mut config,
            Some("0.0.0.0:8080".to_string()),
            Some(PathBuf::from("/srv/wwwroot")),
            None,
        );
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.content_root, Some(PathBuf::from("/srv/wwwroot")));
        assert_eq!(config.views_root, Some(PathBuf::from("/srv/views")));
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "navkit",
            "--config",
            "navkit.json",
            "serve",
            "--bind",
            "127.0.0.1:0",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("navkit.json")));
        assert!(matches!(
            cli.command,
            Commands::Serve { bind: Some(ref b), .. } if b == "127.0.0.1:0"
        ));
    }
}
