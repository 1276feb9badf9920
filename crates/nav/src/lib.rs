//! Navigation component packaged with its template and script.
//!
//! The library embeds two resource bundles at build time:
//! - `assets/views`: templates, resolved through the host's view sources
//! - `assets/scripts`: static files, served under [`SCRIPTS_MOUNT`]
//!
//! A host wires both in during startup:
//!
//! ```ignore
//! let host = HostBuilder::from_config(config)?
//!     .configure_services(navkit_nav::add_nav_views)?
//!     .configure(navkit_nav::use_nav_static_files)?
//!     .build();
//! ```

mod component;
mod registrar;

pub use component::NavComponent;
pub use registrar::{
    SCRIPTS_MOUNT, add_nav_views, scripts_bundle, use_nav_static_files, views_bundle,
};

mod manifest {
    include!(concat!(env!("OUT_DIR"), "/nav_views.rs"));
    include!(concat!(env!("OUT_DIR"), "/nav_scripts.rs"));
}
