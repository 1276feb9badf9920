use crate::component::NavComponent;
use crate::manifest::{NAV_SCRIPTS, NAV_VIEWS};
use navkit_api::{
    ApiResult, EmbeddedBundle, MountPrefix, StaticFileRegistry, ViewSourceRegistry,
};
use std::sync::Arc;

/// URL prefix the script bundle is mounted on.
pub const SCRIPTS_MOUNT: &str = "/Scripts";

pub fn views_bundle() -> ApiResult<EmbeddedBundle> {
    EmbeddedBundle::from_manifest("navkit-nav views", NAV_VIEWS)
}

pub fn scripts_bundle() -> ApiResult<EmbeddedBundle> {
    EmbeddedBundle::from_manifest("navkit-nav scripts", NAV_SCRIPTS)
}

/// Append the library's templates to the host's view sources and register
/// [`NavComponent`].
///
/// Existing sources keep precedence. Calling this twice appends the bundle
/// twice but renders the same markup.
pub fn add_nav_views<R>(registry: &mut R) -> ApiResult<()>
where
    R: ViewSourceRegistry + ?Sized,
{
    let bundle = views_bundle()?;
    tracing::debug!("Registering nav views ({} file(s))", bundle.len());
    registry.add_view_source(Arc::new(bundle));
    registry.add_component(Arc::new(NavComponent::new()));
    Ok(())
}

/// Mount the library's scripts at [`SCRIPTS_MOUNT`].
///
/// Call after the host's own static mounts so host files are not shadowed.
pub fn use_nav_static_files<R>(registry: &mut R) -> ApiResult<()>
where
    R: StaticFileRegistry + ?Sized,
{
    let bundle = scripts_bundle()?;
    tracing::debug!(
        "Mounting nav scripts ({} file(s)) at {}",
        bundle.len(),
        SCRIPTS_MOUNT
    );
    registry.mount(MountPrefix::parse(SCRIPTS_MOUNT)?, Arc::new(bundle));
    Ok(())
}
