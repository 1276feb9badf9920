use super::Host;
use crate::error::NavkitError;
use crate::static_files::StaticAsset;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use axum::{Router, routing::get};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// HTTP surface of a host.
///
/// - `GET /components/{name}` renders a registered component; a name that is
///   not registered falls through to the static pipeline
/// - any other `GET`/`HEAD` is answered by the static pipeline
pub fn router(host: Host) -> Router {
    Router::new()
        .route("/components/{name}", get(render_component))
        .fallback(serve_static)
        .with_state(host)
}

pub async fn render_component(
    State(host): State<Host>,
    Path(name): Path<String>,
    method: Method,
    uri: Uri,
) -> Response {
    match host.render_component(&name) {
        Ok(view) => Html(view.markup).into_response(),
        // `/components/app.js` may be a host file
        Err(NavkitError::ComponentNotFound(_)) => serve_static(State(host), method, uri).await,
        Err(e) if e.is_not_found() => {
            tracing::debug!("Render miss for {}: {}", name, e);
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to render component {}: {}", name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

pub async fn serve_static(State(host): State<Host>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path = match percent_decode_str(uri.path()).decode_utf8() {
        Ok(path) => path.into_owned(),
        Err(e) => {
            tracing::debug!("Rejected static request {}: {}", uri.path(), e);
            return (StatusCode::NOT_FOUND, "Not Found").into_response();
        }
    };
    // Directory providers read from disk
    let lookup = tokio::task::spawn_blocking(move || host.resolve_static(&path)).await;

    match lookup {
        Ok(Some(asset)) => asset_response(asset),
        Ok(None) => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        Err(e) => {
            tracing::error!("Static lookup for {} panicked: {}", uri.path(), e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn asset_response(asset: StaticAsset) -> Response {
    let body = match asset.file.contents {
        Cow::Borrowed(bytes) => Body::from(bytes),
        Cow::Owned(bytes) => Body::from(bytes),
    };
    ([(header::CONTENT_TYPE, asset.content_type)], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostConfig;
    use crate::host::HostBuilder;
    use navkit_api::{
        ComponentName, EmbeddedBundle, Manifest, MountPrefix, StaticFileRegistry, ViewComponent,
        ViewResult, ViewSourceRegistry,
    };
    use std::fs;
    use std::sync::Arc;

    static VIEWS: Manifest = &[("Shared/Components/Nav/Default.html", b"<nav>x</nav>")];
    static SCRIPTS: Manifest = &[("Script.js", b"alert(1);")];

    struct Nav;

    impl ViewComponent for Nav {
        fn name(&self) -> ComponentName {
            ComponentName::new("Nav").unwrap()
        }

        fn invoke(&self) -> ViewResult {
            ViewResult::default_view(self.name())
        }
    }

    struct Orphan;

    impl ViewComponent for Orphan {
        fn name(&self) -> ComponentName {
            ComponentName::new("Orphan").unwrap()
        }

        fn invoke(&self) -> ViewResult {
            ViewResult::default_view(self.name())
        }
    }

    fn host() -> Host {
        with_host_content(HostBuilder::new(HostConfig::default()))
    }

    fn with_host_content(builder: HostBuilder) -> Host {
        builder
            .configure_services(|services| {
                services.add_view_source(Arc::new(EmbeddedBundle::from_manifest("views", VIEWS)?));
                services.add_component(Arc::new(Nav));
                services.add_component(Arc::new(Orphan));
                Ok(())
            })
            .unwrap()
            .configure(|pipeline| {
                pipeline.mount(
                    MountPrefix::parse("/Scripts")?,
                    Arc::new(EmbeddedBundle::from_manifest("scripts", SCRIPTS)?),
                );
                Ok(())
            })
            .unwrap()
            .build()
    }

    async fn body_of(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn render(host: Host, name: &str) -> Response {
        let uri: Uri = format!("/components/{}", name).parse().unwrap();
        render_component(State(host), Path(name.to_string()), Method::GET, uri).await
    }

    #[tokio::test]
    async fn test_render_component_handler() {
        let response = render(host(), "Nav").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert_eq!(body_of(response).await, b"<nav>x</nav>");
    }

    #[tokio::test]
    async fn test_render_misses_are_404() {
        let unknown = render(host(), "Footer").await;
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

        let no_template = render(host(), "Orphan").await;
        assert_eq!(no_template.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_handler() {
        let uri: Uri = "/Scripts/Script.js".parse().unwrap();
        let response = serve_static(State(host()), Method::GET, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/javascript; charset=utf-8"
        );
        assert_eq!(body_of(response).await, b"alert(1);");

        let missing: Uri = "/Scripts/Missing.js".parse().unwrap();
        let response = serve_static(State(host()), Method::GET, missing).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_rejects_writes() {
        let uri: Uri = "/Scripts/Script.js".parse().unwrap();
        let response = serve_static(State(host()), Method::POST, uri).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_component_falls_through_to_host_files() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("components")).unwrap();
        fs::write(temp.path().join("components/app.js"), "boot();").unwrap();
        let config = HostConfig {
            content_root: Some(temp.path().to_path_buf()),
            ..HostConfig::default()
        };
        let host = with_host_content(HostBuilder::from_config(config).unwrap());

        let response = render(host.clone(), "app.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/javascript; charset=utf-8"
        );
        assert_eq!(body_of(response).await, b"boot();");

        // A registered component still wins over a file of the same name
        fs::write(temp.path().join("components/Nav"), "file").unwrap();
        let response = render(host, "Nav").await;
        assert_eq!(body_of(response).await, b"<nav>x</nav>");
    }

    #[tokio::test]
    async fn test_static_paths_are_percent_decoded() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("my file.js"), "spaced();").unwrap();
        fs::write(temp.path().join("secret.txt"), "hidden").unwrap();
        let config = HostConfig {
            content_root: Some(temp.path().to_path_buf()),
            ..HostConfig::default()
        };
        let host = with_host_content(HostBuilder::from_config(config).unwrap());

        let uri: Uri = "/my%20file.js".parse().unwrap();
        let response = serve_static(State(host.clone()), Method::GET, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_of(response).await, b"spaced();");

        let traversal: Uri = "/Scripts/%2e%2e/secret.txt".parse().unwrap();
        let response = serve_static(State(host.clone()), Method::GET, traversal).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let invalid_utf8: Uri = "/my%FFfile.js".parse().unwrap();
        let response = serve_static(State(host), Method::GET, invalid_utf8).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
