use std::path::Path;

use axum::{
    Router,
    extract::Request,
    handler::Handler,
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;

use crate::routes;
use crate::state::AppState;

pub(crate) const BOUNDARY_ROUTE: &str = "/geo";

pub(crate) fn build_app(state: AppState) -> Router {
    let static_assets = ServeDir::new(&state.client_dist_dir)
        .precompressed_br()
        .precompressed_gzip()
        .fallback(routes::page::spa_fallback.with_state(state.clone()));

    let boundaries = ServeDir::new(&state.boundary_dir).precompressed_gzip();

    Router::new()
        .route("/", get(routes::page::index))
        .route("/index.html", get(routes::page::index))
        .route("/api/health", get(routes::api::health))
        .nest_service(BOUNDARY_ROUTE, boundaries)
        .fallback_service(static_assets)
        .layer(middleware::from_fn(set_static_cache_control))
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn set_static_cache_control(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if response.status().is_success()
        && let Some(cache_control) = cache_control_for_path(&path)
    {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(cache_control),
        );
    }

    response
}

fn cache_control_for_path(path: &str) -> Option<&'static str> {
    if is_hashed_bundle_asset(path) {
        return Some("public, max-age=31536000, immutable");
    }

    if path
        .strip_prefix(BOUNDARY_ROUTE)
        .is_some_and(|rest| rest.starts_with('/'))
    {
        return Some("public, max-age=86400");
    }

    None
}

fn is_hashed_bundle_asset(path: &str) -> bool {
    let Some(ext) = Path::new(path).extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    if !matches!(ext, "wasm" | "js" | "css") {
        return false;
    }

    let Some(filename) = Path::new(path).file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    filename
        .split(['-', '_', '.'])
        .any(|segment| segment.len() >= 8 && segment.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::body::Body;
    use axum::http::{HeaderMap, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::META_MARKER;

    const HASHED_WASM: &str = "prefmap-client-71578f6b278221f3_bg.wasm";

    fn fixture_dir(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("prefmap-app-{}-{name}", std::process::id()));
        let geo = root.join("geo");
        std::fs::create_dir_all(&geo).expect("create fixture dirs");
        std::fs::write(
            geo.join("usa.json"),
            r#"{"type":"FeatureCollection","features":[]}"#,
        )
        .expect("write boundary fixture");
        std::fs::write(root.join(HASHED_WASM), b"\0asm").expect("write wasm fixture");
        root
    }

    fn test_app(name: &str) -> Router {
        let root = fixture_dir(name);
        let template = format!("<html><head>{META_MARKER}</head><body></body></html>");
        let state = AppState::new(
            template,
            "https://example.test",
            root.clone(),
            root.join("geo"),
        );
        build_app(state)
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build request");
        let response = app.oneshot(request).await.expect("router response");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, headers, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[test]
    fn immutable_cache_for_hashed_bundle_assets() {
        assert_eq!(
            cache_control_for_path("/prefmap-client-71578f6b278221f3_bg.wasm"),
            Some("public, max-age=31536000, immutable")
        );
        assert_eq!(
            cache_control_for_path("/index-a93762ff3bf6d63a.css"),
            Some("public, max-age=31536000, immutable")
        );
    }

    #[test]
    fn day_cache_for_boundaries() {
        assert_eq!(
            cache_control_for_path("/geo/usa.json"),
            Some("public, max-age=86400")
        );
        assert_eq!(cache_control_for_path("/geography"), None);
    }

    #[test]
    fn no_cache_header_override_for_html() {
        assert_eq!(cache_control_for_path("/"), None);
        assert_eq!(cache_control_for_path("/index.html"), None);
    }

    #[tokio::test]
    async fn health_lists_map_types() {
        let (status, _, body) = fetch(test_app("health"), "/api/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).expect("health json");
        assert_eq!(json["status"], "ok");
        let maps = json["maps"].as_array().expect("maps array");
        assert_eq!(maps.len(), 6);
        assert_eq!(maps[0], "USA");
    }

    #[tokio::test]
    async fn root_serves_index_with_preview_tags() {
        let (status, headers, body) = fetch(test_app("root"), "/?map=Japan").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Japan Living Preference Map</title>"));
        assert!(!body.contains(META_MARKER));
        assert_eq!(headers[header::CACHE_CONTROL], "no-cache");
    }

    #[tokio::test]
    async fn deep_links_get_the_app_and_missing_files_404() {
        let (status, _, body) = fetch(test_app("deep"), "/share").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Living Preference Map"));

        let (status, _, _) = fetch(test_app("missing"), "/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn static_files_carry_cache_headers() {
        let (status, headers, body) = fetch(test_app("geo"), "/geo/usa.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("FeatureCollection"));
        assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=86400");

        let (status, headers, _) = fetch(test_app("wasm"), &format!("/{HASHED_WASM}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CACHE_CONTROL],
            "public, max-age=31536000, immutable"
        );
    }
}
