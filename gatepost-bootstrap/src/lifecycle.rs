use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

use gatepost_application::commands::load_commands::load_dashboard;
use gatepost_domain::RuntimeConfig;
use gatepost_interfaces_http::build_router;

use crate::context::AppContext;

/// Wraps the API router with the server-wide middleware. Tracing wraps
/// every other layer.
pub fn with_http_layers(router: Router, config: &RuntimeConfig) -> Router {
    let body_limit = usize::try_from(config.max_body_bytes).unwrap_or(usize::MAX);
    router
        .layer(dashboard_cors())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_seconds,
        )))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

fn dashboard_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
}

pub async fn run_standalone() -> Result<()> {
    let AppContext { state } = AppContext::new().await?;

    match load_dashboard(&state).await {
        Ok(()) => info!("initial dashboard load complete"),
        Err(err) => warn!("initial dashboard load failed, serving until refresh: {}", err),
    }

    let addr: SocketAddr = state.config.bind_addr.parse()?;
    let app = with_http_layers(build_router(state.clone()), &state.config);
    let listener = TcpListener::bind(addr).await?;
    info!("gatepost listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("gatepost stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => info!("ctrl-c received"),
                    _ = sigterm.recv() => info!("sigterm received"),
                }
            }
            Err(err) => {
                warn!("sigterm handler unavailable: {}", err);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("ctrl-c received");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use gatepost_application::AppState;
    use gatepost_infrastructure::FileDashboardGateway;

    async fn layered_app(dir: &tempfile::TempDir, config: RuntimeConfig) -> Router {
        let gateway = FileDashboardGateway::open(dir.path().join("absent.json"))
            .await
            .expect("open");
        let state = AppState::new(config.clone(), Arc::new(gateway));
        with_http_layers(build_router(state), &config)
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = RuntimeConfig {
            max_body_bytes: 16,
            ..RuntimeConfig::default()
        };
        let app = layered_app(&dir, config).await;
        let body = r#"{"search": "a search string well past the limit"}"#;
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/v1/logs/criteria")
            .header(CONTENT_TYPE, "application/json")
            .header("content-length", body.len())
            .body(Body::from(body))
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn preflight_allows_json_writes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = layered_app(&dir, RuntimeConfig::default()).await;
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/v1/guards/save")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let methods = response
            .headers()
            .get("access-control-allow-methods")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(methods.contains("POST"));
    }

    #[tokio::test]
    async fn liveness_passes_through_the_stack() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = layered_app(&dir, RuntimeConfig::default()).await;
        let request = Request::builder()
            .uri("/v1/ops/health/live")
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
