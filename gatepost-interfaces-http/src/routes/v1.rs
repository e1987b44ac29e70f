use axum::routing::{get, post, put};
use axum::Router;

use gatepost_application::AppState;

use crate::handlers::{dashboard_handlers, guard_handlers, ops_handlers, station_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/dashboard/refresh",
            post(dashboard_handlers::refresh_dashboard),
        )
        .route(
            "/v1/dashboard/status",
            get(dashboard_handlers::get_load_status),
        )
        .route("/v1/logs", get(dashboard_handlers::get_logs))
        .route(
            "/v1/logs/criteria",
            put(dashboard_handlers::update_criteria),
        )
        .route(
            "/v1/logs/pagination",
            put(dashboard_handlers::update_pagination),
        )
        .route("/v1/logs/stats", get(dashboard_handlers::get_stats))
        .route(
            "/v1/locations",
            get(dashboard_handlers::get_location_options),
        )
        .route(
            "/v1/stations",
            get(station_handlers::list_stations).post(station_handlers::create_station),
        )
        .route(
            "/v1/station-tab",
            put(station_handlers::update_station_tab),
        )
        .route("/v1/stations/:id", put(station_handlers::rename_station))
        .route(
            "/v1/stations/:id/active",
            post(station_handlers::toggle_station_active),
        )
        .route(
            "/v1/stations/:id/select",
            post(guard_handlers::select_station),
        )
        .route("/v1/guards", get(guard_handlers::get_guard_panel))
        .route(
            "/v1/guards/selection/:user_id",
            post(guard_handlers::toggle_guard),
        )
        .route("/v1/guards/save", post(guard_handlers::save_guards))
        .route(
            "/v1/guards/candidates",
            get(guard_handlers::list_guard_candidates),
        )
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use gatepost_domain::RuntimeConfig;
    use gatepost_infrastructure::FileDashboardGateway;

    const SNAPSHOT: &str = r#"{
        "logs": [
            {"logId": 1, "fullName": "Ana Cruz", "location": "Gate 1", "date": "2024-03-01"},
            {"logId": 2, "fullName": "Ben Lim", "location": "Library", "date": "2024-03-01"}
        ],
        "activeLogIds": [1],
        "stations": [
            {"id": 1, "name": "Gate 1", "stationType": "gate"},
            {"id": 2, "name": "Library", "stationType": "building"}
        ],
        "users": [
            {"id": 10, "username": "alpha", "accountType": "GUARD"},
            {"id": 11, "username": "bravo", "accountType": "GUARD"}
        ],
        "guards": {"1": [10]}
    }"#;

    async fn app(dir: &tempfile::TempDir) -> Router {
        let path = dir.path().join("dashboard.json");
        tokio::fs::write(&path, SNAPSHOT).await.expect("fixture");
        let gateway = FileDashboardGateway::open(&path).await.expect("open");
        build_router(AppState::new(RuntimeConfig::default(), Arc::new(gateway)))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        if bytes.is_empty() {
            return (status, Value::Null);
        }
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn views_are_unavailable_before_the_first_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = app(&dir).await;

        let (status, _) = send(&app, Method::GET, "/v1/ops/health/ready", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, body) = send(&app, Method::POST, "/v1/dashboard/refresh", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"], "ready");

        let (status, _) = send(&app, Method::GET, "/v1/ops/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&app, Method::GET, "/v1/logs", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalElements"], 2);
    }

    #[tokio::test]
    async fn guard_assignment_flow_reaches_the_snapshot_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = app(&dir).await;
        send(&app, Method::POST, "/v1/dashboard/refresh", None).await;

        let (status, panel) = send(&app, Method::POST, "/v1/stations/1/select", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(panel["stationId"], 1);
        assert_eq!(panel["selection"], json!([10]));

        let (status, toggled) = send(&app, Method::POST, "/v1/guards/selection/11", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(toggled["selected"], true);

        let (status, diff) = send(&app, Method::POST, "/v1/guards/save", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(diff["userIds"], json!([10, 11]));
        assert_eq!(diff["added"], json!([11]));

        let (_, panel) = send(&app, Method::GET, "/v1/guards", None).await;
        assert_eq!(panel["assigned"][1]["username"], "bravo");
        assert_eq!(panel["lastError"], Value::Null);

        let saved = tokio::fs::read_to_string(dir.path().join("dashboard.json"))
            .await
            .expect("snapshot");
        let saved: Value = serde_json::from_str(&saved).expect("snapshot json");
        assert_eq!(saved["guards"]["1"], json!([10, 11]));
    }

    #[tokio::test]
    async fn station_errors_map_to_status_codes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = app(&dir).await;
        send(&app, Method::POST, "/v1/dashboard/refresh", None).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/v1/stations",
            Some(json!({ "name": "gate 1", "category": "gate" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|message| message.contains("Gate 1")));

        let (status, _) = send(&app, Method::POST, "/v1/stations/99/select", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::POST,
            "/v1/stations/1/active",
            Some(json!({ "confirm": false })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, station) = send(
            &app,
            Method::POST,
            "/v1/stations/1/active",
            Some(json!({ "confirm": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(station["active"], false);
    }
}
