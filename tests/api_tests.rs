use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use stopwatch_clock::{
    create_router,
    state::{AppState, DisplaySettings, RefreshMode},
};

fn app() -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(
        20554,
        "127.0.0.1".to_string(),
        DisplaySettings::default(),
        RefreshMode::Active,
    ));
    let router = create_router(Arc::clone(&state));
    (state, router)
}

async fn call(router: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let (_, router) = app();
    let (status, body) = call(&router, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn action_button_walks_through_states() {
    let (_, router) = app();

    let (status, body) = call(&router, Method::GET, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["phase"], "stopped");
    assert_eq!(body["timer"]["label"], "Start");
    assert_eq!(body["timer"]["elapsed"], "0:00.000");

    let (_, body) = call(&router, Method::POST, "/action").await;
    assert_eq!(body["status"], "applied");
    assert_eq!(body["transition"], "start");
    assert_eq!(body["timer"]["label"], "Pause");

    let (_, body) = call(&router, Method::POST, "/action").await;
    assert_eq!(body["transition"], "pause");
    assert_eq!(body["timer"]["label"], "Resume");

    let (_, body) = call(&router, Method::POST, "/pause-or-resume").await;
    assert_eq!(body["transition"], "resume");
    assert_eq!(body["timer"]["phase"], "running");
}

#[tokio::test]
async fn invalid_transitions_are_reported_as_ignored() {
    let (_, router) = app();

    let (status, body) = call(&router, Method::POST, "/pause-or-resume").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ignored");
    assert!(body["transition"].is_null());

    call(&router, Method::POST, "/start").await;
    let (_, body) = call(&router, Method::POST, "/start").await;
    assert_eq!(body["status"], "ignored");
    assert_eq!(body["timer"]["phase"], "running");
}

#[tokio::test]
async fn stop_resets_to_zero() {
    let (state, router) = app();

    call(&router, Method::POST, "/start").await;
    call(&router, Method::POST, "/pause-or-resume").await;

    let (_, body) = call(&router, Method::POST, "/stop").await;
    assert_eq!(body["transition"], "stop");
    assert_eq!(body["timer"]["elapsed_seconds"], 0.0);
    assert_eq!(body["timer"]["elapsed"], "0:00.000");
    assert_eq!(body["timer"]["label"], "Start");

    let (_, status) = call(&router, Method::GET, "/status").await;
    assert_eq!(status["last_action"], "stop");
    assert_eq!(state.latest_frame().tick, 0);
}

#[tokio::test]
async fn display_mode_switches_cadence() {
    let (state, router) = app();

    let (_, body) = call(&router, Method::POST, "/display/background").await;
    assert_eq!(body["mode"], "background");
    assert_eq!(body["visible"], false);
    assert_eq!(body["period_ms"], 1000.0);

    let (_, body) = call(&router, Method::GET, "/status").await;
    assert_eq!(body["display"]["mode"], "background");

    let (_, body) = call(&router, Method::POST, "/display/visible").await;
    assert_eq!(body["mode"], "active");
    assert!(state.get_display_state().unwrap().is_visible());
}

#[tokio::test]
async fn frame_returns_latest_render() {
    let (state, router) = app();

    let (_, body) = call(&router, Method::GET, "/frame").await;
    assert_eq!(body["tick"], 0);
    assert_eq!(body["elapsed"], "0:00.000");

    let frame = state
        .render_frame(stopwatch_clock::state::monotonic_now(), &chrono::Local::now())
        .unwrap();
    state.publish_frame(frame);

    let (_, body) = call(&router, Method::GET, "/frame").await;
    assert_eq!(body["tick"], 1);
    assert_eq!(body["label"], "Start");
    assert_eq!(body["mode"], "active");
}
