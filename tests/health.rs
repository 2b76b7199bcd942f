use axum::{body::to_bytes, http::Request, Router};
use steptrack::{config::Config, routes, state::AppState};
use tower::ServiceExt;

#[tokio::test]
async fn health_returns_ok() {
    let state = AppState::new(Config::default());
    let app = Router::new().merge(routes::health::router()).with_state(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let text = String::from_utf8(body.to_vec()).expect("utf8");
    assert!(text.contains("\"status\":\"ok\""));
    assert!(text.contains("\"service\":\"steptrack\""));
}
