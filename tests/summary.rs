use axum::{
    body::to_bytes,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use steptrack::{config::Config, routes, state::AppState, types::activity::BodyProfile};
use tower::ServiceExt;

fn app() -> Router {
    let config = Config {
        default_body: BodyProfile {
            weight_kg: 70.0,
            height_m: 1.75,
        },
        ..Config::default()
    };
    let state = AppState::new(config);
    Router::new()
        .merge(routes::health::router())
        .merge(routes::summary::router())
        .with_state(state)
}

async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(axum::body::Body::from(payload.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: Value = serde_json::from_slice(&body).expect("json body");
    (status, json)
}

#[tokio::test]
async fn day_summary_returns_report() {
    let (status, body) = post_json(
        "/api/day-summary",
        json!({ "record": "5000,45m", "weight_kg": 75.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.get("summary").and_then(Value::as_str),
        Some("Количество шагов: 5000.\nДистанция составила 3.25 км.\nВы сожгли 147.66 ккал.")
    );
}

#[tokio::test]
async fn day_summary_is_empty_on_bad_record() {
    let (status, body) = post_json("/api/day-summary", json!({ "record": "0,10m" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("summary").and_then(Value::as_str), Some(""));
}

#[tokio::test]
async fn training_summary_uses_default_body_profile() {
    let (status, body) = post_json(
        "/api/training-summary",
        json!({ "record": "1000,Ходьба,30m" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let report = body
        .get("report")
        .and_then(Value::as_str)
        .expect("report");
    assert!(report.starts_with("Тип тренировки: Ходьба\n"));
    assert!(report.ends_with("Сожгли калорий: 27.56"));
}

#[tokio::test]
async fn training_summary_rejects_unknown_activity() {
    let (status, body) = post_json(
        "/api/training-summary",
        json!({ "record": "1000,swimming,30m", "weight_kg": 70.0, "height_m": 1.75 }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body.get("kind").and_then(Value::as_str),
        Some("unknown_activity")
    );
    assert!(body
        .get("error")
        .and_then(Value::as_str)
        .expect("error message")
        .contains("swimming"));
}

#[tokio::test]
async fn training_summary_rejects_invalid_body_profile() {
    let (status, body) = post_json(
        "/api/training-summary",
        json!({ "record": "1000,Бег,30m", "height_m": -1.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("kind").and_then(Value::as_str), Some("validation"));
}

#[tokio::test]
async fn training_summary_rejects_malformed_record() {
    let (status, body) = post_json("/api/training-summary", json!({ "record": "1000,30m" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("kind").and_then(Value::as_str), Some("format"));
}
