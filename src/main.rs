use axum::Router;
use steptrack::{config, routes, state};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "steptrack=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env();
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(
        "Default body profile: {:.1} kg, {:.2} m",
        config.default_body.weight_kg,
        config.default_body.height_m
    );
    let state = state::AppState::new(config);

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::summary::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Steptrack listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Day summary: POST http://{}/api/day-summary", addr);
    tracing::info!("Training summary: POST http://{}/api/training-summary", addr);

    axum::serve(listener, app).await.unwrap();
}
