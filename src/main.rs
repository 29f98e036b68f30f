use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod config;
mod error;
mod handlers;
mod store;

use handlers::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up STORE_USERNAME etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();

    let pool = store::manager::connect(&config.store)
        .unwrap_or_else(|e| panic!("invalid store configuration: {}", e));

    // Connection problems are logged, not fatal: the server binds its
    // port regardless and store errors surface per request as 500s.
    match store::manager::health_check(&pool).await {
        Ok(()) => tracing::info!("Store connected"),
        Err(e) => tracing::error!("Error connecting to store: {}", e),
    }
    if let Err(e) = store::manager::ensure_collections(&pool).await {
        tracing::error!("Failed to prepare store collections: {}", e);
    }

    let app = app(AppState { pool });

    let bind_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Server running on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(link_routes())
        .merge(today_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn link_routes() -> Router<AppState> {
    use axum::routing::put;
    use handlers::links;

    Router::new()
        .route("/api/links", get(links::list).post(links::create))
        .route("/api/links/:id", put(links::update).delete(links::delete))
}

fn today_routes() -> Router<AppState> {
    use axum::routing::put;
    use handlers::today;

    Router::new()
        .route("/api/today", get(today::list).post(today::create))
        .route("/api/today/:id", put(today::update).delete(today::delete))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Linkboard API",
        "version": version,
        "description": "Minimal CRUD backend for link bookmarks and daily notes",
        "endpoints": {
            "links": "/api/links[/:id]",
            "today": "/api/today[/:id]",
            "health": "/health"
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match store::manager::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "store_error": e.to_string()
            })),
        ),
    }
}
