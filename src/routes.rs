//! Router assembly: banner, operational routes, record routes.

use crate::handlers::{pizzas, restaurant_pizzas, restaurants};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

async fn index() -> Html<&'static str> {
    Html("<h1>Pizzeria Record Service</h1>")
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if sqlx::query("SELECT 1").fetch_optional(&state.pool).await.is_err() {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: Some("unavailable"),
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: Some("ok"),
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Record routes: the six-path wire surface of the service.
pub fn record_routes(state: AppState) -> Router {
    Router::new()
        .route("/restaurants", get(restaurants::list))
        .route(
            "/restaurants/:id",
            get(restaurants::read).delete(restaurants::delete),
        )
        .route("/pizzas", get(pizzas::list))
        .route("/restaurant_pizzas", post(restaurant_pizzas::create))
        .with_state(state)
}

/// Operational routes: GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

/// Full application router with request tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(common_routes(state.clone()))
        .merge(record_routes(state))
        .layer(TraceLayer::new_for_http())
}
