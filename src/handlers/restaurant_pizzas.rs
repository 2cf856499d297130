//! Association creation handler.

use crate::error::AppError;
use crate::response::PrettyJson;
use crate::service;
use crate::service::RecordService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// Every failure on this route surfaces as a 400 with an `errors` array:
/// out-of-range prices, malformed bodies, unknown parents, and storage
/// faults alike.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::Request(rejection.body_text()))?;
    let new = service::parse_new_restaurant_pizza(&body)?;
    let created = RecordService::create_restaurant_pizza(&state.pool, new)
        .await
        .map_err(AppError::into_request_error)?;
    Ok((StatusCode::CREATED, PrettyJson(created)))
}
