//! Pizza handlers: list only; pizzas are read-only through this API.

use crate::error::AppError;
use crate::response::PrettyJson;
use crate::service::RecordService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pizzas = RecordService::list_pizzas(&state.pool).await?;
    Ok((StatusCode::OK, PrettyJson(pizzas)))
}
