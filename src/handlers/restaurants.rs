//! Restaurant handlers: list, fetch with associations, delete.

use crate::error::AppError;
use crate::response::PrettyJson;
use crate::service::RecordService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let restaurants = RecordService::list_restaurants(&state.pool).await?;
    Ok((StatusCode::OK, PrettyJson(restaurants)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let detail = RecordService::find_restaurant(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant"))?;
    Ok((StatusCode::OK, PrettyJson(detail)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !RecordService::delete_restaurant(&state.pool, id).await? {
        return Err(AppError::not_found("Restaurant"));
    }
    Ok(StatusCode::NO_CONTENT)
}
