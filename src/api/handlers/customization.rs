use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::responses::StatusResponse;
use crate::domain::models::customization::CustomizationPatch;
use crate::error::AppError;
use crate::state::AppState;

pub async fn update_customization(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<CustomizationPatch>,
) -> Result<impl IntoResponse, AppError> {
    state
        .catalog
        .get(&id)
        .ok_or(AppError::NotFound("Resort not found".into()))?;

    let saved = state.customization_service.update(&id, &patch).await?;
    info!("Updated customization for resort {}", id);
    Ok(Json(saved))
}

pub async fn reset_customization(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .catalog
        .get(&id)
        .ok_or(AppError::NotFound("Resort not found".into()))?;

    state.customization_service.reset(&id).await?;
    info!("Reset customization for resort {}", id);
    Ok(Json(StatusResponse::new("reset")))
}

pub async fn list_customized(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let overrides = state.customization_service.list_customized().await?;
    Ok(Json(overrides))
}
