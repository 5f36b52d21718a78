use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::warn;

use crate::api::dtos::requests::ListResortsQuery;
use crate::domain::models::customization::CustomizationOverride;
use crate::domain::services::{compose, derive, selection};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_resorts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListResortsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let sort = match params.sort.as_deref() {
        Some(key) => key.parse()?,
        None => selection::SortKey::default(),
    };
    let query = params.q.unwrap_or_default();

    let resorts = selection::filter_and_sort(state.catalog.list(), &query, sort);
    Ok(Json(resorts))
}

pub async fn get_resort(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .catalog
        .get(&id)
        .ok_or(AppError::NotFound("Resort not found".into()))?;
    Ok(Json(record.clone()))
}

/// The fully composed details view. Override fetch failures degrade to the
/// catalog-only view; the end user never sees an error from this path.
pub async fn get_resort_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .catalog
        .get(&id)
        .ok_or(AppError::NotFound("Resort not found".into()))?;

    let overlay: Option<CustomizationOverride> =
        match state.customization_service.fetch(&id).await {
            Ok(overlay) => overlay,
            Err(e) => {
                warn!("Failed to load customization for {}, using catalog data: {}", id, e);
                None
            }
        };

    let derived = derive::compute_derived(record, overlay.as_ref());
    let view = compose::compose(record, overlay.as_ref(), &derived);
    Ok(Json(view))
}

pub async fn get_selection_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .catalog
        .get(&id)
        .ok_or(AppError::NotFound("Resort not found".into()))?;
    Ok(Json(compose::selection_summary(record)))
}
