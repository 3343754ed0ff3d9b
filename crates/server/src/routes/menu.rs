//! `/header` navigation menu endpoints.
use axum::extract::State;
use uuid::Uuid;

use models::header::{MenuPatch, NewHeader};
use service::menu::{self, HeaderTree, MenuItem};

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::response::ApiResponse;
use crate::routes::AppState;

pub async fn create(State(state): State<AppState>, ApiJson(draft): ApiJson<NewHeader>) -> Result<ApiResponse<HeaderTree>, ApiError> {
    let tree = menu::create(&state.db, draft).await?;
    Ok(ApiResponse::ok("Header created successfully", tree))
}

pub async fn list(State(state): State<AppState>) -> Result<ApiResponse<Vec<HeaderTree>>, ApiError> {
    Ok(ApiResponse::ok("Header list fetched successfully", menu::all(&state.db).await?))
}

pub async fn get_one(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> Result<ApiResponse<HeaderTree>, ApiError> {
    Ok(ApiResponse::ok("Header fetched successfully", menu::find(&state.db, &id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<MenuPatch>,
) -> Result<ApiResponse<MenuItem>, ApiError> {
    let item = menu::update(&state.db, &id, patch).await?;
    Ok(ApiResponse::ok("Header updated successfully", item))
}

pub async fn remove(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> Result<ApiResponse<MenuItem>, ApiError> {
    let item = menu::delete(&state.db, &id).await?;
    Ok(ApiResponse::ok("Header deleted successfully", item))
}
