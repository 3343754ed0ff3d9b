use axum::extract::State;

use models::banner::{self, NewBanner};
use service::banner as banners;

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::AppState;

pub async fn create(State(state): State<AppState>, ApiJson(draft): ApiJson<NewBanner>) -> Result<ApiResponse<banner::Model>, ApiError> {
    let model = banners::create(&state.db, draft).await?;
    Ok(ApiResponse::ok("Banner created successfully", model))
}

/// The site has at most one banner; `getAllBanner` returns it.
pub async fn current(State(state): State<AppState>) -> Result<ApiResponse<banner::Model>, ApiError> {
    Ok(ApiResponse::ok("Banner fetched successfully", banners::current(&state.db).await?))
}

pub async fn active(State(state): State<AppState>) -> Result<ApiResponse<Vec<banner::Model>>, ApiError> {
    Ok(ApiResponse::ok("Active banners fetched successfully", banners::active(&state.db).await?))
}
