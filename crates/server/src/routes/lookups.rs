//! Filtered listings that only some collections have.
use axum::extract::State;
use serde::Deserialize;
use uuid::Uuid;

use models::{branch, social_media, sub_service};
use service::content;

use crate::errors::ApiError;
use crate::extract::{ApiPath, ApiQuery};
use crate::response::ApiResponse;
use crate::routes::AppState;

pub async fn sub_services_by_service(
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<Uuid>,
) -> Result<ApiResponse<Vec<sub_service::Model>>, ApiError> {
    let rows = content::list_where::<sub_service::Entity, _, _>(&state.db, sub_service::Column::ServiceId, service_id).await?;
    Ok(ApiResponse::ok("SubService list fetched successfully", rows))
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(rename = "pageId")]
    page_id: Option<String>,
}

pub async fn branches_by_page(
    State(state): State<AppState>,
    ApiQuery(p): ApiQuery<PageParams>,
) -> Result<ApiResponse<Vec<branch::Model>>, ApiError> {
    let page_id = p
        .page_id
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("pageId is required".into()))?;
    let rows = content::list_where::<branch::Entity, _, _>(&state.db, branch::Column::PageId, page_id).await?;
    Ok(ApiResponse::ok("Branch list fetched successfully", rows))
}

pub async fn active_social_media(State(state): State<AppState>) -> Result<ApiResponse<Vec<social_media::Model>>, ApiError> {
    let rows = content::list_where::<social_media::Entity, _, _>(&state.db, social_media::Column::Active, true).await?;
    Ok(ApiResponse::ok("Active SocialMedia fetched successfully", rows))
}
