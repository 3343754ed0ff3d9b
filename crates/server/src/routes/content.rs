//! Handlers shared by every content collection, instantiated per entity in [`crate::routes`].
use axum::extract::State;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, IntoActiveModel};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use common::pagination::ListQuery;
use common::types::Listing;
use models::content::{ContentEntity, Draft, Orderable, Patch};
use service::{content, ordering};

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::observability::INDEX_SWAPS_TOTAL;
use crate::response::ApiResponse;
use crate::routes::AppState;

/// Raw list parameters; parsed leniently by [`ListQuery::from_raw`].
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    page: Option<String>,
    limit: Option<String>,
    #[serde(rename = "showAll")]
    show_all: Option<String>,
}

impl ListParams {
    pub fn list_query(&self) -> ListQuery {
        ListQuery::from_raw(self.page.as_deref(), self.limit.as_deref(), self.show_all.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    query: Option<String>,
}

pub async fn create<E, D>(State(state): State<AppState>, ApiJson(draft): ApiJson<D>) -> Result<ApiResponse<E::Model>, ApiError>
where
    E: ContentEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    D: Draft<E>,
{
    let model = content::create::<E, D, _>(&state.db, draft).await?;
    Ok(ApiResponse::ok(format!("{} created successfully", E::LABEL), model))
}

pub async fn list<E>(State(state): State<AppState>, ApiQuery(p): ApiQuery<ListParams>) -> Result<ApiResponse<Listing<E::Model>>, ApiError>
where
    E: ContentEntity,
    E::Model: Serialize + Sync,
{
    let listing = content::list::<E, _>(&state.db, p.list_query()).await?;
    Ok(ApiResponse::ok(format!("{} list fetched successfully", E::LABEL), listing))
}

pub async fn get_one<E>(State(state): State<AppState>, ApiPath(id): ApiPath<E::Id>) -> Result<ApiResponse<E::Model>, ApiError>
where
    E: ContentEntity,
    E::Model: Serialize,
{
    let model = content::find::<E, _>(&state.db, &id).await?;
    Ok(ApiResponse::ok(format!("{} fetched successfully", E::LABEL), model))
}

pub async fn by_slug<E>(State(state): State<AppState>, ApiPath(slug): ApiPath<String>) -> Result<ApiResponse<E::Model>, ApiError>
where
    E: ContentEntity,
    E::Model: Serialize,
{
    let model = content::find_by_slug::<E, _>(&state.db, &slug).await?;
    Ok(ApiResponse::ok(format!("{} fetched successfully", E::LABEL), model))
}

pub async fn search<E>(State(state): State<AppState>, ApiQuery(p): ApiQuery<SearchParams>) -> Result<ApiResponse<Vec<E::Model>>, ApiError>
where
    E: ContentEntity,
    E::Model: Serialize,
{
    let rows = content::search::<E, _>(&state.db, p.query.as_deref()).await?;
    Ok(ApiResponse::ok(format!("{} fetched successfully", E::LABEL), rows))
}

pub async fn update<E, P>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<E::Id>,
    ApiJson(patch): ApiJson<P>,
) -> Result<ApiResponse<E::Model>, ApiError>
where
    E: ContentEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    P: Patch<E>,
{
    let model = content::update::<E, P, _>(&state.db, &id, patch).await?;
    Ok(ApiResponse::ok(format!("{} updated successfully", E::LABEL), model))
}

pub async fn remove<E>(State(state): State<AppState>, ApiPath(id): ApiPath<E::Id>) -> Result<ApiResponse<E::Model>, ApiError>
where
    E: ContentEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    let model = content::soft_delete::<E, _>(&state.db, &id).await?;
    Ok(ApiResponse::ok(format!("{} deleted successfully", E::LABEL), model))
}

/// `PUT swapIndexs`: body `{ "first{Entity}Id", "second{Entity}Id" }` or `{ "firstId", "secondId" }`.
pub async fn swap<E>(State(state): State<AppState>, ApiJson(body): ApiJson<Map<String, Value>>) -> Result<ApiResponse<Vec<E::Model>>, ApiError>
where
    E: Orderable,
    E::Model: Serialize,
{
    let first = swap_id::<E>(&body, "first")?;
    let second = swap_id::<E>(&body, "second")?;
    let rows = ordering::swap_indexes::<E>(&state.db, &first, &second).await?;
    INDEX_SWAPS_TOTAL.inc();
    Ok(ApiResponse::ok(format!("{} reordered successfully", E::LABEL), rows))
}

fn swap_id<E: ContentEntity>(body: &Map<String, Value>, which: &str) -> Result<E::Id, ApiError> {
    let raw = body
        .get(&format!("{which}{}Id", E::LABEL))
        .or_else(|| body.get(&format!("{which}Id")))
        .filter(|v| !v.is_null())
        .ok_or_else(|| ApiError::BadRequest(format!("Both first{0}Id and second{0}Id are required", E::LABEL)))?;
    serde_json::from_value(raw.clone()).map_err(|_| ApiError::BadRequest(format!("Invalid {} id: {}", E::LABEL, raw)))
}
