//! `getAll` handlers for collections listed together with their related rows.
use axum::extract::State;

use common::types::Listing;
use service::relations::{self, CaseStudyWithIndustry, IndustryPageWithIndustry, IndustryWithCaseStudies, ServiceWithRelations};

use crate::errors::ApiError;
use crate::extract::ApiQuery;
use crate::response::ApiResponse;
use crate::routes::content::ListParams;
use crate::routes::AppState;

pub async fn services(
    State(state): State<AppState>,
    ApiQuery(p): ApiQuery<ListParams>,
) -> Result<ApiResponse<Listing<ServiceWithRelations>>, ApiError> {
    let listing = relations::services(&state.db, p.list_query()).await?;
    Ok(ApiResponse::ok("Service list fetched successfully", listing))
}

pub async fn case_studies(
    State(state): State<AppState>,
    ApiQuery(p): ApiQuery<ListParams>,
) -> Result<ApiResponse<Listing<CaseStudyWithIndustry>>, ApiError> {
    let listing = relations::case_studies(&state.db, p.list_query()).await?;
    Ok(ApiResponse::ok("CaseStudy list fetched successfully", listing))
}

pub async fn industry_pages(
    State(state): State<AppState>,
    ApiQuery(p): ApiQuery<ListParams>,
) -> Result<ApiResponse<Listing<IndustryPageWithIndustry>>, ApiError> {
    let listing = relations::industry_pages(&state.db, p.list_query()).await?;
    Ok(ApiResponse::ok("IndustryPage list fetched successfully", listing))
}

/// `caseStudy/getCaseIndusty`: industries with the case studies filed under them.
pub async fn case_study_industries(State(state): State<AppState>) -> Result<ApiResponse<Vec<IndustryWithCaseStudies>>, ApiError> {
    let rows = relations::industries_with_case_studies(&state.db).await?;
    Ok(ApiResponse::ok("CaseStudy list fetched successfully", rows))
}
