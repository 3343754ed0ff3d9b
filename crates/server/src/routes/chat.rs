use axum::extract::State;
use serde::Deserialize;
use tracing::info;

use service::chat::{ChatOutcome, ChatRequest, HistoryView};
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::observability::{CHAT_REQUESTS_TOTAL, CHAT_UPSTREAM_FAILURES_TOTAL};
use crate::response::ApiResponse;
use crate::routes::AppState;

pub async fn chat(State(state): State<AppState>, ApiJson(req): ApiJson<ChatRequest>) -> Result<ApiResponse<ChatOutcome>, ApiError> {
    CHAT_REQUESTS_TOTAL.inc();
    match state.chat.chat(req).await {
        Ok(outcome) => {
            if matches!(outcome, ChatOutcome::Degraded(_)) {
                CHAT_UPSTREAM_FAILURES_TOTAL.inc();
            }
            Ok(ApiResponse::ok("Response generated successfully", outcome))
        }
        Err(e) => {
            if matches!(e, ServiceError::Upstream(_)) {
                CHAT_UPSTREAM_FAILURES_TOTAL.inc();
            }
            Err(e.into())
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    limit: Option<String>,
    offset: Option<String>,
}

fn parse_count(v: Option<&str>) -> Option<u64> {
    v.and_then(|s| s.trim().parse::<u64>().ok())
}

pub async fn history(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
    ApiQuery(p): ApiQuery<HistoryParams>,
) -> Result<ApiResponse<HistoryView>, ApiError> {
    let view = state
        .chat
        .history(&user_id, parse_count(p.limit.as_deref()), parse_count(p.offset.as_deref()))
        .await?;
    info!(user = %user_id, rows = view.history.len(), "chat_history_served");
    Ok(ApiResponse::ok("Chat history retrieved successfully", view))
}

#[cfg(test)]
mod tests {
    use super::parse_count;

    #[test]
    fn counts_parse_leniently() {
        assert_eq!(parse_count(Some("5")), Some(5));
        assert_eq!(parse_count(Some("-1")), None);
        assert_eq!(parse_count(Some("x")), None);
        assert_eq!(parse_count(None), None);
    }
}
