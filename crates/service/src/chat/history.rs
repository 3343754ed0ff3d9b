//! Persistence of chat exchanges.
use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::user_question::{self, NewQuestion};

use crate::errors::ServiceError;

#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// Up to `limit` most recent rows for the user, oldest first.
    async fn recent(&self, user_id: &str, limit: u64) -> Result<Vec<user_question::Model>, ServiceError>;
    /// Rows for the user, newest first.
    async fn list(&self, user_id: &str, limit: Option<u64>, offset: Option<u64>) -> Result<Vec<user_question::Model>, ServiceError>;
    async fn save(&self, q: NewQuestion) -> Result<user_question::Model, ServiceError>;
}

/// SeaORM-backed history store.
pub struct SeaOrmChatHistory {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ChatHistoryRepository for SeaOrmChatHistory {
    async fn recent(&self, user_id: &str, limit: u64) -> Result<Vec<user_question::Model>, ServiceError> {
        let mut rows = user_question::find_by_user(&self.db, user_id, Some(limit), None).await?;
        rows.reverse();
        Ok(rows)
    }

    async fn list(&self, user_id: &str, limit: Option<u64>, offset: Option<u64>) -> Result<Vec<user_question::Model>, ServiceError> {
        Ok(user_question::find_by_user(&self.db, user_id, limit, offset).await?)
    }

    async fn save(&self, q: NewQuestion) -> Result<user_question::Model, ServiceError> {
        Ok(user_question::create(&self.db, q).await?)
    }
}

/// Render prior exchanges for the answer prompt.
pub fn format_history(rows: &[user_question::Model]) -> String {
    if rows.is_empty() {
        return "You haven't had any previous conversations yet.".into();
    }
    rows.iter()
        .map(|r| {
            format!(
                "Time: {}\nYour Question: {}\nMy Response: {}",
                r.created_at.format("%Y-%m-%d %H:%M:%S %:z"),
                r.question,
                r.answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}
