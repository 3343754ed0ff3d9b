use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ChatbotConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::chat::{ChatService, GeminiClient, SeaOrmChatHistory, WebsiteContent};

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire the chatbot collaborators around an open database.
pub async fn build_state(db: DatabaseConnection, chatbot: &ChatbotConfig) -> Result<AppState, StartupError> {
    common::env::ensure_env(&chatbot.content_path).await;
    let website = Arc::new(WebsiteContent::load(&chatbot.content_path).await);
    let generator = GeminiClient::from_config(chatbot).map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let history = SeaOrmChatHistory { db: db.clone() };
    let chat = ChatService::new(Arc::new(generator), Arc::new(history), website, chatbot.history_limit);
    info!(model = chat.model(), "chatbot ready");
    Ok(AppState { db, chat: Arc::new(chat) })
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Connect, migrate and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");

    let state = build_state(db, &cfg.chatbot).await?;
    let app = build_app(state);

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}
