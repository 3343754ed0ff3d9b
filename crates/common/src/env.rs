//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::{info, warn};

/// Check the website content file used by the chatbot.
/// Returns `false` (and warns) when it is missing; the server still starts and the
/// chatbot then answers without site context.
pub async fn ensure_env(content_path: &str) -> bool {
    match tokio::fs::metadata(content_path).await {
        Ok(meta) if meta.is_file() => {
            info!(%content_path, bytes = meta.len(), "website content file found");
            true
        }
        _ => {
            warn!(%content_path, "website content file not found; chatbot prompts will carry no site context");
            false
        }
    }
}
