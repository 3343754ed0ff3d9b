use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, instrument, warn};

use models::user_question::{self, NewQuestion};

use super::analysis::{analyze_history, category_prompt, parse_category, CategoryAnalysis, HistoryAnalysis};
use super::generator::TextGenerator;
use super::history::{format_history, ChatHistoryRepository};
use super::website::WebsiteContent;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserInfo {
    fn user_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().map(str::trim).filter(|s| !s.is_empty()).unwrap_or("Guest")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub usermessage: Option<String>,
    #[serde(default, alias = "userinfo")]
    pub user_info: Option<UserInfo>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatAnswer {
    pub answer: String,
    pub model: String,
    pub user_info: UserInfo,
    pub has_history: bool,
    pub analysis: CategoryAnalysis,
    pub is_guest: bool,
}

/// Friendly apology produced when the main generation failed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DegradedAnswer {
    pub answer: String,
    pub is_error: bool,
    pub should_retry: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChatOutcome {
    Answer(ChatAnswer),
    Degraded(DegradedAnswer),
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub history: Vec<user_question::Model>,
    pub analysis: HistoryAnalysis,
}

pub struct ChatService {
    generator: Arc<dyn TextGenerator>,
    history: Arc<dyn ChatHistoryRepository>,
    website: Arc<WebsiteContent>,
    history_limit: u64,
}

impl ChatService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        history: Arc<dyn ChatHistoryRepository>,
        website: Arc<WebsiteContent>,
        history_limit: u64,
    ) -> Self {
        Self { generator, history, website, history_limit }
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Answer a visitor question.
    ///
    /// Generator failures degrade to an apology when one can still be generated;
    /// otherwise the error surfaces as [`ServiceError::Upstream`].
    #[instrument(skip_all, fields(user = tracing::field::Empty))]
    pub async fn chat(&self, req: ChatRequest) -> Result<ChatOutcome, ServiceError> {
        let message = req.usermessage.as_deref().map(str::trim).unwrap_or_default();
        if message.is_empty() {
            return Err(ServiceError::BadRequest("User message is required".into()));
        }
        let user = req.user_info.unwrap_or_default();
        if let Some(id) = user.user_id() {
            tracing::Span::current().record("user", id);
        }

        match self.answer(message, &user).await {
            Ok(answer) => Ok(ChatOutcome::Answer(answer)),
            Err(e) => {
                warn!(error = %e, "chat_generation_failed");
                self.degrade(message, &user).await.map(ChatOutcome::Degraded)
            }
        }
    }

    async fn answer(&self, message: &str, user: &UserInfo) -> Result<ChatAnswer, ServiceError> {
        let previous = match user.user_id() {
            Some(id) => self.history.recent(id, self.history_limit).await.unwrap_or_else(|e| {
                warn!(user = id, error = %e, "chat_history_unavailable");
                Vec::new()
            }),
            None => Vec::new(),
        };

        let raw = self.generator.generate(&category_prompt(message)).await?;
        let analysis = parse_category(&raw, message);

        let prompt = self.answer_prompt(message, user, &previous);
        let answer = self.generator.generate(&prompt).await?;

        if let Some(id) = user.user_id() {
            let row = NewQuestion {
                question: message.to_string(),
                answer: answer.clone(),
                keywords: serde_json::to_value(&analysis).ok(),
                user_id: Some(id.to_string()),
                error: None,
            };
            self.history.save(row).await?;
        }
        info!(category = %analysis.category, history = previous.len(), "chat_answered");

        Ok(ChatAnswer {
            answer,
            model: self.generator.model().to_string(),
            is_guest: user.user_id().is_none(),
            has_history: !previous.is_empty(),
            user_info: user.clone(),
            analysis,
        })
    }

    async fn degrade(&self, message: &str, user: &UserInfo) -> Result<DegradedAnswer, ServiceError> {
        let prompt = format!(
            "Create a brief, friendly error message for {} about a technical issue.",
            user.display_name()
        );
        let apology = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "chat_fallback_failed");
                return Err(ServiceError::Upstream("An unexpected error occurred".into()));
            }
        };

        if let Some(id) = user.user_id() {
            let row = NewQuestion {
                question: message.to_string(),
                answer: apology.clone(),
                keywords: Some(json!({ "topics": [], "category": ["Error"] })),
                user_id: Some(id.to_string()),
                error: Some("generation failed".into()),
            };
            if let Err(e) = self.history.save(row).await {
                warn!(user = id, error = %e, "chat_error_row_not_saved");
            }
        }
        Ok(DegradedAnswer { answer: apology, is_error: true, should_retry: true })
    }

    fn answer_prompt(&self, message: &str, user: &UserInfo, previous: &[user_question::Model]) -> String {
        let history = if previous.is_empty() {
            "No previous interaction history.".to_string()
        } else {
            format!("Previous Interaction History:\n{}", format_history(previous))
        };
        format!(
            "You are a helpful assistant for our company website. Answer the user's question \
             using only the website information below.\n\
             Guidelines:\n\
             - Greet the user by name: {name}.\n\
             - Keep the answer concise and friendly.\n\
             - If the information is not available, say so and suggest contacting us.\n\
             - Refer to earlier questions when they are relevant.\n\n\
             User Question: {message}\n\n\
             Context:\n{website}\n\n\
             {history}",
            name = user.display_name(),
            website = self.website.format_for_prompt(),
        )
    }

    /// Stored exchanges of one user, newest first, with keyword statistics.
    pub async fn history(&self, user_id: &str, limit: Option<u64>, offset: Option<u64>) -> Result<HistoryView, ServiceError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(ServiceError::BadRequest("User ID is required".into()));
        }
        let history = self.history.list(user_id, limit, offset).await?;
        let analysis = analyze_history(&history);
        Ok(HistoryView { history, analysis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::history::SeaOrmChatHistory;
    use crate::test_support::get_db;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays scripted replies in order and records every prompt.
    struct Scripted {
        replies: Mutex<Vec<Result<String, ServiceError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(mut replies: Vec<Result<String, ServiceError>>) -> Arc<Self> {
            replies.reverse();
            Arc::new(Self { replies: Mutex::new(replies), prompts: Mutex::new(Vec::new()) })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl TextGenerator for Scripted {
        fn model(&self) -> &str { "stub-model" }

        async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies.lock().unwrap().pop().unwrap_or_else(|| Err(ServiceError::Upstream("exhausted".into())))
        }
    }

    fn ok(s: &str) -> Result<String, ServiceError> { Ok(s.to_string()) }

    fn fail() -> Result<String, ServiceError> { Err(ServiceError::Upstream("boom".into())) }

    async fn service(generator: Arc<Scripted>) -> Result<(ChatService, Arc<SeaOrmChatHistory>), anyhow::Error> {
        let repo = Arc::new(SeaOrmChatHistory { db: get_db().await? });
        let website = Arc::new(WebsiteContent::from_value(json!(["We build software."])));
        Ok((ChatService::new(generator, repo.clone(), website, 5), repo))
    }

    fn req(msg: &str, id: Option<&str>) -> ChatRequest {
        ChatRequest {
            usermessage: Some(msg.into()),
            user_info: Some(UserInfo { id: id.map(Into::into), name: Some("Ada".into()) }),
        }
    }

    #[tokio::test]
    async fn blank_message_is_rejected() -> Result<(), anyhow::Error> {
        let (svc, _) = service(Scripted::new(vec![])).await?;
        let err = svc.chat(ChatRequest { usermessage: Some("  ".into()), user_info: None }).await;
        assert!(matches!(err, Err(ServiceError::BadRequest(m)) if m == "User message is required"));
        Ok(())
    }

    #[tokio::test]
    async fn known_user_answer_is_saved_and_used_as_history() -> Result<(), anyhow::Error> {
        let analysis = r#"{"keywords":["pricing"],"category":"sales","subCategories":[],"sentiment":"neutral"}"#;
        let gen = Scripted::new(vec![ok(analysis), ok("First answer"), ok(analysis), ok("Second answer")]);
        let (svc, repo) = service(gen.clone()).await?;

        let ChatOutcome::Answer(first) = svc.chat(req("How much?", Some("u1"))).await? else {
            panic!("expected an answer");
        };
        assert_eq!(first.answer, "First answer");
        assert_eq!(first.model, "stub-model");
        assert!(!first.has_history);
        assert!(!first.is_guest);
        assert_eq!(first.analysis.category, "sales");

        let ChatOutcome::Answer(second) = svc.chat(req("And for teams?", Some("u1"))).await? else {
            panic!("expected an answer");
        };
        assert!(second.has_history);

        let prompts = gen.prompts();
        assert!(prompts[1].contains("No previous interaction history."));
        assert!(prompts[1].contains("Greet the user by name: Ada."));
        assert!(prompts[1].contains("We build software."));
        assert!(prompts[3].contains("Your Question: How much?"));
        assert!(prompts[3].contains("My Response: First answer"));

        let stored = repo.list("u1", None, None).await?;
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].question, "And for teams?");
        Ok(())
    }

    #[tokio::test]
    async fn guest_answers_are_not_saved() -> Result<(), anyhow::Error> {
        let gen = Scripted::new(vec![ok("not json"), ok("Hello guest")]);
        let (svc, repo) = service(gen).await?;
        let outcome = svc.chat(ChatRequest { usermessage: Some("Services offered".into()), user_info: None }).await?;
        let ChatOutcome::Answer(a) = outcome else { panic!("expected an answer") };
        assert!(a.is_guest);
        assert_eq!(a.analysis.keywords, vec!["Services"]);
        assert!(repo.list("", None, None).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn generator_failure_degrades_to_apology() -> Result<(), anyhow::Error> {
        let gen = Scripted::new(vec![ok("{}"), fail(), ok("Sorry Ada, try again soon.")]);
        let (svc, repo) = service(gen.clone()).await?;
        let ChatOutcome::Degraded(d) = svc.chat(req("Hi", Some("u2"))).await? else {
            panic!("expected a degraded answer");
        };
        assert_eq!(d.answer, "Sorry Ada, try again soon.");
        assert!(d.is_error && d.should_retry);
        assert!(gen.prompts()[2].contains("brief, friendly error message for Ada"));

        let stored = repo.list("u2", None, None).await?;
        assert_eq!(stored.len(), 1);
        assert!(stored[0].error.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn double_failure_is_upstream_error() -> Result<(), anyhow::Error> {
        let (svc, _) = service(Scripted::new(vec![fail(), fail()])).await?;
        let err = svc.chat(req("Hi", None)).await;
        assert!(matches!(err, Err(ServiceError::Upstream(m)) if m == "An unexpected error occurred"));
        Ok(())
    }

    #[tokio::test]
    async fn history_view_is_newest_first_with_stats() -> Result<(), anyhow::Error> {
        let analysis = r#"{"keywords":["rust"],"category":"tech"}"#;
        let gen = Scripted::new(vec![ok(analysis), ok("a1"), ok(analysis), ok("a2")]);
        let (svc, _) = service(gen).await?;
        svc.chat(req("q1", Some("u3"))).await?;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        svc.chat(req("q2", Some("u3"))).await?;

        let view = svc.history("u3", Some(10), None).await?;
        assert_eq!(view.history[0].question, "q2");
        assert_eq!(view.analysis.total_interactions, 2);
        assert_eq!(view.analysis.last_interaction, Some(view.history[0].created_at));
        assert_eq!(view.analysis.top_keywords[0].count, 2);
        assert!(matches!(svc.history(" ", None, None).await, Err(ServiceError::BadRequest(_))));
        Ok(())
    }
}
