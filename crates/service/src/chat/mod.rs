//! Website chatbot: prompt assembly around a text generator, with per-user history.

pub mod analysis;
pub mod generator;
pub mod history;
pub mod service;
pub mod website;

pub use analysis::{CategoryAnalysis, HistoryAnalysis, KeywordCount};
pub use generator::{GeminiClient, TextGenerator};
pub use history::{ChatHistoryRepository, SeaOrmChatHistory};
pub use service::{ChatAnswer, ChatOutcome, ChatRequest, ChatService, DegradedAnswer, HistoryView, UserInfo};
pub use website::WebsiteContent;
