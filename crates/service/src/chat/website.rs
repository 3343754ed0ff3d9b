//! Static website content the chatbot answers from.
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{info, warn};

static EMAIL: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").ok());
static PHONE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\d{3,}[-.\s]?\d{3,}[-.\s]?\d{3,}").ok());

fn last_match(re: &Lazy<Option<Regex>>, text: &str) -> Option<String> {
    re.as_ref()?.find_iter(text).last().map(|m| m.as_str().to_string())
}

/// Content sections, each either a plain string or an object with optional
/// `topic`, `content` and `keywords`.
#[derive(Debug, Clone, Default)]
pub struct WebsiteContent {
    sections: Vec<Value>,
}

impl WebsiteContent {
    /// Accepts an array of sections or a single string.
    pub fn from_value(v: Value) -> Self {
        let sections = match v {
            Value::Array(items) => items,
            Value::String(s) => vec![Value::String(s)],
            Value::Null => Vec::new(),
            other => vec![other],
        };
        Self { sections }
    }

    /// Read the content file. A missing or unparseable file yields empty content.
    pub async fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let bytes = match tokio::fs::read(path).await {
            Ok(b) => b,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "website content not readable; chatbot answers without it");
                return Self::default();
            }
        };
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(v) => {
                let content = Self::from_value(v);
                info!(path = %path.display(), sections = content.sections.len(), "website content loaded");
                content
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "website content is not valid JSON");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool { self.sections.is_empty() }

    /// Last email and phone number found across all sections.
    pub fn contacts(&self) -> (Option<String>, Option<String>) {
        let mut email = None;
        let mut phone = None;
        for section in &self.sections {
            let text = section_text(section);
            if let Some(m) = last_match(&EMAIL, &text) { email = Some(m); }
            if let Some(m) = last_match(&PHONE, &text) { phone = Some(m); }
        }
        (email, phone)
    }

    /// Render as the context block of the answer prompt.
    pub fn format_for_prompt(&self) -> String {
        let mut out = String::from("Website Information:\n\n");
        let (email, phone) = self.contacts();
        if let Some(e) = email { out.push_str(&format!("Contact Email: {}\n", e)); }
        if let Some(p) = phone { out.push_str(&format!("Contact Phone: {}\n", p)); }

        for section in &self.sections {
            match section {
                Value::String(s) => out.push_str(&format!("Information:\n{}\n\n", s)),
                other => {
                    let topic = other.get("topic").and_then(Value::as_str).unwrap_or("Information");
                    let body = match other.get("content").and_then(Value::as_str) {
                        Some(c) if !c.is_empty() => c.to_string(),
                        _ => other.to_string(),
                    };
                    out.push_str(&format!("{}:\n{}\n\n", topic, body));
                }
            }
        }
        out
    }
}

fn section_text(section: &Value) -> String {
    match section {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> WebsiteContent {
        WebsiteContent::from_value(json!([
            "We build software for logistics companies.",
            {"topic": "Contact", "content": "Write to hello@acme.dev or call +1 555-123-4567.", "keywords": ["contact"]},
            {"topic": "Pricing", "keywords": ["price"]}
        ]))
    }

    #[test]
    fn formats_sections_with_topics() {
        let text = sample().format_for_prompt();
        assert!(text.starts_with("Website Information:\n\n"));
        assert!(text.contains("Contact Email: hello@acme.dev\n"));
        assert!(text.contains("Contact Phone: +1 555-123-4567\n"));
        assert!(text.contains("Information:\nWe build software for logistics companies.\n\n"));
        assert!(text.contains("Contact:\nWrite to hello@acme.dev"));
        // no content: the whole section is rendered as JSON
        assert!(text.contains("Pricing:\n{"));
    }

    #[test]
    fn single_string_is_one_section() {
        let c = WebsiteContent::from_value(json!("just text"));
        assert!(!c.is_empty());
        assert_eq!(c.contacts(), (None, None));
        assert!(c.format_for_prompt().contains("Information:\njust text"));
    }

    #[tokio::test]
    async fn missing_file_is_empty_content() {
        let c = WebsiteContent::load("/definitely/not/here.json").await;
        assert!(c.is_empty());
        assert_eq!(c.format_for_prompt(), "Website Information:\n\n");
    }
}
