//! Category analysis of visitor questions and keyword statistics over stored history.
use std::collections::HashMap;

use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use models::user_question;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAnalysis {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_categories: Vec<String>,
    #[serde(default)]
    pub sentiment: String,
}

impl CategoryAnalysis {
    /// Used when the generator's answer cannot be parsed.
    pub fn fallback(message: &str) -> Self {
        Self {
            keywords: vec![message.split(' ').next().unwrap_or_default().to_string()],
            category: "general".into(),
            sub_categories: Vec::new(),
            sentiment: "neutral".into(),
        }
    }
}

pub fn category_prompt(message: &str) -> String {
    format!(
        r#"Analyze this question and respond with a JSON object containing:
{{
    "keywords": ["keyword1", "keyword2"],
    "category": "main category",
    "subCategories": ["sub1", "sub2"],
    "sentiment": "positive/neutral/negative"
}}

Question: "{}""#,
        message
    )
}

/// Parse the generator's reply, tolerating markdown fences and surrounding prose.
pub fn parse_category(raw: &str, message: &str) -> CategoryAnalysis {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();
    let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) else {
        return CategoryAnalysis::fallback(message);
    };
    if end < start {
        return CategoryAnalysis::fallback(message);
    }
    serde_json::from_str(&cleaned[start..=end]).unwrap_or_else(|_| CategoryAnalysis::fallback(message))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryAnalysis {
    pub total_interactions: usize,
    pub last_interaction: Option<DateTimeWithTimeZone>,
    pub top_keywords: Vec<KeywordCount>,
}

/// Statistics over rows ordered newest first.
pub fn analyze_history(rows: &[user_question::Model]) -> HistoryAnalysis {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        let Some(keywords) = row.keywords.as_ref().and_then(|k| k.get("keywords")).and_then(|k| k.as_array()) else {
            continue;
        };
        for kw in keywords.iter().filter_map(|k| k.as_str()) {
            *counts.entry(kw).or_default() += 1;
        }
    }
    let mut top: Vec<KeywordCount> =
        counts.into_iter().map(|(keyword, count)| KeywordCount { keyword: keyword.to_string(), count }).collect();
    top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.keyword.cmp(&b.keyword)));
    top.truncate(10);

    HistoryAnalysis {
        total_interactions: rows.len(),
        last_interaction: rows.first().map(|r| r.created_at),
        top_keywords: top,
    }
}
