use serde::Serialize;
use tracing::error;

use pirabel_core::{ArticleDraft, Error, Result, Session};
use pirabel_inference::CompletionClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityStatus {
    Good,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordDensity {
    pub keyword: String,
    pub count: usize,
    pub status: DensityStatus,
}

/// Case-insensitive, non-overlapping occurrences of each keyword in `content`.
pub fn keyword_density(content: &str, keywords: &[String]) -> Vec<KeywordDensity> {
    let haystack = content.to_lowercase();
    keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(|keyword| {
            let count = haystack.matches(&keyword.to_lowercase()).count();
            KeywordDensity {
                keyword: keyword.to_string(),
                count,
                status: if count > 0 { DensityStatus::Good } else { DensityStatus::Missing },
            }
        })
        .collect()
}

/// Splits the comma-separated keyword field.
pub fn parse_keyword_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// AI writer screen: topic in, editable draft out.
#[derive(Debug, Clone, Default)]
pub struct WriterView {
    pub topic: String,
    pub keywords_input: String,
    draft: Option<ArticleDraft>,
    /// Editor contents; starts as the generated body and may be edited afterwards.
    pub content: String,
}

impl WriterView {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    pub fn draft(&self) -> Option<&ArticleDraft> {
        self.draft.as_ref()
    }

    /// Generates a draft sized for the session's plan.
    pub async fn generate(&mut self, client: &CompletionClient, session: &Session) -> Result<&ArticleDraft> {
        if self.topic.trim().is_empty() {
            return Err(Error::EmptyInput("topic"));
        }
        match client.try_request_article(&self.topic, session.plan()).await {
            Ok(draft) => {
                self.content = draft.content.clone();
                Ok(&*self.draft.insert(draft))
            }
            Err(e) => {
                error!("❌ Article generation for \"{}\" failed: {}", self.topic, e);
                Err(e)
            }
        }
    }

    /// Keywords to track: the draft's own target keywords, else the user's list.
    pub fn tracked_keywords(&self) -> Vec<String> {
        match self.draft.as_ref().and_then(|d| d.target_keywords.clone()) {
            Some(keywords) if !keywords.is_empty() => keywords,
            _ => parse_keyword_list(&self.keywords_input),
        }
    }

    pub fn density(&self) -> Vec<KeywordDensity> {
        if self.draft.is_none() {
            return Vec::new();
        }
        keyword_density(&self.content, &self.tracked_keywords())
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}
