use std::fmt;

pub mod client;
pub mod models;
pub mod prompts;
pub mod schemas;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Backend selection and model identifiers for the completion client.
#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    /// `gemini` or `dummy`.
    pub backend: String,
    pub base_url: String,
    pub audit_model: String,
    pub keyword_model: String,
    pub article_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            backend: "gemini".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            audit_model: "gemini-3-pro-preview".to_string(),
            keyword_model: "gemini-3-flash-preview".to_string(),
            article_model: "gemini-3-pro-preview".to_string(),
        }
    }
}

impl Config {
    /// Reads `GEMINI_API_KEY` (or `API_KEY`), `PIRABEL_MODEL` and
    /// `PIRABEL_BASE_URL`; anything unset keeps its default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty());
        if let Ok(backend) = std::env::var("PIRABEL_MODEL") {
            config.backend = backend;
        }
        if let Ok(base_url) = std::env::var("PIRABEL_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        config
    }

    pub fn dummy() -> Self {
        Self {
            backend: "dummy".to_string(),
            ..Self::default()
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("backend", &self.backend)
            .field("base_url", &self.base_url)
            .field("audit_model", &self.audit_model)
            .field("keyword_model", &self.keyword_model)
            .field("article_model", &self.article_model)
            .finish()
    }
}

pub mod prelude {
    pub use super::client::CompletionClient;
    pub use super::models::create_model;
    pub use super::Config;
    pub use pirabel_core::{ArticleDraft, AuditReport, Error, KeywordMetric, Result, UserPlan};
}

pub use client::CompletionClient;
pub use models::create_model;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config {
            api_key: Some("super-secret".to_string()),
            ..Config::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_default_models() {
        let config = Config::default();
        assert_eq!(config.audit_model, "gemini-3-pro-preview");
        assert_eq!(config.keyword_model, "gemini-3-flash-preview");
        assert_eq!(config.article_model, "gemini-3-pro-preview");
    }

    #[tokio::test]
    async fn test_dummy_pipeline() {
        let model = create_model(&Config::dummy()).unwrap();
        let client = CompletionClient::new(model, Config::dummy());
        let keywords = client.request_keyword_set("coffee").await;
        assert_eq!(keywords.len(), 15);
    }
}
