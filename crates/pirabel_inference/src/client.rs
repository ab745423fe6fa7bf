use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use pirabel_core::target::{normalize_url, parse_target};
use pirabel_core::{
    ArticleDraft, AuditReport, CompletionModel, CompletionRequest, Error, KeywordMetric, Result, Schema, UserPlan,
};

use crate::{prompts, schemas, Config};

/// Parses the response text, checks it against `schema`, then builds `T`.
pub fn decode<T: DeserializeOwned>(text: &str, schema: &Schema) -> Result<T> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::Parse("empty response".to_string()));
    }
    let value: Value = serde_json::from_str(text).map_err(|e| Error::Parse(e.to_string()))?;
    schema.check(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// One-shot request/response wrapper around a completion backend. Every call
/// is independent: no retries, no caching, no rate limiting.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    model: Arc<dyn CompletionModel>,
    config: Config,
}

impl CompletionClient {
    pub fn new(model: Arc<dyn CompletionModel>, config: Config) -> Self {
        Self { model, config }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    async fn complete<T: DeserializeOwned>(&self, request: CompletionRequest) -> Result<T> {
        let text = self.model.complete(&request).await?;
        decode(&text, &request.schema)
    }

    pub async fn try_request_audit(&self, url: &str, html_snapshot: &str) -> Result<AuditReport> {
        parse_target(url)?;
        let target = normalize_url(url);
        info!("🔍 Requesting audit for {}", target);

        let request = CompletionRequest {
            model: self.config.audit_model.clone(),
            prompt: prompts::audit(&target, html_snapshot),
            schema: schemas::audit_report(),
        };
        let mut report: AuditReport = self.complete(request).await?;
        report.url = target;
        Ok(report)
    }

    /// Audit that degrades to an empty report on any failure.
    pub async fn request_audit(&self, url: &str, html_snapshot: &str) -> AuditReport {
        self.try_request_audit(url, html_snapshot).await.unwrap_or_else(|e| {
            warn!("⚠️ Audit for {} failed: {}", url, e);
            AuditReport::default()
        })
    }

    pub async fn try_request_keyword_set(&self, seed: &str) -> Result<Vec<KeywordMetric>> {
        info!("🔑 Requesting keyword set for \"{}\"", seed);
        let request = CompletionRequest {
            model: self.config.keyword_model.clone(),
            prompt: prompts::keyword_set(seed),
            schema: schemas::keyword_set(),
        };
        let keywords: Vec<KeywordMetric> = self.complete(request).await?;
        if keywords.len() != prompts::KEYWORD_COUNT {
            warn!(
                "Asked for {} keywords for \"{}\", got {}",
                prompts::KEYWORD_COUNT,
                seed,
                keywords.len()
            );
        }
        Ok(keywords)
    }

    /// Keyword set that degrades to an empty list on any failure.
    pub async fn request_keyword_set(&self, seed: &str) -> Vec<KeywordMetric> {
        self.try_request_keyword_set(seed).await.unwrap_or_else(|e| {
            warn!("⚠️ Keyword request for \"{}\" failed: {}", seed, e);
            Vec::new()
        })
    }

    pub async fn try_request_article(&self, topic: &str, plan: UserPlan) -> Result<ArticleDraft> {
        info!(
            "✍️ Requesting {}-word article on \"{}\" ({} plan)",
            plan.article_word_count(),
            topic,
            plan
        );
        let request = CompletionRequest {
            model: self.config.article_model.clone(),
            prompt: prompts::article(topic, plan),
            schema: schemas::article_draft(),
        };
        self.complete(request).await
    }

    /// Article that degrades to an empty draft on any failure.
    pub async fn request_article(&self, topic: &str, plan: UserPlan) -> ArticleDraft {
        self.try_request_article(topic, plan).await.unwrap_or_else(|e| {
            warn!("⚠️ Article request for \"{}\" failed: {}", topic, e);
            ArticleDraft::default()
        })
    }
}
