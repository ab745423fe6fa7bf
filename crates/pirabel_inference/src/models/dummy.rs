use serde_json::{json, Value};
use std::fmt;

use pirabel_core::{CompletionModel, CompletionRequest, Result, Schema};

const KEYWORD_SUFFIXES: [&str; 15] = [
    "guide", "tips", "for beginners", "near me", "best", "vs alternatives", "price", "reviews",
    "2025", "tools", "examples", "online", "brands", "checklist", "ideas",
];

const INTENTS: [&str; 4] = ["Informational", "Commercial", "Transactional", "Navigational"];

/// Offline backend that answers every request with canned JSON of the
/// requested shape. Used for demos and tests.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Text between the first pair of double quotes, if any.
fn quoted_subject(prompt: &str) -> Option<&str> {
    let start = prompt.find('"')? + 1;
    let len = prompt[start..].find('"')?;
    Some(&prompt[start..start + len])
}

fn keyword_set(seed: &str) -> Value {
    let rows: Vec<Value> = KEYWORD_SUFFIXES
        .iter()
        .enumerate()
        .map(|(i, suffix)| {
            json!({
                "keyword": format!("{} {}", seed, suffix),
                "volume": 12_000 - (i as u64) * 700,
                "kd": (i as u64 * 37) % 100,
                "cpc": ((i as f64) * 0.35 * 100.0).round() / 100.0,
                "intent": INTENTS[i % INTENTS.len()],
                "trend": [40 + i, 42 + i, 45 + i, 44 + i, 48 + i, 51 + i],
            })
        })
        .collect();
    Value::Array(rows)
}

fn audit_report() -> Value {
    let recommendations: Vec<Value> = [
        ("critical", "security", "Missing Strict-Transport-Security header", "Send HSTS with a max-age of at least one year", 85),
        ("critical", "seo", "No canonical link element", "Declare a canonical URL on every indexable page", 78),
        ("warning", "performance", "Render-blocking stylesheets in <head>", "Inline critical CSS and defer the rest", 64),
        ("warning", "content", "Meta description under 70 characters", "Expand the description to 140-160 characters", 52),
        ("warning", "seo", "Multiple pages share the same title", "Make each title unique and keyword-led", 49),
        ("info", "content", "Images without alt text", "Describe every meaningful image", 31),
        ("info", "performance", "No preconnect for third-party origins", "Add preconnect hints for font and analytics hosts", 22),
    ]
    .iter()
    .map(|(kind, category, message, suggestion, impact)| {
        json!({ "type": kind, "category": category, "message": message, "suggestion": suggestion, "impact": impact })
    })
    .collect();

    json!({
        "score": 72,
        "metaTags": { "title": "Enterprise SEO Solutions", "description": "Transform your organic growth." },
        "headings": { "h1": ["Next-Gen SEO"], "h2": ["Advanced Features"], "h3": ["Technical Infrastructure"], "hierarchyScore": 88 },
        "performance": { "loadSpeed": 1340, "pageSize": "1.2 MB", "requestCount": 46 },
        "coreWebVitals": { "lcp": 1.9, "fid": 14, "cls": 0.04 },
        "security": { "https": true, "sslExpiry": "2026-03-01", "securityHeaders": ["Content-Security-Policy", "X-Frame-Options"] },
        "recommendations": recommendations,
        "images": { "total": 12, "missingAlt": 3 }
    })
}

fn article_draft(topic: &str) -> Value {
    let outline = vec![
        format!("What is {}?", topic),
        format!("Why {} matters", topic),
        format!("How to get started with {}", topic),
        "Frequently Asked Questions".to_string(),
    ];
    let body: String = outline
        .iter()
        .map(|h| format!("<h2>{}</h2><p>{} explained. <a href=\"#internal-link\">Related guide</a></p>", h, topic))
        .collect();
    json!({
        "title": format!("The Definitive Guide to {}", topic),
        "content": body,
        "outline": outline,
        "targetKeywords": [topic],
        "seoScore": 81
    })
}

#[async_trait::async_trait]
impl CompletionModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let subject = quoted_subject(&request.prompt).unwrap_or("seo");
        let value = match &request.schema {
            Schema::Array(_) => keyword_set(subject),
            Schema::Object(props) if props.iter().any(|p| p.name == "score") => audit_report(),
            _ => article_draft(subject),
        };
        tracing::debug!("🤖 Dummy completion for {}", request.model);
        Ok(value.to_string())
    }
}
