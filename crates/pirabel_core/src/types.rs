use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Result of a deep audit as asserted by the completion service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Normalized target. Filled in by the client, never by the model.
    #[serde(default)]
    pub url: String,
    pub score: f64,
    pub meta_tags: MetaTags,
    pub headings: Headings,
    pub performance: Performance,
    pub core_web_vitals: CoreWebVitals,
    pub security: Security,
    pub recommendations: Vec<Recommendation>,
    pub images: Images,
}

impl AuditReport {
    /// Score as shown in the dashboard gauge.
    pub fn score_display(&self) -> String {
        format!("{}", self.score.round() as i64)
    }

    pub fn critical_count(&self) -> usize {
        self.recommendations
            .iter()
            .filter(|r| r.kind == RecommendationType::Critical)
            .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub hierarchy_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Milliseconds.
    pub load_speed: f64,
    pub page_size: String,
    pub request_count: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreWebVitals {
    /// Largest Contentful Paint, seconds.
    pub lcp: f64,
    /// First Input Delay, milliseconds.
    pub fid: f64,
    /// Cumulative Layout Shift.
    pub cls: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub https: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_expiry: Option<String>,
    pub security_headers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Images {
    pub total: f64,
    pub missing_alt: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub category: RecommendationCategory,
    pub message: String,
    pub suggestion: String,
    pub impact: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Critical,
    Warning,
    #[default]
    Info,
}

impl RecommendationType {
    pub const ALL: [&'static str; 3] = ["critical", "warning", "info"];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Performance,
    #[default]
    Seo,
    Security,
    Content,
}

impl RecommendationCategory {
    pub const ALL: [&'static str; 4] = ["performance", "seo", "security", "content"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Seo => "seo",
            Self::Security => "security",
            Self::Content => "content",
        }
    }
}

/// One suggested keyword with its model-estimated metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordMetric {
    pub keyword: String,
    pub volume: f64,
    /// Keyword difficulty, 0-100.
    pub kd: f64,
    pub cpc: f64,
    pub intent: SearchIntent,
    pub trend: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchIntent {
    #[default]
    Informational,
    Commercial,
    Transactional,
    Navigational,
}

impl SearchIntent {
    pub const ALL: [&'static str; 4] = ["Informational", "Commercial", "Transactional", "Navigational"];

    pub fn as_str(&self) -> &'static str {
        Self::ALL[*self as usize]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    /// HTML-flavored body.
    pub content: String,
    pub outline: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_score: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserPlan {
    #[default]
    Free,
    Pro,
    Agency,
}

impl UserPlan {
    /// Target length of a generated article for this tier.
    pub fn article_word_count(&self) -> u32 {
        match self {
            UserPlan::Free => 1000,
            UserPlan::Pro => 3000,
            UserPlan::Agency => 5000,
        }
    }
}

impl fmt::Display for UserPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UserPlan::Free => "FREE",
            UserPlan::Pro => "PRO",
            UserPlan::Agency => "AGENCY",
        };
        f.write_str(name)
    }
}

impl FromStr for UserPlan {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" | "entry" => Ok(UserPlan::Free),
            "pro" | "mid" => Ok(UserPlan::Pro),
            "agency" | "top" => Ok(UserPlan::Agency),
            other => Err(Error::External(anyhow::anyhow!("Unknown plan: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credits {
    pub audits: u32,
    pub keywords: u32,
    pub ai_words: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub plan: UserPlan,
    pub credits_remaining: Credits,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub mrr: f64,
    pub total_audits: u64,
    pub conversion_rate: f64,
    pub active_subscriptions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_word_counts() {
        assert_eq!(UserPlan::Free.article_word_count(), 1000);
        assert_eq!(UserPlan::Pro.article_word_count(), 3000);
        assert_eq!(UserPlan::Agency.article_word_count(), 5000);
    }

    #[test]
    fn test_plan_parsing() {
        assert_eq!("agency".parse::<UserPlan>().unwrap(), UserPlan::Agency);
        assert_eq!("mid".parse::<UserPlan>().unwrap(), UserPlan::Pro);
        assert_eq!(" FREE ".parse::<UserPlan>().unwrap(), UserPlan::Free);
        assert!("enterprise".parse::<UserPlan>().is_err());
    }

    #[test]
    fn test_recommendation_wire_names() {
        let rec: Recommendation = serde_json::from_value(serde_json::json!({
            "type": "critical",
            "category": "security",
            "message": "Missing HSTS",
            "suggestion": "Add Strict-Transport-Security",
            "impact": 80
        }))
        .unwrap();
        assert_eq!(rec.kind, RecommendationType::Critical);
        assert_eq!(rec.category, RecommendationCategory::Security);

        let back = serde_json::to_value(&rec).unwrap();
        assert_eq!(back["type"], "critical");
    }

    #[test]
    fn test_score_display_rounds() {
        let report = AuditReport { score: 83.6, ..Default::default() };
        assert_eq!(report.score_display(), "84");
    }
}
