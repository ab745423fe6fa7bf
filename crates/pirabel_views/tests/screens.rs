use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use pirabel_core::{DemoAuthenticator, Error, Session};
use pirabel_inference::client::CompletionClient;
use pirabel_inference::models::ScriptedModel;
use pirabel_inference::Config;
use pirabel_snapshot::SimulatedSnapshot;
use pirabel_views::{AuditState, AuditView, KdSort, KeywordTable, WriterView, ANALYSIS_FAILED};

fn client(model: &Arc<ScriptedModel>) -> CompletionClient {
    CompletionClient::new(model.clone(), Config::dummy())
}

fn keyword_rows(seed: &str) -> String {
    let rows: Vec<_> = (0..15)
        .map(|i| {
            json!({
                "keyword": format!("{seed} {i}"),
                "volume": 1000 + i * 10,
                "kd": (i * 37) % 100,
                "cpc": 1.5,
                "intent": "Commercial",
                "trend": [10, 20, 30]
            })
        })
        .collect();
    serde_json::Value::Array(rows).to_string()
}

fn audit_reply(score: u32, recommendations: usize) -> String {
    let recs: Vec<_> = (0..recommendations)
        .map(|i| {
            json!({
                "type": "warning",
                "category": "performance",
                "message": format!("fix {}", i + 1),
                "suggestion": "do it",
                "impact": 50
            })
        })
        .collect();
    json!({
        "score": score,
        "metaTags": { "title": "t", "description": "d" },
        "headings": { "h1": [], "h2": [], "h3": [], "hierarchyScore": 70 },
        "performance": { "loadSpeed": 1200, "pageSize": "1.1 MB", "requestCount": 44 },
        "coreWebVitals": { "lcp": 2.0, "fid": 20, "cls": 0.05 },
        "security": { "https": true, "securityHeaders": ["HSTS"] },
        "recommendations": recs,
        "images": { "total": 10, "missingAlt": 2 }
    })
    .to_string()
}

#[tokio::test]
async fn test_keyword_search_and_sort_cycle() {
    let model = Arc::new(ScriptedModel::replying([keyword_rows("sustainable fashion")]));
    let client = client(&model);
    let mut table = KeywordTable::new();

    assert_eq!(table.search(&client, "sustainable fashion").await.unwrap(), 15);
    let original: Vec<String> = table.rows().iter().map(|r| r.keyword.clone()).collect();

    table.toggle_kd_sort();
    let kds: Vec<f64> = table.rows().iter().map(|r| r.kd).collect();
    assert!(kds.windows(2).all(|w| w[0] <= w[1]));

    table.toggle_kd_sort();
    let kds: Vec<f64> = table.rows().iter().map(|r| r.kd).collect();
    assert!(kds.windows(2).all(|w| w[0] >= w[1]));

    assert_eq!(table.toggle_kd_sort(), KdSort::Unsorted);
    let restored: Vec<String> = table.rows().iter().map(|r| r.keyword.clone()).collect();
    assert_eq!(restored, original);
}

#[tokio::test]
async fn test_failed_keyword_search_keeps_previous_rows() {
    let model = Arc::new(ScriptedModel::replying([keyword_rows("tea")]));
    model.push_failure("HTTP 500").await;
    let client = client(&model);
    let mut table = KeywordTable::new();

    table.search(&client, "tea").await.unwrap();
    assert!(table.search(&client, "coffee").await.is_err());
    assert_eq!(table.len(), 15);
    assert!(matches!(table.search(&client, " ").await, Err(Error::EmptyInput(_))));
}

#[tokio::test]
async fn test_audit_flow_and_export() {
    let model = Arc::new(ScriptedModel::replying([audit_reply(84, 12)]));
    let client = client(&model);
    let mut view = AuditView::new();

    view.run(&client, &SimulatedSnapshot, "example.com").await.unwrap();
    assert_eq!(view.score_display().as_deref(), Some("84"));
    assert_eq!(view.recommendations().len(), 12);

    let layout = view.export(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()).unwrap();
    assert_eq!(layout.recommendation_lines().count(), 10);
    assert_eq!(layout.file_stem, "pirabel-audit-https___example_com");

    let requests = model.requests().await;
    assert!(requests[0].prompt.contains("HTML from https://example.com:"));
    assert!(requests[0].prompt.contains("https://example.com"));
}

#[tokio::test]
async fn test_audit_failure_shows_generic_message() {
    let model = Arc::new(ScriptedModel::replying(["{\"score\": 9".to_string()]));
    let client = client(&model);
    let mut view = AuditView::new();

    let state = view.run(&client, &SimulatedSnapshot, "example.com").await.unwrap();
    assert_eq!(state, &AuditState::Failed(ANALYSIS_FAILED.to_string()));
    assert!(view.export(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()).is_none());
}

#[tokio::test]
async fn test_writer_uses_session_plan() {
    let draft = json!({
        "title": "Tea Guide",
        "content": "<h2>Tea</h2><p>Green tea and black tea.</p>",
        "outline": ["Tea"],
        "targetKeywords": ["green tea", "oolong"]
    });
    let model = Arc::new(ScriptedModel::replying([draft.to_string()]));
    let client = client(&model);
    let session = Session::new(DemoAuthenticator::profile_for("admin@pirabel.io"));

    let mut view = WriterView::new("tea");
    view.generate(&client, &session).await.unwrap();
    assert!(model.requests().await[0].prompt.contains("5000-word"));

    let density = view.density();
    assert_eq!(density.len(), 2);
    assert_eq!(density[0].count, 1);
    assert_eq!(density[1].count, 0);
    assert_eq!(view.word_count(), 5);
}
