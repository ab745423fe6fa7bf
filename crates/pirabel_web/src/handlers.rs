use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use pirabel_core::i18n::{self, Language};
use pirabel_core::target::{normalize_url, parse_target};
use pirabel_core::{AdminStats, ArticleDraft, AuditReport, Error, KeywordMetric, UserProfile};
use pirabel_views::admin::{self, AccountRow};
use pirabel_views::billing::{self, PlanOffer};
use pirabel_views::dashboard::{self, DashboardOverview};
use pirabel_views::tracker::{self, RankOverview};

use crate::error::ApiError;
use crate::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct AuditRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct KeywordRequest {
    #[serde(default)]
    pub seed: String,
}

#[derive(Debug, Deserialize)]
pub struct ArticleRequest {
    #[serde(default)]
    pub topic: String,
}

fn require(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(Error::EmptyInput(field).into());
    }
    Ok(())
}

pub async fn login(State(state): State<Arc<AppState>>, Json(body): Json<LoginRequest>) -> ApiResult<LoginResponse> {
    let session = state
        .auth
        .login(&body.email, &body.password)
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    info!("👤 {} signed in ({} plan)", session.user.email, session.plan());
    let response = LoginResponse {
        token: session.token.to_string(),
        user: session.user.clone(),
    };
    state.insert_session(session).await;
    Ok(Json(response))
}

pub async fn current_user(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<UserProfile> {
    Ok(Json(state.session(&headers).await?.user))
}

pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Result<StatusCode, ApiError> {
    let session = state.session(&headers).await?;
    state.remove_session(session.token).await;
    info!("👋 {} signed out", session.user.email);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn audit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<AuditRequest>,
) -> ApiResult<AuditReport> {
    state.session(&headers).await?;
    require("url", &body.url)?;
    parse_target(&body.url)?;
    let target = normalize_url(&body.url);
    let html = state.snapshot.snapshot(&target).await.map_err(ApiError::Audit)?;
    let report = state
        .client
        .try_request_audit(&target, &html)
        .await
        .map_err(ApiError::Audit)?;
    Ok(Json(report))
}

pub async fn keywords(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<KeywordRequest>,
) -> ApiResult<Vec<KeywordMetric>> {
    state.session(&headers).await?;
    require("seed", &body.seed)?;
    Ok(Json(state.client.try_request_keyword_set(body.seed.trim()).await?))
}

pub async fn article(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ArticleRequest>,
) -> ApiResult<ArticleDraft> {
    let session = state.session(&headers).await?;
    require("topic", &body.topic)?;
    Ok(Json(state.client.try_request_article(body.topic.trim(), session.plan()).await?))
}

pub async fn plans() -> impl IntoResponse {
    Json::<Vec<PlanOffer>>(billing::plan_catalogue())
}

pub async fn admin_stats(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<AdminStats> {
    let session = state.session(&headers).await?;
    admin::platform_stats(&session).map(Json).map_err(|_| ApiError::Forbidden)
}

pub async fn admin_accounts(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<Vec<AccountRow>> {
    let session = state.session(&headers).await?;
    admin::recent_accounts(&session).map(Json).map_err(|_| ApiError::Forbidden)
}

pub async fn dashboard(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<DashboardOverview> {
    state.session(&headers).await?;
    Ok(Json(dashboard::overview()))
}

pub async fn ranks(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<RankOverview> {
    state.session(&headers).await?;
    Ok(Json(tracker::rank_overview()))
}

pub async fn translations(Path(lang): Path<String>) -> ApiResult<BTreeMap<&'static str, &'static str>> {
    let lang: Language = lang.parse().map_err(|_| ApiError::NotFound)?;
    Ok(Json(i18n::table(lang)))
}
