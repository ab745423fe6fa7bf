use axum::http::{header, HeaderMap};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use pirabel_core::{Authenticator, Session};
use pirabel_inference::CompletionClient;
use pirabel_snapshot::SnapshotSource;

use crate::error::ApiError;

pub const SESSION_TTL_HOURS: i64 = 12;
pub const MAX_SESSIONS: usize = 10_000;

pub struct AppState {
    pub client: CompletionClient,
    pub snapshot: Arc<dyn SnapshotSource>,
    pub auth: Arc<dyn Authenticator>,
    sessions: RwLock<HashMap<Uuid, Session>>,
    session_ttl: Duration,
    max_sessions: usize,
}

impl AppState {
    pub fn new(client: CompletionClient, snapshot: Arc<dyn SnapshotSource>, auth: Arc<dyn Authenticator>) -> Self {
        Self {
            client,
            snapshot,
            auth,
            sessions: RwLock::new(HashMap::new()),
            session_ttl: Duration::hours(SESSION_TTL_HOURS),
            max_sessions: MAX_SESSIONS,
        }
    }

    pub fn with_session_limits(mut self, ttl: Duration, max_sessions: usize) -> Self {
        self.session_ttl = ttl;
        self.max_sessions = max_sessions.max(1);
        self
    }

    fn is_live(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now - session.started_at < self.session_ttl
    }

    /// Stores a new session. Expired entries are dropped first, then the
    /// oldest ones until the map is under its cap.
    pub async fn insert_session(&self, session: Session) {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| self.is_live(s, now));
        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions.values().min_by_key(|s| s.started_at).map(|s| s.token) else {
                break;
            };
            sessions.remove(&oldest);
        }
        sessions.insert(session.token, session);
    }

    pub async fn remove_session(&self, token: Uuid) -> Option<Session> {
        self.sessions.write().await.remove(&token)
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Resolves the `Authorization: Bearer <token>` header to a live session.
    pub async fn session(&self, headers: &HeaderMap) -> Result<Session, ApiError> {
        let token = bearer_token(headers).ok_or(ApiError::Unauthorized)?;
        let session = self.sessions.read().await.get(&token).cloned();
        match session {
            Some(session) if self.is_live(&session, Utc::now()) => Ok(session),
            Some(_) => {
                self.remove_session(token).await;
                Err(ApiError::Unauthorized)
            }
            None => Err(ApiError::Unauthorized),
        }
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}
