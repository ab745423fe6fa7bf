use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{Credits, Role, UserPlan, UserProfile};
use crate::{Error, Result};

/// Logged-in user context. Created by a successful login, dropped on logout,
/// and handed explicitly to whatever needs to know who is acting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Uuid,
    pub user: UserProfile,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: UserProfile) -> Self {
        Self {
            token: Uuid::new_v4(),
            user,
            started_at: Utc::now(),
        }
    }

    pub fn plan(&self) -> UserPlan {
        self.user.plan
    }

    pub fn require_admin(&self) -> Result<()> {
        if self.user.is_admin() {
            Ok(())
        } else {
            Err(Error::Auth(format!("{} is not an administrator", self.user.email)))
        }
    }
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<Session>;
}

/// Placeholder authenticator: accepts any non-empty credentials and derives
/// the role from the email text. Replace with a real credential/claims check
/// before exposing anything.
#[derive(Debug, Default, Clone)]
pub struct DemoAuthenticator;

impl DemoAuthenticator {
    pub const STARTING_CREDITS: Credits = Credits {
        audits: 50,
        keywords: 200,
        ai_words: 50_000,
    };

    pub fn profile_for(email: &str) -> UserProfile {
        let is_admin = email.contains("admin");
        UserProfile {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            plan: if is_admin { UserPlan::Agency } else { UserPlan::Pro },
            credits_remaining: Self::STARTING_CREDITS,
            role: if is_admin { Role::Admin } else { Role::User },
            joined_at: Utc::now(),
        }
    }
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(Error::Auth("email and password are required".to_string()));
        }
        tracing::warn!("🔓 Demo login for {} (no credential check)", email);
        Ok(Session::new(Self::profile_for(email.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let auth = DemoAuthenticator;
        assert!(auth.login("", "secret").await.is_err());
        assert!(auth.login("alex@example.com", "").await.is_err());
        assert!(auth.login("   ", "secret").await.is_err());
    }

    #[tokio::test]
    async fn test_login_builds_profile() {
        let session = DemoAuthenticator.login("alex@example.com", "pw").await.unwrap();
        assert_eq!(session.user.plan, UserPlan::Pro);
        assert_eq!(session.user.role, Role::User);
        assert_eq!(session.user.credits_remaining.ai_words, 50_000);
        assert!(session.require_admin().is_err());
    }

    #[tokio::test]
    async fn test_admin_placeholder_rule() {
        let session = DemoAuthenticator.login("admin@pirabel.io", "pw").await.unwrap();
        assert_eq!(session.plan(), UserPlan::Agency);
        assert!(session.require_admin().is_ok());
    }

    #[tokio::test]
    async fn test_sessions_get_distinct_tokens() {
        let a = DemoAuthenticator.login("a@x.io", "pw").await.unwrap();
        let b = DemoAuthenticator.login("a@x.io", "pw").await.unwrap();
        assert_ne!(a.token, b.token);
    }
}
