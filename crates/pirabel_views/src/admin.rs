use serde::Serialize;

use pirabel_core::{AdminStats, Result, Session, UserPlan};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRow {
    pub email: &'static str,
    pub plan: UserPlan,
    pub joined: &'static str,
    pub active: bool,
}

/// Mock platform figures; only administrators may see them.
pub fn platform_stats(session: &Session) -> Result<AdminStats> {
    session.require_admin()?;
    let total_users = 2_482u64;
    let conversion_rate = 14.2;
    Ok(AdminStats {
        total_users,
        mrr: 22_400.0,
        total_audits: 14_204,
        conversion_rate,
        active_subscriptions: (total_users as f64 * conversion_rate / 100.0).round() as u64,
    })
}

pub fn recent_accounts(session: &Session) -> Result<Vec<AccountRow>> {
    session.require_admin()?;
    Ok(vec![
        AccountRow { email: "alex@startup.io", plan: UserPlan::Pro, joined: "2024-05-12", active: true },
        AccountRow { email: "marta@agency.com", plan: UserPlan::Agency, joined: "2024-05-14", active: true },
        AccountRow { email: "john@freelance.net", plan: UserPlan::Free, joined: "2024-05-15", active: false },
        AccountRow { email: "dev@tech.co", plan: UserPlan::Agency, joined: "2024-05-16", active: true },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pirabel_core::DemoAuthenticator;

    #[test]
    fn test_stats_require_admin() {
        let user = Session::new(DemoAuthenticator::profile_for("alex@example.com"));
        assert!(platform_stats(&user).is_err());
        assert!(recent_accounts(&user).is_err());

        let admin = Session::new(DemoAuthenticator::profile_for("admin@pirabel.io"));
        let stats = platform_stats(&admin).unwrap();
        assert_eq!(stats.total_users, 2482);
        assert_eq!(stats.active_subscriptions, 352);
        assert_eq!(recent_accounts(&admin).unwrap().len(), 4);
    }
}
