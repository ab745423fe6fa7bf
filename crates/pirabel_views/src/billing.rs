use serde::Serialize;

use pirabel_core::{Credits, UserPlan};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOffer {
    pub plan: UserPlan,
    pub monthly_price_usd: u32,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub popular: bool,
}

pub fn plan_catalogue() -> Vec<PlanOffer> {
    vec![
        PlanOffer {
            plan: UserPlan::Free,
            monthly_price_usd: 0,
            description: "Ideal for small personal projects and basic SEO discovery.",
            features: vec!["3 Deep Audits per day", "5 Keyword searches", "Standard UI access", "Community support"],
            popular: false,
        },
        PlanOffer {
            plan: UserPlan::Pro,
            monthly_price_usd: 29,
            description: "The ultimate toolkit for freelance SEOs and content marketers.",
            features: vec![
                "Unlimited Deep Audits",
                "3k Word AI Architect",
                "Competitor Gap analysis",
                "Daily Rank Tracking",
                "Priority Support",
            ],
            popular: true,
        },
        PlanOffer {
            plan: UserPlan::Agency,
            monthly_price_usd: 99,
            description: "Built for scale. Professional reporting for enterprise clients.",
            features: vec![
                "White-label PDF Engine",
                "5k Word AI Architect",
                "Full API & Webhook Access",
                "Multi-user Team Seats",
                "24/7 Dedicated Agent",
            ],
            popular: false,
        },
    ]
}

/// Display-only usage bar. Nothing is ever deducted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditMeter {
    pub label: &'static str,
    pub used: u32,
    pub total: u32,
}

impl CreditMeter {
    pub fn remaining_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.total - self.used.min(self.total)) / f64::from(self.total) * 100.0
    }
}

pub fn credit_meters(remaining: &Credits) -> Vec<CreditMeter> {
    let meter = |label, total: u32, left: u32| CreditMeter {
        label,
        used: total.saturating_sub(left),
        total,
    };
    vec![
        meter("SEO Audits", 100, remaining.audits),
        meter("Keyword Queries", 1000, remaining.keywords),
        meter("AI Words", 50_000, remaining.ai_words),
    ]
}
