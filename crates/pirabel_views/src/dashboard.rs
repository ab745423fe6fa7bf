use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    /// Week-over-week change as displayed, e.g. `+12%` or `-4`.
    pub change: &'static str,
}

impl StatCard {
    pub fn is_positive(&self) -> bool {
        self.change.starts_with('+')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyVisibility {
    pub day: &'static str,
    pub traffic: u32,
    pub rank: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteAlert {
    pub site: &'static str,
    pub message: &'static str,
    pub priority: AlertPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Stable,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopKeyword {
    pub keyword: &'static str,
    pub position: u32,
    pub volume: &'static str,
    pub trend: Trend,
}

/// Landing overview. All figures are mock data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub stats: Vec<StatCard>,
    pub visibility: Vec<DailyVisibility>,
    pub alerts: Vec<SiteAlert>,
    pub top_keywords: Vec<TopKeyword>,
}

impl DashboardOverview {
    pub fn weekly_traffic(&self) -> u32 {
        self.visibility.iter().map(|d| d.traffic).sum()
    }

    pub fn high_priority_alerts(&self) -> impl Iterator<Item = &SiteAlert> {
        self.alerts.iter().filter(|a| a.priority == AlertPriority::High)
    }
}

pub fn overview() -> DashboardOverview {
    let stat = |label, value, change| StatCard { label, value, change };
    let day = |day, traffic, rank| DailyVisibility { day, traffic, rank };
    let alert = |site, message, priority| SiteAlert { site, message, priority };
    let keyword = |keyword, position, volume, trend| TopKeyword { keyword, position, volume, trend };

    DashboardOverview {
        stats: vec![
            stat("Avg SEO Score", "84", "+2.5%"),
            stat("Organic Traffic", "12,402", "+12%"),
            stat("Active Keywords", "142", "-4"),
            stat("Backlinks", "1,290", "+24"),
        ],
        visibility: vec![
            day("Mon", 4000, 24),
            day("Tue", 3000, 18),
            day("Wed", 2000, 22),
            day("Thu", 2780, 25),
            day("Fri", 1890, 30),
            day("Sat", 2390, 28),
            day("Sun", 3490, 21),
        ],
        alerts: vec![
            alert("mywebsite.com", "Broken canonical tags detected", AlertPriority::High),
            alert("shop.net", "Large CLS shift on mobile", AlertPriority::Medium),
            alert("blog.com", "404 error spikes (+120%)", AlertPriority::High),
            alert("agency.io", "SSL Certificate expiring", AlertPriority::Medium),
        ],
        top_keywords: vec![
            keyword("best seo tools 2024", 2, "12.4k", Trend::Up),
            keyword("ai marketing platform", 4, "8.1k", Trend::Up),
            keyword("seo auditor chrome extension", 1, "2.3k", Trend::Stable),
            keyword("rank tracker dashboard", 12, "5.6k", Trend::Down),
        ],
    }
}
