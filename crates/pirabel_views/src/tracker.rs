use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedKeyword {
    pub keyword: &'static str,
    pub position: u32,
    pub previous: u32,
    pub volume: &'static str,
    pub url: &'static str,
}

impl TrackedKeyword {
    /// Places gained since the previous check; negative when the page dropped.
    pub fn movement(&self) -> i64 {
        i64::from(self.previous) - i64::from(self.position)
    }
}

pub fn tracked_keywords() -> Vec<TrackedKeyword> {
    vec![
        TrackedKeyword { keyword: "ai seo tools", position: 3, previous: 7, volume: "12.4k", url: "/blog/best-ai-seo-tools" },
        TrackedKeyword { keyword: "neural scraper api", position: 1, previous: 1, volume: "2.1k", url: "/products/neural-scraper" },
        TrackedKeyword { keyword: "seo suites for agency", position: 14, previous: 22, volume: "5.6k", url: "/" },
        TrackedKeyword { keyword: "automated ranking platform", position: 8, previous: 6, volume: "8.9k", url: "/features" },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionPoint {
    pub day: u32,
    pub position: u32,
}

/// Day-by-day average position for the visibility chart.
pub fn position_history() -> Vec<PositionPoint> {
    [(1, 12), (2, 10), (3, 11), (4, 8), (5, 7), (6, 4), (7, 3)]
        .into_iter()
        .map(|(day, position)| PositionPoint { day, position })
        .collect()
}

pub fn top_movers(keywords: &[TrackedKeyword], n: usize) -> Vec<&TrackedKeyword> {
    let mut sorted: Vec<&TrackedKeyword> = keywords.iter().collect();
    sorted.sort_by_key(|k| std::cmp::Reverse(k.movement()));
    sorted.truncate(n);
    sorted
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankOverview {
    pub keywords: Vec<TrackedKeyword>,
    pub top_movers: Vec<TrackedKeyword>,
    pub history: Vec<PositionPoint>,
}

pub fn rank_overview() -> RankOverview {
    let keywords = tracked_keywords();
    let top_movers = top_movers(&keywords, 3).into_iter().cloned().collect();
    RankOverview {
        keywords,
        top_movers,
        history: position_history(),
    }
}
