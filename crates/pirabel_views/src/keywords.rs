use serde::Serialize;
use tracing::error;

use pirabel_core::{Error, KeywordMetric, Result};
use pirabel_inference::CompletionClient;

/// Difficulty column sort. Toggling walks Unsorted → Ascending → Descending → Unsorted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum KdSort {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl KdSort {
    pub fn next(self) -> Self {
        match self {
            KdSort::Unsorted => KdSort::Ascending,
            KdSort::Ascending => KdSort::Descending,
            KdSort::Descending => KdSort::Unsorted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DifficultyBand {
    Easy,
    Medium,
    Hard,
}

impl DifficultyBand {
    pub fn of(kd: f64) -> Self {
        if kd < 30.0 {
            DifficultyBand::Easy
        } else if kd < 70.0 {
            DifficultyBand::Medium
        } else {
            DifficultyBand::Hard
        }
    }
}

/// Keyword explorer table. Rows keep the order the service returned them in.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    rows: Vec<KeywordMetric>,
    sort: KdSort,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&self) -> KdSort {
        self.sort
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replaces the rows and resets the sort.
    pub fn load(&mut self, rows: Vec<KeywordMetric>) {
        self.rows = rows;
        self.sort = KdSort::Unsorted;
    }

    pub fn toggle_kd_sort(&mut self) -> KdSort {
        self.sort = self.sort.next();
        self.sort
    }

    pub fn rows(&self) -> Vec<&KeywordMetric> {
        let mut rows: Vec<&KeywordMetric> = self.rows.iter().collect();
        match self.sort {
            KdSort::Unsorted => {}
            KdSort::Ascending => rows.sort_by(|a, b| a.kd.total_cmp(&b.kd)),
            KdSort::Descending => rows.sort_by(|a, b| b.kd.total_cmp(&a.kd)),
        }
        rows
    }

    /// Runs one search. On failure the previous rows stay on screen.
    pub async fn search(&mut self, client: &CompletionClient, seed: &str) -> Result<usize> {
        if seed.trim().is_empty() {
            return Err(Error::EmptyInput("seed"));
        }
        match client.try_request_keyword_set(seed).await {
            Ok(rows) => {
                self.load(rows);
                Ok(self.len())
            }
            Err(e) => {
                error!("❌ Keyword search for \"{}\" failed: {}", seed, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(keyword: &str, kd: f64) -> KeywordMetric {
        KeywordMetric {
            keyword: keyword.to_string(),
            kd,
            ..Default::default()
        }
    }

    fn names(table: &KeywordTable) -> Vec<&str> {
        table.rows().iter().map(|r| r.keyword.as_str()).collect()
    }

    #[test]
    fn test_sort_cycle() {
        let mut table = KeywordTable::new();
        table.load(vec![row("b", 50.0), row("a", 10.0), row("c", 90.0), row("d", 50.0)]);
        assert_eq!(names(&table), ["b", "a", "c", "d"]);

        assert_eq!(table.toggle_kd_sort(), KdSort::Ascending);
        assert_eq!(names(&table), ["a", "b", "d", "c"]);

        assert_eq!(table.toggle_kd_sort(), KdSort::Descending);
        assert_eq!(names(&table), ["c", "b", "d", "a"]);

        assert_eq!(table.toggle_kd_sort(), KdSort::Unsorted);
        assert_eq!(names(&table), ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_load_resets_sort() {
        let mut table = KeywordTable::new();
        table.toggle_kd_sort();
        table.load(vec![row("x", 1.0)]);
        assert_eq!(table.sort(), KdSort::Unsorted);
    }

    #[test]
    fn test_difficulty_bands() {
        assert_eq!(DifficultyBand::of(0.0), DifficultyBand::Easy);
        assert_eq!(DifficultyBand::of(29.9), DifficultyBand::Easy);
        assert_eq!(DifficultyBand::of(30.0), DifficultyBand::Medium);
        assert_eq!(DifficultyBand::of(69.0), DifficultyBand::Medium);
        assert_eq!(DifficultyBand::of(70.0), DifficultyBand::Hard);
    }
}
