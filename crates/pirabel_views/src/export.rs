//! White-label audit export. Lays text out at fixed page coordinates the way
//! the printed report does; there is no pagination, so only the first
//! [`MAX_RECOMMENDATIONS`] recommendations are placed.

use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use pirabel_core::target::slugify_url;
use pirabel_core::{AuditReport, Result};

/// A4 width in millimetres.
pub const PAGE_WIDTH: f64 = 210.0;
pub const MAX_RECOMMENDATIONS: usize = 10;
const MARGIN: f64 = 20.0;
const FIRST_RECOMMENDATION_Y: f64 = 105.0;
const LINE_HEIGHT: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub text: String,
}

impl TextLine {
    fn new(x: f64, y: f64, font_size: f64, text: impl Into<String>) -> Self {
        Self { x, y, font_size, text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLayout {
    pub file_stem: String,
    pub lines: Vec<TextLine>,
}

impl ReportLayout {
    pub fn for_report(report: &AuditReport, date: NaiveDate) -> Self {
        let mut lines = vec![
            TextLine::new(MARGIN, 30.0, 24.0, "PIRABEL SEO AUDIT"),
            TextLine::new(MARGIN, 42.0, 10.0, format!("URL: {}", report.url)),
            TextLine::new(PAGE_WIDTH - 60.0, 42.0, 10.0, format!("DATE: {}", date.format("%Y-%m-%d"))),
            TextLine::new(MARGIN, 70.0, 16.0, format!("OVERALL SEO SCORE: {}/100", report.score_display())),
            TextLine::new(MARGIN, 90.0, 14.0, "TOP RECOMMENDATIONS"),
        ];
        lines.extend(
            report
                .recommendations
                .iter()
                .take(MAX_RECOMMENDATIONS)
                .enumerate()
                .map(|(i, rec)| {
                    TextLine::new(
                        MARGIN,
                        FIRST_RECOMMENDATION_Y + i as f64 * LINE_HEIGHT,
                        10.0,
                        format!("{}. [{}] {}", i + 1, rec.category.as_str().to_uppercase(), rec.message),
                    )
                }),
        );

        Self {
            file_stem: format!("pirabel-audit-{}", slugify_url(&report.url)),
            lines,
        }
    }

    pub fn recommendation_lines(&self) -> impl Iterator<Item = &TextLine> {
        self.lines.iter().filter(|l| l.y >= FIRST_RECOMMENDATION_Y)
    }

    /// Plain-text rendering, top to bottom, left to right.
    pub fn render_text(&self) -> String {
        let mut lines: Vec<&TextLine> = self.lines.iter().collect();
        lines.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

        let mut out = String::new();
        let mut last_y = None;
        for line in lines {
            if last_y == Some(line.y) {
                out.push_str("    ");
            } else if last_y.is_some() {
                out.push('\n');
            }
            out.push_str(&line.text);
            last_y = Some(line.y);
        }
        out.push('\n');
        out
    }

    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.txt", self.file_stem));
        fs::write(&path, self.render_text())?;
        tracing::info!("📄 Report written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pirabel_core::{Recommendation, RecommendationCategory};

    fn report(recommendations: usize) -> AuditReport {
        AuditReport {
            url: "https://example.com".to_string(),
            score: 84.0,
            recommendations: (0..recommendations)
                .map(|i| Recommendation {
                    category: RecommendationCategory::Performance,
                    message: format!("issue {}", i + 1),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_only_first_ten_recommendations_are_placed() {
        let layout = ReportLayout::for_report(&report(12), date());
        let recs: Vec<_> = layout.recommendation_lines().collect();
        assert_eq!(recs.len(), 10);
        assert_eq!(recs[0].text, "1. [PERFORMANCE] issue 1");
        assert_eq!(recs[0].y, 105.0);
        assert_eq!(recs[9].text, "10. [PERFORMANCE] issue 10");
        assert_eq!(recs[9].y, 195.0);
    }

    #[test]
    fn test_header_and_file_name() {
        let layout = ReportLayout::for_report(&report(0), date());
        assert_eq!(layout.file_stem, "pirabel-audit-https___example_com");
        let text = layout.render_text();
        assert!(text.starts_with("PIRABEL SEO AUDIT\n"));
        assert!(text.contains("URL: https://example.com    DATE: 2024-06-15"));
        assert!(text.contains("OVERALL SEO SCORE: 84/100"));
    }

    #[test]
    fn test_write_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ReportLayout::for_report(&report(3), date());
        let path = layout.write_to(dir.path()).unwrap();
        assert!(path.ends_with("pirabel-audit-https___example_com.txt"));
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("3. [PERFORMANCE] issue 3"));
    }
}
