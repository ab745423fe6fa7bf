use chrono::NaiveDate;
use tracing::error;

use pirabel_core::target::normalize_url;
use pirabel_core::{AuditReport, Error, Recommendation, Result};
use pirabel_inference::CompletionClient;
use pirabel_snapshot::SnapshotSource;

use crate::export::ReportLayout;
use crate::ANALYSIS_FAILED;

#[derive(Debug, Clone, PartialEq)]
pub enum AuditState {
    Idle,
    Analyzing { target: String },
    Ready(AuditReport),
    Failed(String),
}

/// SEO scan screen: one URL input, one primary action, one result.
#[derive(Debug, Clone)]
pub struct AuditView {
    state: AuditState,
}

impl Default for AuditView {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditView {
    pub fn new() -> Self {
        Self { state: AuditState::Idle }
    }

    pub fn state(&self) -> &AuditState {
        &self.state
    }

    /// Whether the primary action is currently disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, AuditState::Analyzing { .. })
    }

    /// Starts a scan and returns the normalized target.
    pub fn begin(&mut self, input: &str) -> Result<String> {
        if input.trim().is_empty() {
            return Err(Error::EmptyInput("url"));
        }
        if self.is_busy() {
            return Err(Error::InFlight);
        }
        let target = normalize_url(input);
        self.state = AuditState::Analyzing { target: target.clone() };
        Ok(target)
    }

    /// Stores the outcome. Failures replace any earlier report with the generic message.
    pub fn finish(&mut self, outcome: Result<AuditReport>) {
        self.state = settle(outcome);
    }

    pub async fn run(
        &mut self,
        client: &CompletionClient,
        source: &dyn SnapshotSource,
        input: &str,
    ) -> Result<&AuditState> {
        let target = self.begin(input)?;
        let mut scan = ScanGuard(&mut self.state);
        let outcome = match source.snapshot(&target).await {
            Ok(html) => client.try_request_audit(&target, &html).await,
            Err(e) => Err(e),
        };
        *scan.0 = settle(outcome);
        drop(scan);
        Ok(&self.state)
    }

    pub fn report(&self) -> Option<&AuditReport> {
        match &self.state {
            AuditState::Ready(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            AuditState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn score_display(&self) -> Option<String> {
        self.report().map(AuditReport::score_display)
    }

    /// Every recommendation, in service order.
    pub fn recommendations(&self) -> &[Recommendation] {
        self.report().map(|r| r.recommendations.as_slice()).unwrap_or(&[])
    }

    pub fn export(&self, date: NaiveDate) -> Option<ReportLayout> {
        self.report().map(|r| ReportLayout::for_report(r, date))
    }
}

fn settle(outcome: Result<AuditReport>) -> AuditState {
    match outcome {
        Ok(report) => AuditState::Ready(report),
        Err(e) => {
            error!("❌ Audit failed: {}", e);
            AuditState::Failed(ANALYSIS_FAILED.to_string())
        }
    }
}

/// Puts an abandoned scan back to `Idle` so the view does not stay busy
/// when the `run` future is dropped before it completes.
struct ScanGuard<'a>(&'a mut AuditState);

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        if matches!(self.0, AuditState::Analyzing { .. }) {
            *self.0 = AuditState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pirabel_inference::models::ScriptedModel;
    use pirabel_inference::Config;
    use std::sync::Arc;
    use std::time::Duration;

    struct StalledSource;

    #[async_trait]
    impl SnapshotSource for StalledSource {
        fn name(&self) -> &str {
            "stalled"
        }

        async fn snapshot(&self, _url: &str) -> Result<String> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_abandoned_run_leaves_view_usable() {
        let client = CompletionClient::new(Arc::new(ScriptedModel::new()), Config::dummy());
        let mut view = AuditView::new();

        let abandoned = tokio::time::timeout(Duration::from_millis(20), view.run(&client, &StalledSource, "example.com")).await;
        assert!(abandoned.is_err());
        assert_eq!(view.state(), &AuditState::Idle);
        assert_eq!(view.begin("example.com").unwrap(), "https://example.com");
    }

    #[test]
    fn test_begin_guards() {
        let mut view = AuditView::new();
        assert!(matches!(view.begin(""), Err(Error::EmptyInput("url"))));
        assert_eq!(view.begin("example.com").unwrap(), "https://example.com");
        assert!(view.is_busy());
        assert!(matches!(view.begin("other.com"), Err(Error::InFlight)));
    }

    #[test]
    fn test_failure_replaces_report() {
        let mut view = AuditView::new();
        view.begin("example.com").unwrap();
        view.finish(Ok(AuditReport { score: 50.0, ..Default::default() }));
        assert_eq!(view.score_display().as_deref(), Some("50"));

        view.begin("example.com").unwrap();
        view.finish(Err(Error::Parse("eof".to_string())));
        assert!(view.report().is_none());
        assert_eq!(view.error(), Some(ANALYSIS_FAILED));
        assert!(view.recommendations().is_empty());
        assert!(!view.is_busy());
    }

    #[test]
    fn test_transport_and_schema_errors_look_the_same() {
        let mut a = AuditView::new();
        a.begin("a.io").unwrap();
        a.finish(Err(Error::Completion("HTTP 503".to_string())));

        let mut b = AuditView::new();
        b.begin("b.io").unwrap();
        b.finish(Err(Error::Parse("trailing characters".to_string())));

        assert_eq!(a.error(), b.error());
    }
}
