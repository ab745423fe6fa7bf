use async_trait::async_trait;
use std::time::Duration;

use pirabel_core::target::{normalize_url, parse_target};
use pirabel_core::{Error, Result};

pub mod logging;

pub use logging::{init_logging, Logger};

/// Where the audit gets the page HTML it hands to the completion service.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    fn name(&self) -> &str;

    async fn snapshot(&self, url: &str) -> Result<String>;
}

/// Built-in page template; no network access.
#[derive(Debug, Default, Clone)]
pub struct SimulatedSnapshot;

impl SimulatedSnapshot {
    pub fn render(url: &str) -> String {
        format!(
            "<html><head><title>{url} | Enterprise SEO Solutions</title>\
             <meta name=\"description\" content=\"Discover how {url} can transform your organic growth with our \
             cutting-edge SEO technology and expert strategies.\"></head>\
             <body><h1>Next-Gen SEO for {url}</h1><h2>Advanced Features</h2>\
             <p>Performance, Security, and Content at scale.</p><h3>Technical Infrastructure</h3>\
             <p>Optimized for Core Web Vitals.</p></body></html>",
            url = url
        )
    }
}

#[async_trait]
impl SnapshotSource for SimulatedSnapshot {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn snapshot(&self, url: &str) -> Result<String> {
        parse_target(url)?;
        Ok(Self::render(&normalize_url(url)))
    }
}

/// Single GET of the target page. Links are not followed.
#[derive(Debug, Clone)]
pub struct HttpSnapshot {
    client: reqwest::Client,
    logger: Logger,
}

impl HttpSnapshot {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pirabel/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            logger: Logger::new().with_prefix("🌐".to_string()),
        })
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshot {
    fn name(&self) -> &str {
        "http"
    }

    async fn snapshot(&self, url: &str) -> Result<String> {
        let target = parse_target(url)?;
        self.logger.info(&format!("Fetching {}", target));

        let response = self.client.get(target.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            self.logger.warn(&format!("{} answered HTTP {}", target, status));
            return Err(Error::Snapshot(format!("{} answered HTTP {}", target, status)));
        }
        let html = response.text().await?;
        self.logger.debug(&format!("Fetched {} bytes from {}", html.len(), target));
        Ok(html)
    }
}

pub fn create_source(fetch: bool) -> Result<Box<dyn SnapshotSource>> {
    if fetch {
        Ok(Box::new(HttpSnapshot::new(Duration::from_secs(15))?))
    } else {
        Ok(Box::new(SimulatedSnapshot))
    }
}
