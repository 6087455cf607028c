#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use sitescout::extractor::RawDocument;
use sitescout::fetcher::FetchError;
use sitescout::scout::Retriever;

pub const TEST_USER_AGENT: &str = "ScoutTest/1.0";

/// Serves canned markup by URL; anything else fails like a refused connection.
#[derive(Default)]
pub struct StaticRetriever {
    pages: HashMap<String, String>,
}

impl StaticRetriever {
    pub fn with_page(mut self, url: &str, markup: &str) -> Self {
        self.pages.insert(url.to_string(), markup.to_string());
        self
    }
}

#[async_trait]
impl Retriever for StaticRetriever {
    async fn retrieve(&self, subject: &str) -> Result<RawDocument, FetchError> {
        self.pages
            .get(subject)
            .map(|markup| RawDocument::new(subject, markup.clone()))
            .ok_or_else(|| FetchError::Connect(format!("no route to {subject}")))
    }
}

pub fn landing_page(name: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
        <title>{name}</title>
        <meta name="description" content="{name} builds widgets">
        <script>var tracking = "SCRIPT_SECRET";</script>
        </head><body>
        <h1>Welcome to {name}</h1>
        <p>{name} has been building dependable widgets for small workshops since 1998.</p>
        </body></html>"#
    )
}

pub fn short_timeout() -> Duration {
    Duration::from_millis(300)
}
