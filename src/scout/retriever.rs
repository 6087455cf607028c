use async_trait::async_trait;

use crate::extractor::RawDocument;
use crate::fetcher::{FetchError, HttpFetcher};

/// Source of markup for a subject (usually a URL).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn retrieve(&self, subject: &str) -> Result<RawDocument, FetchError>;
}

#[async_trait]
impl Retriever for HttpFetcher {
    async fn retrieve(&self, subject: &str) -> Result<RawDocument, FetchError> {
        let page = self.fetch(subject).await?;
        Ok(RawDocument::new(subject, page.body_utf8))
    }
}
