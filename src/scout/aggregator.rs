use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{Instrument, info, info_span, instrument, warn};

use crate::extractor::{ExtractedRecord, RawDocument};
use crate::fetcher::FetchError;
use crate::scout::batch::{BatchResult, Context};
use crate::scout::errors::ScoutError;
use crate::scout::retriever::Retriever;

/// Runs retrieval and extraction for a primary subject and its peers.
///
/// Subjects are processed one at a time, in order. The primary subject is
/// mandatory; a peer that cannot be retrieved gets an errored record.
#[derive(Clone)]
pub struct Aggregator {
    retriever: Arc<dyn Retriever>,
    retrieval_timeout: Duration,
}

impl Aggregator {
    pub fn new(retriever: Arc<dyn Retriever>, retrieval_timeout: Duration) -> Self {
        Self {
            retriever,
            retrieval_timeout,
        }
    }

    #[instrument(skip_all, fields(primary = %primary, secondary = secondary.len()))]
    pub async fn aggregate(
        &self,
        primary: &str,
        secondary: &[String],
        context: Context,
    ) -> Result<BatchResult, ScoutError> {
        let primary = primary.trim();
        if primary.is_empty() {
            return Err(ScoutError::MissingSubject);
        }

        let document = self
            .retrieve_bounded(primary)
            .instrument(info_span!("subject", role = "primary", url = %primary))
            .await
            .map_err(|source| ScoutError::Retrieval {
                subject: primary.to_string(),
                source,
            })?;
        let primary_record = ExtractedRecord::from_document(&document);

        let mut records = Vec::with_capacity(secondary.len());
        for subject in secondary {
            let span = info_span!("subject", role = "secondary", url = %subject);
            let record = match self.retrieve_bounded(subject).instrument(span).await {
                Ok(document) => ExtractedRecord::from_document(&document),
                Err(e) => {
                    warn!(
                        url = %subject,
                        error = %e,
                        retriable = e.should_retry(),
                        "secondary subject failed"
                    );
                    ExtractedRecord::failed(
                        subject.as_str(),
                        format!("Failed to process competitor: {e}"),
                    )
                }
            };
            records.push(record);
        }

        let batch = BatchResult {
            primary: primary_record,
            secondary: records,
            context,
            produced_at: Utc::now(),
        };
        info!(
            secondary = batch.secondary.len(),
            failed = batch.failed_secondary(),
            "batch aggregated"
        );
        Ok(batch)
    }

    async fn retrieve_bounded(&self, subject: &str) -> Result<RawDocument, FetchError> {
        tokio::time::timeout(self.retrieval_timeout, self.retriever.retrieve(subject))
            .await
            .unwrap_or(Err(FetchError::RequestTimeout))
    }
}
