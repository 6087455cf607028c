//! Job orchestration: one client site, its competitors, and the uploaded
//! documents become a single content pack for the brief writer.

pub mod aggregator;
pub mod batch;
pub mod documents;
pub mod errors;
pub mod job;
pub mod retriever;

pub use aggregator::Aggregator;
pub use batch::{AgentInfo, BatchResult, ContentPack, Context, Status};
pub use documents::{DocumentStub, UploadedDocument};
pub use errors::ScoutError;
pub use job::ScoutJob;
pub use retriever::Retriever;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, instrument};

use crate::config::Config;
use crate::fetcher::HttpFetcher;
use crate::storage::{JsonFileStore, Receipt, ResultSink};

/// A finished job: the pack that was delivered and where it went.
#[derive(Debug, Clone)]
pub struct ScoutOutcome {
    pub pack: ContentPack,
    pub receipt: Receipt,
}

pub struct Scout {
    aggregator: Aggregator,
    sink: Arc<dyn ResultSink>,
}

impl Scout {
    pub fn new(
        retriever: Arc<dyn Retriever>,
        sink: Arc<dyn ResultSink>,
        retrieval_timeout: Duration,
    ) -> Self {
        Self {
            aggregator: Aggregator::new(retriever, retrieval_timeout),
            sink,
        }
    }

    /// HTTP retrieval and JSON files under the configured output directory.
    pub fn from_config(config: &Config) -> Result<Self, ScoutError> {
        let fetcher =
            HttpFetcher::from_config(config).map_err(|e| ScoutError::Setup(e.to_string()))?;
        Ok(Self::new(
            Arc::new(fetcher),
            Arc::new(JsonFileStore::new(config.out_dir())),
            config.fetch_timeout(),
        ))
    }

    #[instrument(skip_all, fields(job_id))]
    pub async fn run(&self, job: ScoutJob) -> Result<ScoutOutcome, ScoutError> {
        let job_id = job.resolved_id(Utc::now());
        tracing::Span::current().record("job_id", job_id.as_str());

        let batch = self
            .aggregator
            .aggregate(&job.client_url, &job.competitor_urls, job.client_form)
            .await?;

        let pack = ContentPack {
            job_id,
            status: Status::Success,
            batch,
            uploaded_docs: documents::stub_documents(&job.uploaded_docs),
            agent: AgentInfo::default(),
        };

        let receipt = self.sink.deliver(&pack).await?;
        info!(location = %receipt.location, "job completed");

        Ok(ScoutOutcome { pack, receipt })
    }
}
