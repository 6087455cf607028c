use thiserror::Error;

use crate::fetcher::FetchError;
use crate::storage::StorageError;

/// Failures that abort a whole batch. Secondary subjects never produce one of
/// these; their failures are recorded on the subject's record instead.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("no primary subject given")]
    MissingSubject,

    #[error("could not set up retrieval: {0}")]
    Setup(String),

    #[error("failed to process primary subject {subject}: {source}")]
    Retrieval {
        subject: String,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
