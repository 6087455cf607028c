//! Where finished content packs go.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::scout::ContentPack;

const PACK_SUFFIX: &str = "scout.json";

static UNSAFE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]+").unwrap());

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize content pack: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Acknowledgement from a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub location: String,
}

#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn deliver(&self, pack: &ContentPack) -> Result<Receipt, StorageError>;
}

/// Writes each pack as pretty-printed JSON to `<out_dir>/<safe_job_id>.scout.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    out_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn path_for(&self, job_id: &str) -> PathBuf {
        self.out_dir
            .join(format!("{}.{}", safe_id(job_id), PACK_SUFFIX))
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

#[async_trait]
impl ResultSink for JsonFileStore {
    async fn deliver(&self, pack: &ContentPack) -> Result<Receipt, StorageError> {
        tokio::fs::create_dir_all(&self.out_dir)
            .await
            .map_err(|source| StorageError::Io {
                path: self.out_dir.clone(),
                source,
            })?;

        let path = self.path_for(&pack.job_id);
        let body = serde_json::to_vec_pretty(pack)?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "content pack written");
        Ok(Receipt {
            location: path.display().to_string(),
        })
    }
}

/// Keeps delivered packs in memory. Useful when embedding the scout.
#[derive(Debug, Default)]
pub struct MemorySink {
    packs: Mutex<Vec<ContentPack>>,
}

impl MemorySink {
    pub fn packs(&self) -> Vec<ContentPack> {
        self.packs
            .lock()
            .map(|packs| packs.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ResultSink for MemorySink {
    async fn deliver(&self, pack: &ContentPack) -> Result<Receipt, StorageError> {
        let mut packs = self
            .packs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        packs.push(pack.clone());
        Ok(Receipt {
            location: format!("memory:{}", packs.len() - 1),
        })
    }
}

/// Collapse every run of non-alphanumeric characters to `_` and trim the ends.
pub fn safe_id(value: &str) -> String {
    let replaced = UNSAFE_RUN.replace_all(value, "_");
    let trimmed = replaced.trim_matches('_');
    if trimmed.is_empty() {
        "job".to_string()
    } else {
        trimmed.to_string()
    }
}
