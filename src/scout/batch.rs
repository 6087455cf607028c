use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::extractor::ExtractedRecord;
use crate::scout::documents::DocumentStub;

pub const AGENT_NAME: &str = "sitescout";

/// Caller-supplied goals, tone, notes. Carried through untouched.
pub type Context = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// One primary record, the secondary records in input order, and the context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub primary: ExtractedRecord,
    pub secondary: Vec<ExtractedRecord>,
    pub context: Context,
    pub produced_at: DateTime<Utc>,
}

impl BatchResult {
    pub fn failed_secondary(&self) -> usize {
        self.secondary.iter().filter(|r| r.is_failed()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub name: String,
    pub version: String,
}

impl Default for AgentInfo {
    fn default() -> Self {
        Self {
            name: AGENT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Everything a job produces, as handed to the result sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPack {
    pub job_id: String,
    pub status: Status,
    #[serde(flatten)]
    pub batch: BatchResult,
    pub uploaded_docs: Vec<DocumentStub>,
    pub agent: AgentInfo,
}
