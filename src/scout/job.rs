use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::scout::batch::Context;
use crate::scout::documents::UploadedDocument;

/// Input for one scout run, usually read from a `job_input.json` file.
///
/// Only `client_url` is mandatory. Lists and the form tolerate `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoutJob {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub client_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub competitor_urls: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uploaded_docs: Vec<UploadedDocument>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_form: Context,
}

impl ScoutJob {
    pub fn for_url(job_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            job_id: Some(job_id.into()),
            client_url: url.into(),
            ..Self::default()
        }
    }

    /// The explicit id, or one derived from `now` when absent or blank.
    pub fn resolved_id(&self, now: DateTime<Utc>) -> String {
        match self.job_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => timestamp_job_id(now),
        }
    }
}

pub fn timestamp_job_id(now: DateTime<Utc>) -> String {
    format!("scout-{}", now.format("%Y%m%d-%H%M%S"))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
