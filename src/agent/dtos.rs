use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::scout::{ContentPack, Status};

pub const MIN_URL_LEN: usize = 4;

/// "Analyze this site" message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutRequest {
    pub url: String,
}

impl ScoutRequest {
    /// Length is counted on the raw value; surrounding whitespace counts.
    pub fn validate(&self) -> Result<(), String> {
        if self.url.chars().count() < MIN_URL_LEN {
            return Err(format!(
                "url must be at least {MIN_URL_LEN} characters, got '{}'",
                self.url
            ));
        }
        Ok(())
    }
}

/// The primary site's fields under the names the brief writer expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutResponseClient {
    pub url: String,
    pub title: String,
    pub meta: String,
    pub headings: String,
    pub top_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutResponse {
    pub job_id: String,
    pub client: ScoutResponseClient,
    pub scraped_at: String,
    pub status: Status,
    #[serde(default)]
    pub error: Option<String>,
}

impl ScoutResponse {
    pub fn success(pack: &ContentPack) -> Self {
        let primary = &pack.batch.primary;
        Self {
            job_id: pack.job_id.clone(),
            client: ScoutResponseClient {
                url: primary.source_id.clone(),
                title: primary.fields.title.clone(),
                meta: primary.fields.description.clone(),
                headings: primary.fields.heading_summary.clone(),
                top_text: primary.fields.body_excerpt.clone(),
            },
            scraped_at: pack
                .batch
                .produced_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            status: Status::Success,
            error: None,
        }
    }

    pub fn failure(url: &str, error: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            job_id: format!("error-{}", now.timestamp()),
            client: ScoutResponseClient {
                url: url.to_string(),
                ..ScoutResponseClient::default()
            },
            scraped_at: String::new(),
            status: Status::Error,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
