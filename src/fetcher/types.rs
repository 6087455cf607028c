use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// A successfully retrieved HTML page, already decoded to UTF-8.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// URL after redirects.
    pub url_final: Url,
    pub status: StatusCode,
    pub content_type: String,
    /// WHATWG name of the encoding the body was decoded from.
    pub charset: &'static str,
    pub body_utf8: String,
    pub fetched_at: DateTime<Utc>,
}
