use bytes::Bytes;
use chrono::Utc;
use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::StatusCode;
use tracing::warn;
use url::Url;

use crate::fetcher::types::PageResponse;

/// How far into the body we look for an in-document charset declaration.
const SNIFF_WINDOW: usize = 4096;

static HEADER_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>;]+)"#).unwrap());

/// Decode a downloaded body into a [`PageResponse`].
///
/// Undecodable byte sequences are replaced rather than rejected: broken
/// markup still yields whatever text survives.
pub fn decode_page(
    url_final: Url,
    status: StatusCode,
    content_type: String,
    body: &Bytes,
) -> PageResponse {
    let encoding = detect_encoding(&content_type, body);
    let (decoded, _, had_errors) = encoding.decode(body);
    if had_errors {
        warn!(
            url = %url_final,
            encoding = encoding.name(),
            "body contained undecodable bytes"
        );
    }

    PageResponse {
        url_final,
        status,
        content_type,
        charset: encoding.name(),
        body_utf8: decoded.into_owned(),
        fetched_at: Utc::now(),
    }
}

/// Header charset first, then an in-document `<meta>` declaration, then a
/// statistical guess over the first few kilobytes.
pub fn detect_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = label_from(&HEADER_CHARSET, content_type) {
        return encoding;
    }

    let window = &body[..body.len().min(SNIFF_WINDOW)];
    let head = String::from_utf8_lossy(window);
    if let Some(encoding) = label_from(&META_CHARSET, &head) {
        return encoding;
    }

    if std::str::from_utf8(body).is_ok() {
        return UTF_8;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(window, body.len() <= SNIFF_WINDOW);
    detector.guess(None, true)
}

fn label_from(pattern: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = pattern.captures(haystack)?.get(1)?.as_str();
    Encoding::for_label(label.trim().as_bytes())
}
