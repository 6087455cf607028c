use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Markup for one page plus where it came from. Lives only for one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub source_id: String,
    pub markup: String,
}

impl RawDocument {
    pub fn new(source_id: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            markup: markup.into(),
        }
    }
}

/// The semantic fields pulled out of one page. Every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFields {
    pub title: String,
    pub description: String,
    pub heading_summary: String,
    pub body_excerpt: String,
}

/// Extraction outcome for one subject, as it is written into a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub source_id: String,
    #[serde(flatten)]
    pub fields: PageFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractedRecord {
    pub fn from_document(document: &RawDocument) -> Self {
        Self {
            source_id: document.source_id.clone(),
            fields: super::extract(&document.markup),
            error: None,
        }
    }

    /// A record for a subject whose page could not be obtained.
    pub fn failed(source_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            fields: PageFields::default(),
            error: Some(error.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Collapse every whitespace run (newlines included) to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}
