//! Turns raw page markup into a handful of fields a summarizer can consume.
//!
//! Extraction is pure and never fails: the HTML parser recovers from any
//! input, and fields that cannot be found come back empty.

pub mod entities;
pub mod model;
pub mod noise;
pub mod reader;

#[cfg(test)]
mod tests;

pub use model::{ExtractedRecord, PageFields, RawDocument};

use scraper::Html;
use tracing::debug;

pub fn extract(markup: &str) -> PageFields {
    // Noise elements stay in the tree; every selector below skips them.
    let document = Html::parse_document(markup);

    let fields = PageFields {
        title: reader::select_title(&document),
        description: reader::select_description(&document),
        heading_summary: reader::summarize_headings(&document),
        body_excerpt: reader::excerpt_body(&document),
    };

    debug!(
        title_len = fields.title.len(),
        description_len = fields.description.len(),
        excerpt_len = fields.body_excerpt.len(),
        "extracted page fields"
    );
    fields
}
