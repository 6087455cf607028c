use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::extractor::entities::unescape;
use crate::extractor::model::collapse_whitespace;
use crate::extractor::noise::{flatten_text, is_visible, text_fragments};

pub const MAX_HEADINGS: usize = 10;
pub const HEADING_DELIMITER: &str = " | ";
pub const MIN_BLOCK_CHARS: usize = 40;
pub const MAX_BODY_BLOCKS: usize = 8;

const DESCRIPTION_PROPERTIES: &[&str] = &["og:description", "twitter:description"];

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("valid selector"));
static META: Lazy<Selector> = Lazy::new(|| Selector::parse("meta").expect("valid selector"));
static HEADINGS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3").expect("valid selector"));
static PARAGRAPHS: Lazy<Selector> = Lazy::new(|| Selector::parse("p").expect("valid selector"));

pub fn select_title(document: &Html) -> String {
    document
        .select(&TITLE)
        .find(is_visible)
        .map(|title| title.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Every description-like meta tag contributes, in document order. A page
/// with both an SEO description and social-card descriptions keeps all of them.
pub fn select_description(document: &Html) -> String {
    let mut accumulated = String::new();
    for meta in document.select(&META).filter(is_visible) {
        let element = meta.value();
        let name = element.attr("name").unwrap_or_default().to_lowercase();
        let property = element.attr("property").unwrap_or_default().to_lowercase();

        if name == "description" || DESCRIPTION_PROPERTIES.contains(&property.as_str()) {
            accumulated.push(' ');
            accumulated.push_str(element.attr("content").unwrap_or_default());
        }
    }
    accumulated.trim().to_string()
}

/// First [`MAX_HEADINGS`] h1-h3 elements. An empty heading still takes a slot.
pub fn summarize_headings(document: &Html) -> String {
    document
        .select(&HEADINGS)
        .filter(is_visible)
        .take(MAX_HEADINGS)
        .map(|heading| flatten_text(&heading))
        .collect::<Vec<_>>()
        .join(HEADING_DELIMITER)
}

/// Paragraphs shorter than [`MIN_BLOCK_CHARS`] are captions, labels and
/// buttons. Length is measured on the trimmed fragments with no separator.
pub fn excerpt_body(document: &Html) -> String {
    let blocks = document
        .select(&PARAGRAPHS)
        .filter(is_visible)
        .filter_map(|paragraph| {
            let fragments = text_fragments(&paragraph);
            let length: usize = fragments.iter().map(|f| f.chars().count()).sum();
            (length >= MIN_BLOCK_CHARS).then(|| fragments.join(" "))
        })
        .take(MAX_BODY_BLOCKS)
        .collect::<Vec<_>>();

    let collapsed = collapse_whitespace(&blocks.join(" "));
    unescape(&collapsed).trim().to_string()
}
