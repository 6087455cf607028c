//! Character reference decoding for text that was escaped twice.
//!
//! Follows the HTML5 rules rather than plain entity lookup: legacy named
//! references decode without a trailing semicolon (`&copy 2024`), numeric
//! references in 0x80..=0x9F go through windows-1252, and out-of-range code
//! points become U+FFFD.

use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;
use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CHAR_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]+;?|#[xX][0-9a-fA-F]+;?|[^\t\n\x0C <&#;]{1,32};?)").unwrap()
});

/// Named references the HTML5 tokenizer accepts without a semicolon.
const LEGACY_NAMES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren", "deg",
    "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34", "gt",
    "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    CHAR_REF.replace_all(text, |caps: &Captures<'_>| decode_reference(&caps[0], &caps[1]))
}

fn decode_reference(whole: &str, body: &str) -> String {
    if let Some(digits) = body.strip_prefix('#') {
        let digits = digits.trim_end_matches(';');
        let parsed = match digits.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => digits.parse::<u32>(),
        };
        // Overflowing references are out of range either way.
        return decode_numeric(parsed.unwrap_or(u32::MAX));
    }

    if body.ends_with(';') {
        let decoded = decode_html_entities(whole);
        if decoded != whole {
            return decoded.into_owned();
        }
    }

    // Longest legacy name that prefixes the reference; the rest is kept.
    let name = body.trim_end_matches(';');
    for end in (2..=name.len()).rev() {
        if let Some(prefix) = name.get(..end)
            && LEGACY_NAMES.contains(&prefix)
        {
            let decoded = decode_html_entities(&format!("&{prefix};")).into_owned();
            return decoded + &body[end..];
        }
    }
    whole.to_string()
}

fn decode_numeric(code: u32) -> String {
    match code {
        0x00 => "\u{FFFD}".to_string(),
        0x0D => "\r".to_string(),
        0x80..=0x9F => {
            let byte = [code as u8];
            WINDOWS_1252.decode_without_bom_handling(&byte).0.into_owned()
        }
        0xD800..=0xDFFF | 0x11_0000.. => "\u{FFFD}".to_string(),
        0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F | 0xFDD0..=0xFDEF => String::new(),
        c if c & 0xFFFE == 0xFFFE => String::new(),
        c => char::from_u32(c).map(String::from).unwrap_or_default(),
    }
}
