use std::fs;

use crate::extractor::{ExtractedRecord, PageFields, RawDocument, extract};

const SECRETS: &[&str] = &[
    "STYLE_SECRET",
    "SCRIPT_SECRET",
    "NOSCRIPT_SECRET",
    "IFRAME_SECRET",
    "TEMPLATE_SECRET",
];

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

fn all_fields(fields: &PageFields) -> [&str; 4] {
    [
        &fields.title,
        &fields.description,
        &fields.heading_summary,
        &fields.body_excerpt,
    ]
}

#[test]
fn test_extract_landing_page() {
    let fields = extract(&fixture("landing.html"));

    assert_eq!(fields.title, "Northwind Bakery | Fresh bread every morning");
    assert_eq!(
        fields.description,
        "Family bakery in Brno baking sourdough since 1998. Sourdough, pastries and coffee, baked daily."
    );
    assert_eq!(
        fields.heading_summary,
        "Fresh bread, every morning | Our story | What we bake | Wholesale"
    );
    assert_eq!(
        fields.body_excerpt,
        "We started baking in a tiny kitchen on Veveří street and still shape every loaf by hand before sunrise. \
         Our sourdough starter is older than most of our staff & it shows in the crust. \
         Rye, spelt and wheat breads, laminated pastries and seasonal cakes for every occasion. \
         We deliver to cafés and restaurants across the city six mornings a week."
    );
}

#[test]
fn test_noise_never_leaks() {
    let fields = extract(&fixture("landing.html"));
    for field in all_fields(&fields) {
        for secret in SECRETS {
            assert!(!field.contains(secret), "{secret} leaked into {field:?}");
        }
    }
}

#[test]
fn test_noise_with_heading_and_meta_lookalikes() {
    let html = r#"<html><head>
        <noscript><meta name="description" content="NOSCRIPT_SECRET"></noscript>
        </head><body>
        <template><h1>TEMPLATE_SECRET</h1><title>TEMPLATE_SECRET</title></template>
        <h1>Visible <script>document.write("SCRIPT_SECRET")</script>heading</h1>
        <p>Visible paragraph text <style>.x{}/*STYLE_SECRET*/</style>that is long enough to keep.</p>
        </body></html>"#;

    let fields = extract(html);
    assert_eq!(fields.title, "");
    assert_eq!(fields.description, "");
    assert_eq!(fields.heading_summary, "Visible heading");
    assert_eq!(
        fields.body_excerpt,
        "Visible paragraph text that is long enough to keep."
    );
}

#[test]
fn test_description_union_of_meta_tags() {
    let html = r#"<head>
        <meta name="description" content="We build widgets">
        <meta property="og:description" content="Widgets for everyone">
    </head>"#;
    assert_eq!(
        extract(html).description,
        "We build widgets Widgets for everyone"
    );
}

#[test]
fn test_heading_cap_keeps_first_ten() {
    let html: String = (1..=15).map(|i| format!("<h2>Section {i}</h2>")).collect();
    let expected = (1..=10)
        .map(|i| format!("Section {i}"))
        .collect::<Vec<_>>()
        .join(" | ");
    assert_eq!(extract(&html).heading_summary, expected);
}

#[test]
fn test_body_threshold_boundary() {
    let thirty_nine = "Exactly forty characters long sentence!";
    let forty = "Exactly forty characters long sentence!!";
    assert_eq!(thirty_nine.chars().count(), 39);
    assert_eq!(forty.chars().count(), 40);

    let html = format!("<p>{thirty_nine}</p><p>{forty}</p>");
    assert_eq!(extract(&html).body_excerpt, forty);
}

#[test]
fn test_body_keeps_first_eight_blocks() {
    let html: String = (1..=10)
        .map(|i| format!("<p>Paragraph number {i:02} carries enough words to qualify.</p>"))
        .collect();
    let excerpt = extract(&html).body_excerpt;

    for i in 1..=8 {
        assert!(excerpt.contains(&format!("number {i:02} ")));
    }
    assert!(!excerpt.contains("number 09"));
    assert!(!excerpt.contains("number 10"));
}

#[test]
fn test_fewer_blocks_than_limit_are_not_padded() {
    let html = "<p>Only one paragraph here that is comfortably over the limit.</p>";
    assert_eq!(
        extract(html).body_excerpt,
        "Only one paragraph here that is comfortably over the limit."
    );
}

#[test]
fn test_acme_end_to_end() {
    let filler = "Widgets for every workshop, shipped worldwide";
    assert_eq!(filler.chars().count(), 45);

    let html = format!(
        r#"<title>Acme</title><meta name="description" content="We build widgets"><h1>Welcome</h1><p>{filler}</p>"#
    );
    let record = ExtractedRecord::from_document(&RawDocument::new("https://acme.example", html));

    assert_eq!(record.source_id, "https://acme.example");
    assert_eq!(record.fields.title, "Acme");
    assert_eq!(record.fields.description, "We build widgets");
    assert_eq!(record.fields.heading_summary, "Welcome");
    assert_eq!(record.fields.body_excerpt, filler);
    assert!(record.error.is_none());
}

#[test]
fn test_empty_and_malformed_markup() {
    assert_eq!(extract(""), PageFields::default());

    let html = "<html><head><title>Broken</title><body><h2>Unclosed <p>Unclosed tags keep going and going and going<div>More content";
    let fields = extract(html);
    assert_eq!(fields.title, "Broken");
    assert!(fields.heading_summary.starts_with("Unclosed"));
    assert!(fields.body_excerpt.contains("Unclosed tags keep going"));

    let garbage = "<<<>>> </p></h1> <meta content=> &#xFFFFFF; <title";
    let _ = extract(garbage);
}

fn deeply_nested(tag: &str, depth: usize, inner: &str) -> String {
    format!(
        "<{tag}>{}{inner}{}</{tag}>",
        "<span>".repeat(depth),
        "</span>".repeat(depth)
    )
}

#[test]
fn test_deeply_nested_markup_on_a_small_stack() {
    let depth = 60_000;
    let html = format!(
        "<title>Deep</title>{}{}",
        deeply_nested("h1", depth, "Nested <script>SCRIPT_SECRET</script>heading"),
        deeply_nested(
            "p",
            depth,
            "deep text that is long enough to count as a body block"
        ),
    );

    let fields = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || extract(&html))
        .unwrap()
        .join()
        .expect("extraction must not overflow the stack");

    assert_eq!(fields.title, "Deep");
    assert_eq!(fields.heading_summary, "Nested heading");
    assert_eq!(
        fields.body_excerpt,
        "deep text that is long enough to count as a body block"
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let html = fixture("landing.html");
    let first = serde_json::to_string(&ExtractedRecord::from_document(&RawDocument::new(
        "https://northwind.example",
        html.clone(),
    )))
    .unwrap();
    let second = serde_json::to_string(&ExtractedRecord::from_document(&RawDocument::new(
        "https://northwind.example",
        html,
    )))
    .unwrap();
    assert_eq!(first, second);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    const WRAPPER_TAGS: &[&str] = &[
        "div", "span", "section", "b", "i", "a", "ul", "li", "table", "noscript", "template",
    ];

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract(&html);
        }

        #[test]
        fn test_script_body_never_leaks(body in "[A-Za-z ]{0,60}") {
            let marker = format!("ZQX{}ZQX", body.replace(' ', ""));
            let html = format!(
                "<title>t</title><h1>h</h1><script>{marker}</script><p>{marker} <style>{marker}</style>padding padding padding padding padding</p>"
            );
            let fields = extract(&html);
            prop_assert!(!fields.title.contains(&marker));
            prop_assert!(!fields.heading_summary.contains(&marker));
            prop_assert_eq!(fields.body_excerpt.matches(&marker).count(), 1);
        }

        #[test]
        fn test_nested_wrappers_never_leak_noise(
            wrappers in prop::collection::vec(prop::sample::select(WRAPPER_TAGS), 0..400),
            body in "[A-Za-z ]{0,80}",
        ) {
            let mut html = String::from("<title>t</title>");
            for tag in &wrappers {
                html.push_str(&format!("<{tag}>"));
            }
            html.push_str(&format!(
                "<h2>{body}<style>SCRIPT_SECRET</style></h2><p>{body} <script>SCRIPT_SECRET</script></p>"
            ));
            for tag in wrappers.iter().rev() {
                html.push_str(&format!("</{tag}>"));
            }

            let fields = extract(&html);
            for field in all_fields(&fields) {
                prop_assert!(!field.contains("SCRIPT_SECRET"));
            }
            prop_assert_eq!(fields, extract(&html));
        }
    }
}
