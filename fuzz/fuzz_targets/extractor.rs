#![no_main]

use libfuzzer_sys::fuzz_target;

use sitescout::extractor::{ExtractedRecord, RawDocument, extract};

fuzz_target!(|data: &[u8]| {
    let markup = String::from_utf8_lossy(data).to_string();

    // Extraction must never panic and must be deterministic.
    let fields = extract(&markup);
    let record = ExtractedRecord::from_document(&RawDocument::new("https://example.com", markup));
    assert_eq!(fields, record.fields);
});
