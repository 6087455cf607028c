//! Uploaded brand documents. Only recorded for now; no content is parsed.

use serde::{Deserialize, Serialize};

const STUB_NOTE: &str = "Document content parsing (PDF/DOCX/PPTX) is not implemented yet.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedDocument {
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    StubOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStub {
    pub doc_id: Option<String>,
    pub filename: Option<String>,
    pub mime_type: Option<String>,
    pub status: DocumentStatus,
    pub text: String,
    pub notes: String,
}

impl From<&UploadedDocument> for DocumentStub {
    fn from(doc: &UploadedDocument) -> Self {
        Self {
            doc_id: doc.doc_id.clone(),
            filename: doc.filename.clone(),
            mime_type: doc.mime_type.clone(),
            status: DocumentStatus::StubOnly,
            text: String::new(),
            notes: STUB_NOTE.to_string(),
        }
    }
}

pub fn stub_documents(docs: &[UploadedDocument]) -> Vec<DocumentStub> {
    docs.iter().map(DocumentStub::from).collect()
}
