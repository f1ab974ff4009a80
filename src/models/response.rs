// file: src/models/response.rs
// description: corpus server response pages and document metadata lookup
// reference: https://inl.github.io/BlackLab/server/rest-api/corpus/hits/get.html

use crate::error::{CorpusError, Result};
use crate::models::hit::{HitTokenSpan, RawHit};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    #[serde(rename = "numberOfHitsRetrieved")]
    pub number_of_hits_retrieved: usize,
}

/// A decoded response page. Only `summary` is required; the other keys are
/// checked by whichever parser needs them.
#[derive(Debug, Clone, Deserialize)]
pub struct HitsResponse {
    pub summary: Summary,
    #[serde(rename = "docInfos")]
    pub doc_infos: Option<DocInfos>,
    pub hits: Option<Vec<RawHit>>,
    pub docs: Option<Vec<DocSnippets>>,
}

impl HitsResponse {
    pub fn total(&self) -> usize {
        self.summary.number_of_hits_retrieved
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocSnippets {
    #[serde(rename = "docPid", default)]
    pub doc_pid: Option<String>,
    pub snippets: Vec<Snippet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    pub left: HitTokenSpan,
    #[serde(rename = "match")]
    pub matched: HitTokenSpan,
    pub right: HitTokenSpan,
}

/// Keyed access from document identifier to metadata fields.
pub trait DocInfoLookup {
    fn field(&self, doc_pid: &str, field: &str) -> Result<String>;
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DocInfos(pub HashMap<String, HashMap<String, Value>>);

impl DocInfoLookup for DocInfos {
    fn field(&self, doc_pid: &str, field: &str) -> Result<String> {
        let record = self.0.get(doc_pid).ok_or_else(|| CorpusError::MissingDocInfo {
            doc_pid: doc_pid.to_string(),
        })?;

        let value = record
            .get(field)
            .ok_or_else(|| CorpusError::MissingMetadata {
                doc_pid: doc_pid.to_string(),
                field: field.to_string(),
            })?;

        Ok(metadata_text(value))
    }
}

// Newer servers wrap metadata values in single-element arrays.
fn metadata_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => match items.first() {
            Some(Value::String(s)) => s.clone(),
            _ => value.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_infos() -> DocInfos {
        serde_json::from_value(json!({
            "7": {"testimony_id": "usc_shoah_1", "shelfmark": ["RG-50.030*0001"], "recording_year": 1995},
        }))
        .unwrap()
    }

    #[test]
    fn test_field_lookup() {
        let infos = doc_infos();
        assert_eq!(infos.field("7", "testimony_id").unwrap(), "usc_shoah_1");
        assert_eq!(infos.field("7", "shelfmark").unwrap(), "RG-50.030*0001");
        assert_eq!(infos.field("7", "recording_year").unwrap(), "1995");
    }

    #[test]
    fn test_missing_document_is_an_error() {
        let err = doc_infos().field("8", "testimony_id").unwrap_err();
        assert!(matches!(err, CorpusError::MissingDocInfo { doc_pid } if doc_pid == "8"));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let err = doc_infos().field("7", "interviewee").unwrap_err();
        assert!(matches!(err, CorpusError::MissingMetadata { .. }));
    }

    #[test]
    fn test_count_only_page_decodes() {
        let page: HitsResponse = serde_json::from_value(json!({
            "summary": {"numberOfHitsRetrieved": 41, "searchTime": 3}
        }))
        .unwrap();
        assert_eq!(page.total(), 41);
        assert!(page.hits.is_none());
        assert!(page.doc_infos.is_none());
    }
}
