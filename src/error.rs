// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request to corpus server failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Corpus server returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to decode corpus server response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response is missing expected field `{0}`")]
    MissingField(&'static str),

    #[error("No document info for hit in document {doc_pid}")]
    MissingDocInfo { doc_pid: String },

    #[error("Document {doc_pid} has no metadata field `{field}`")]
    MissingMetadata { doc_pid: String, field: String },

    #[error("Malformed {side} span: word={words}, punct={punct}, lemma={lemmas}, pos={pos}")]
    MalformedSpan {
        side: &'static str,
        words: usize,
        punct: usize,
        lemmas: usize,
        pos: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
