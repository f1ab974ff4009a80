// file: src/stream/mod.rs
// description: token streams over search results module exports
// reference: internal module structure

pub mod corpus;
pub mod phrases;

pub use corpus::CorpusResultStream;
pub use phrases::{KnownPhrases, PhraseSegmenter};
