// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod reconstruct;
pub mod stream;
pub mod utils;

pub use client::{CorpusSearcher, HitsRequest, HitsTransport, HttpTransport};
pub use config::{Config, PaginationConfig, SearchConfig, ServerConfig};
pub use error::{CorpusError, Result};
pub use models::{
    DocInfoLookup, DocInfos, HitTokenSpan, HitsResponse, ParsedPage, RawHit,
    ReconstructedResult, SearchOptions, Side, SnippetPage,
};
pub use query::{compile, year_range_filter};
pub use reconstruct::{ResultAssembler, parse_response, parse_snippets, reconstruct};
pub use stream::{CorpusResultStream, KnownPhrases, PhraseSegmenter};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _searcher = CorpusSearcher::from_config(&config).unwrap();
        assert_eq!(compile("ghetto"), "\"ghetto\"");
    }
}
