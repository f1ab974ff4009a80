// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod hit;
pub mod response;
pub mod result;

pub use hit::{HitTokenSpan, RawHit, Side};
pub use response::{DocInfoLookup, DocInfos, DocSnippets, HitsResponse, Snippet, Summary};
pub use result::{ParsedPage, ReconstructedResult, SearchOptions, SnippetPage};
