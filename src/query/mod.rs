// file: src/query/mod.rs
// description: query compilation and filter clause module exports
// reference: internal module structure

pub mod filter;
pub mod pattern;

pub use filter::{FILTER_JOIN, combined_filter, document_filter, year_range_filter};
pub use pattern::compile;
