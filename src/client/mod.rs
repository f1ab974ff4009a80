// file: src/client/mod.rs
// description: corpus server client module exports
// reference: internal module structure

pub mod request;
pub mod search;
pub mod transport;

pub use request::HitsRequest;
pub use search::CorpusSearcher;
pub use transport::{HitsTransport, HttpTransport};
