// file: src/reconstruct/mod.rs
// description: hit text reconstruction and result assembly module exports
// reference: internal module structure

pub mod assembler;
pub mod text;

pub use assembler::{ResultAssembler, parse_response, parse_snippets};
pub use text::{is_content_tag, reconstruct};
