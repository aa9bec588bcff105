//! Verge Navigation
//!
//! Address bar input resolution:
//! 1. Input starting with `http://` or `https://` → navigate as typed
//! 2. Anything else → search with the configured template

mod input;

pub use input::{InputResolution, InputResolver, DEFAULT_SEARCH_TEMPLATE};
