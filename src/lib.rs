// Reusable library API, visible to both CLI and WASM builds
mod anagram_char;
pub mod config;
pub mod corpus;
pub mod dictionary;
pub mod errors;
pub mod extensions;
mod interner;
pub mod length_buckets;
pub mod log;
pub mod picker;
pub mod signature;
pub mod signature_index;
pub mod starter_filter;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::DictionaryConfig;
pub use corpus::{Corpus, LoadPolicy};
pub use dictionary::{AnagramDictionary, DictionaryError};
pub use picker::PickError;
