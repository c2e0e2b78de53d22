//! Error types for loading a corpus and configuring a dictionary.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - C001: `InvalidWordChars` (Word contains a character outside A-Z and a-z)
//! - C002: `EmptyCorpus` (No usable words in the corpus)
//! - C003: `Io` (Corpus could not be read)
//! - K001: `ZeroMinLength` (Minimum word length is zero)
//! - K002: `ContradictoryBounds` (Minimum word length exceeds maximum)
//!
//! Picking errors (`P0xx`) live with the picker and construction errors (`D0xx`)
//! live with the dictionary.
//!
//! # Examples
//!
//! ```
//! use anagrams::corpus::{Corpus, LoadPolicy};
//!
//! match Corpus::parse_from_str("cat\nlamp post\ndog", LoadPolicy::Strict) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(corpus) => println!("Loaded {} words", corpus.words.len()),
//! }
//! ```

use std::io;

/// Errors raised while turning raw text into a [`Corpus`](crate::corpus::Corpus).
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Word \"{word}\" on line {line} contains invalid character '{invalid_char}' (only letters A-Z and a-z allowed)")]
    InvalidWordChars { line: usize, word: String, invalid_char: char },

    #[error("Corpus contains no usable words")]
    EmptyCorpus,

    #[error("failed to read corpus from {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl CorpusError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CorpusError::InvalidWordChars { .. } => "C001",
            CorpusError::EmptyCorpus => "C002",
            CorpusError::Io { .. } => "C003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            CorpusError::InvalidWordChars { .. } => "Word contains a character outside A-Z and a-z",
            CorpusError::EmptyCorpus => "No usable words in the corpus",
            CorpusError::Io { .. } => "Corpus could not be read",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            CorpusError::InvalidWordChars { .. } => "Under the strict load policy every word must consist only of the ASCII letters A-Z and a-z after trimming. Digits, punctuation, spaces inside a line, and accented letters are rejected.",
            CorpusError::EmptyCorpus => "After skipping blank lines (and, under the lenient policy, invalid words) nothing was left to index. A dictionary needs at least one word.",
            CorpusError::Io { .. } => "The underlying reader or file failed. The wrapped I/O error says why (missing file, permissions, invalid UTF-8).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            CorpusError::InvalidWordChars { .. } => Some("Clean the word list, or load it with the lenient policy (--lenient) to skip such words"),
            CorpusError::EmptyCorpus => Some("Provide a word list with one word per line, e.g. 'eat\\ntea\\nate'"),
            CorpusError::Io { .. } => Some("Check that the word-list path exists and is readable UTF-8 text"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Errors raised by [`DictionaryConfig::validate`](crate::config::DictionaryConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum word length must be at least 1")]
    ZeroMinLength,

    #[error("contradictory word-length bounds: min={min}, max={max}")]
    ContradictoryBounds { min: usize, max: usize },
}

impl ConfigError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::ZeroMinLength => "K001",
            ConfigError::ContradictoryBounds { .. } => "K002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ConfigError::ZeroMinLength => "Minimum word length is zero",
            ConfigError::ContradictoryBounds { .. } => "Minimum word length exceeds maximum",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ConfigError::ZeroMinLength => "Starter words are drawn from length buckets beginning at the minimum word length. A length of zero would make the empty string a candidate.",
            ConfigError::ContradictoryBounds { .. } => "The playable length range [min, max] is empty, so no word could ever become a starter and the picker would have no bucket to start from.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ConfigError::ZeroMinLength => Some("Use a minimum word length of 1 or more (the default is 3)"),
            ConfigError::ContradictoryBounds { .. } => Some("The minimum word length cannot exceed the maximum word length (defaults: 3 and 7)"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
