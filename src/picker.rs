//! Starter-word selection with escalating difficulty.
//!
//! # Error Handling
//!
//! Picking fails with [`PickError`]:
//!
//! - P001: `ExhaustedCandidates` (No starter words of the target length)

use crate::length_buckets::LengthBuckets;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickError {
    /// The bucket for the current target length is empty, either because the
    /// corpus has no words of that length or because none survived filtering.
    #[error("no starter words of length {length} are available")]
    ExhaustedCandidates { length: usize },
}

impl PickError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PickError::ExhaustedCandidates { .. } => "P001",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PickError::ExhaustedCandidates { .. } => "No starter words of the target length",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PickError::ExhaustedCandidates { .. } => "The picker reached a word length for which no word has enough one-letter-extension anagrams. The corpus is not diverse enough at that length for the configured threshold.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PickError::ExhaustedCandidates { .. } => Some("Use a larger word list, lower --min-anagrams, or lower --max-length"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Tracks the target word length across successive picks.
///
/// The target starts at the shortest playable length, grows by one after every
/// successful pick, and stays at the longest playable length once it gets there.
#[derive(Debug, Clone)]
pub struct StarterPicker {
    lengths: RangeInclusive<usize>,
    current_target_length: usize,
}

impl StarterPicker {
    pub fn new(lengths: RangeInclusive<usize>) -> StarterPicker {
        let current_target_length = *lengths.start();
        StarterPicker { lengths, current_target_length }
    }

    pub fn current_target_length(&self) -> usize {
        self.current_target_length
    }

    /// Start over from the shortest playable length.
    pub fn reset(&mut self) {
        self.current_target_length = *self.lengths.start();
    }

    /// Pick a random word of the current target length, then escalate.
    ///
    /// # Errors
    ///
    /// [`PickError::ExhaustedCandidates`] if the target bucket is empty. The
    /// target length does not advance in that case.
    pub fn pick<R: Rng + ?Sized>(&mut self, buckets: &LengthBuckets, rng: &mut R) -> Result<Rc<str>, PickError> {
        let length = self.current_target_length;
        let word = buckets
            .bucket(length)
            .choose(rng)
            .cloned()
            .ok_or(PickError::ExhaustedCandidates { length })?;

        if self.current_target_length < *self.lengths.end() {
            self.current_target_length += 1;
        }
        debug!("Picked starter \"{word}\" (next length {})", self.current_target_length);
        Ok(word)
    }
}
