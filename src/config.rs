//! Construction-time settings for an [`AnagramDictionary`](crate::dictionary::AnagramDictionary).

use crate::errors::ConfigError;
use std::ops::RangeInclusive;

/// Shortest word that can be picked as a starter.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
/// Longest word that can be picked as a starter; the picker stops escalating here.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 7;
/// Fewest one-letter-extension anagrams a starter word must have.
pub const DEFAULT_MIN_NUM_ANAGRAMS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryConfig {
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub min_anagrams_for_starter: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            min_anagrams_for_starter: DEFAULT_MIN_NUM_ANAGRAMS,
        }
    }
}

impl DictionaryConfig {
    /// Check that the playable length range is non-empty and excludes zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMinLength`] or [`ConfigError::ContradictoryBounds`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_word_length == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        if self.min_word_length > self.max_word_length {
            return Err(ConfigError::ContradictoryBounds {
                min: self.min_word_length,
                max: self.max_word_length,
            });
        }
        Ok(())
    }

    /// The lengths that get a bucket (and can therefore produce starter words).
    #[must_use]
    pub fn playable_lengths(&self) -> RangeInclusive<usize> {
        self.min_word_length..=self.max_word_length
    }
}
