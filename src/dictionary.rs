//! The anagram dictionary: index, starter buckets and picker over one corpus.
//!
//! # Error Handling
//!
//! Construction fails with [`DictionaryError`]:
//!
//! - D001: `Config` (Invalid configuration (wraps [`ConfigError`]))
//! - D002: `Corpus` (Unusable corpus (wraps [`CorpusError`]))
//!
//! Lookups never fail; picking a starter word can fail with
//! [`PickError`](crate::picker::PickError).
//!
//! # Examples
//!
//! ```
//! use anagrams::config::DictionaryConfig;
//! use anagrams::corpus::Corpus;
//! use anagrams::dictionary::AnagramDictionary;
//!
//! let corpus = Corpus::from_words(["eat", "tea", "ate", "eats", "east", "seat", "teas", "eaten"]);
//! let config = DictionaryConfig { min_word_length: 3, max_word_length: 5, min_anagrams_for_starter: 2 };
//! let mut dictionary = AnagramDictionary::with_seed(&corpus, config, 7)?;
//!
//! assert_eq!(dictionary.anagrams_of("eat").len(), 3);
//! assert!(dictionary.is_acceptable_guess("tea", "eat"));
//! assert!(!dictionary.is_acceptable_guess("eaten", "eat"));
//!
//! let starter = dictionary.pick_starter_word()?;
//! assert_eq!(starter.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::config::DictionaryConfig;
use crate::corpus::Corpus;
use crate::errors::{ConfigError, CorpusError};
use crate::extensions::{extensions_of, wraps_word};
use crate::interner::Interner;
use crate::length_buckets::LengthBuckets;
use crate::picker::{PickError, StarterPicker};
use crate::signature_index::SignatureIndex;
use crate::starter_filter::{filter_starter_words, FilterReport};
use instant::Instant;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::rc::Rc;

/// Errors that can occur while building an [`AnagramDictionary`].
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("unusable corpus: {0}")]
    Corpus(#[from] Box<CorpusError>),
}

impl DictionaryError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryError::Config(_) => "D001",
            DictionaryError::Corpus(_) => "D002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryError::Config(_) => "Invalid configuration",
            DictionaryError::Corpus(_) => "Unusable corpus",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            DictionaryError::Config(_) => "The dictionary configuration was rejected. This wraps an underlying ConfigError (see Configuration Errors for specific codes).",
            DictionaryError::Corpus(_) => "The corpus could not be loaded or was empty. This wraps an underlying CorpusError (see Corpus Errors for specific codes).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        // the wrapped errors carry their own help
        None
    }

    /// Formats the error with code, delegating to the wrapped error's detailed display
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            DictionaryError::Config(e) => format!("{}\n  caused by: {}", self.code(), e.display_detailed()),
            DictionaryError::Corpus(e) => format!("{}\n  caused by: {}", self.code(), e.display_detailed()),
        }
    }
}

/// An anagram index over one corpus plus the state of one game session.
///
/// Everything is built eagerly at construction; afterwards only the picker
/// state changes. Each dictionary owns its data exclusively.
#[derive(Debug)]
pub struct AnagramDictionary<R = StdRng> {
    config: DictionaryConfig,
    words: Interner,
    index: SignatureIndex,
    buckets: LengthBuckets,
    filter_report: FilterReport,
    picker: StarterPicker,
    rng: R,
}

impl AnagramDictionary<StdRng> {
    /// Build a dictionary whose picks are seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// See [`AnagramDictionary::with_rng`].
    pub fn new(corpus: &Corpus, config: DictionaryConfig) -> Result<Self, DictionaryError> {
        Self::with_rng(corpus, config, StdRng::from_entropy())
    }

    /// Build a dictionary with reproducible picks.
    ///
    /// # Errors
    ///
    /// See [`AnagramDictionary::with_rng`].
    pub fn with_seed(corpus: &Corpus, config: DictionaryConfig, seed: u64) -> Result<Self, DictionaryError> {
        Self::with_rng(corpus, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AnagramDictionary<R> {
    /// Build the signature index and starter buckets, then run the starter filter.
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::Config`] if `config` fails validation.
    /// - [`DictionaryError::Corpus`] wrapping [`CorpusError::EmptyCorpus`] if
    ///   `corpus` has no words.
    pub fn with_rng(corpus: &Corpus, config: DictionaryConfig, rng: R) -> Result<Self, DictionaryError> {
        config.validate()?;
        if corpus.words.is_empty() {
            return Err(Box::new(CorpusError::EmptyCorpus).into());
        }

        let t_build = Instant::now();
        let mut words = Interner::with_capacity(corpus.words.len());
        let interned: Vec<Rc<str>> = corpus.words.iter().map(|w| words.intern(w)).collect();

        let index = SignatureIndex::build(interned.iter().cloned());
        let mut buckets = LengthBuckets::build(config.playable_lengths(), interned);
        debug!(
            "Indexed {} words under {} signatures ({} starter candidates) in {:.3}s",
            words.len(),
            index.signature_count(),
            buckets.total(),
            t_build.elapsed().as_secs_f64()
        );

        let filter_report = filter_starter_words(&mut buckets, &index, config.min_anagrams_for_starter);
        info!(
            "Dictionary ready: {} words, {} starter words across lengths {}-{}",
            words.len(),
            filter_report.total_kept(),
            config.min_word_length,
            config.max_word_length
        );

        Ok(AnagramDictionary {
            config,
            words,
            index,
            buckets,
            filter_report,
            picker: StarterPicker::new(config.playable_lengths()),
            rng,
        })
    }

    /// All corpus words that are anagrams of `word`, in corpus order.
    ///
    /// Includes `word` itself when it is in the corpus; empty when nothing matches.
    pub fn anagrams_of(&self, word: &str) -> &[Rc<str>] {
        self.index.words_sharing_signature(word)
    }

    /// Corpus words formed by adding one letter to `word` and rearranging,
    /// excluding any that contain `word` itself.
    pub fn extensions_of(&self, word: &str) -> Vec<Rc<str>> {
        extensions_of(&self.index, word)
    }

    /// Whether `candidate` is a corpus word that doesn't merely wrap `base`.
    ///
    /// "tea" is acceptable for "eat"; "eaten" is not, because it contains "eat".
    /// Corpus membership is exact, so "TEA" only counts if the corpus spells it
    /// that way; the wrapping check ignores case.
    pub fn is_acceptable_guess(&self, candidate: &str, base: &str) -> bool {
        let candidate = candidate.trim();
        self.words.contains(candidate) && !wraps_word(candidate, base.trim())
    }

    /// Pick a random starter word of the current target length, then make the
    /// next pick one letter longer (up to the maximum word length).
    ///
    /// # Errors
    ///
    /// [`PickError::ExhaustedCandidates`] when no starter words of the target
    /// length survived filtering.
    pub fn pick_starter_word(&mut self) -> Result<Rc<str>, PickError> {
        self.picker.pick(&self.buckets, &mut self.rng)
    }

    /// Begin a new session: the next pick is back at the minimum word length.
    pub fn reset(&mut self) {
        self.picker.reset();
    }

    pub fn current_target_length(&self) -> usize {
        self.picker.current_target_length()
    }

    /// Starter words of length `len` that survived filtering.
    pub fn bucket(&self, len: usize) -> &[Rc<str>] {
        self.buckets.bucket(len)
    }

    pub fn filter_report(&self) -> &FilterReport {
        &self.filter_report
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Number of distinct corpus words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct letter signatures (anagram classes).
    pub fn signature_count(&self) -> usize {
        self.index.signature_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EAT_CORPUS: [&str; 8] = ["eat", "tea", "ate", "eats", "east", "seat", "teas", "eaten"];

    fn eat_dictionary() -> AnagramDictionary {
        let config = DictionaryConfig { min_word_length: 3, max_word_length: 5, min_anagrams_for_starter: 2 };
        AnagramDictionary::with_seed(&Corpus::from_words(EAT_CORPUS), config, 1).unwrap()
    }

    fn as_strs(words: &[Rc<str>]) -> Vec<&str> {
        words.iter().map(|w| w.as_ref()).collect()
    }

    #[test]
    fn test_anagrams_of() {
        let dictionary = eat_dictionary();
        assert_eq!(as_strs(dictionary.anagrams_of("eat")), vec!["eat", "tea", "ate"]);
        assert_eq!(as_strs(dictionary.anagrams_of("sate")), vec!["eats", "east", "seat", "teas"]);
        assert!(dictionary.anagrams_of("dog").is_empty());
    }

    #[test]
    fn test_anagrams_of_includes_word_itself() {
        let dictionary = eat_dictionary();
        for w in EAT_CORPUS {
            assert!(dictionary.anagrams_of(w).iter().any(|a| a.as_ref() == w));
        }
    }

    #[test]
    fn test_extensions_of() {
        let dictionary = eat_dictionary();
        assert_eq!(as_strs(&dictionary.extensions_of("eat")), vec!["east", "teas"]);
        assert!(dictionary.extensions_of("eaten").is_empty());
    }

    #[test]
    fn test_is_acceptable_guess() {
        let dictionary = eat_dictionary();
        assert!(dictionary.is_acceptable_guess("tea", "eat"));
        assert!(dictionary.is_acceptable_guess("east", "eat"));
        assert!(!dictionary.is_acceptable_guess("eaten", "eat"));
        assert!(!dictionary.is_acceptable_guess("eats", "eat"));
        // not in the corpus
        assert!(!dictionary.is_acceptable_guess("tae", "eat"));
        // a word contains itself
        assert!(!dictionary.is_acceptable_guess("eat", "eat"));
    }

    #[test]
    fn test_is_acceptable_guess_case() {
        let dictionary = eat_dictionary();
        assert!(dictionary.is_acceptable_guess(" tea ", "EAT"));
        // membership is exact
        assert!(!dictionary.is_acceptable_guess("TEA", "eat"));
        // wrapping ignores case
        assert!(!dictionary.is_acceptable_guess("eats", "EAT"));
    }

    #[test]
    fn test_words_keep_their_case() {
        let corpus = Corpus::parse_from_str("Eat\ntea\nTea", crate::corpus::LoadPolicy::Strict).unwrap();
        let config = DictionaryConfig { min_word_length: 3, max_word_length: 3, min_anagrams_for_starter: 0 };
        let dictionary = AnagramDictionary::with_seed(&corpus, config, 1).unwrap();

        assert_eq!(as_strs(dictionary.anagrams_of("eat")), vec!["Eat", "tea", "Tea"]);
        assert_eq!(dictionary.word_count(), 3);
        assert!(dictionary.is_acceptable_guess("Tea", "eat"));
        assert!(!dictionary.is_acceptable_guess("Eat", "eat"));
    }

    #[test]
    fn test_only_length_three_starters_survive() {
        let dictionary = eat_dictionary();
        assert_eq!(as_strs(dictionary.bucket(3)), vec!["eat", "tea", "ate"]);
        assert!(dictionary.bucket(4).is_empty());
        assert_eq!(dictionary.filter_report().empty_lengths(), vec![4, 5]);
    }

    #[test]
    fn test_pick_then_exhaust() {
        let mut dictionary = eat_dictionary();
        let starter = dictionary.pick_starter_word().unwrap();
        assert!(["eat", "tea", "ate"].contains(&starter.as_ref()));
        assert_eq!(dictionary.current_target_length(), 4);

        let err = dictionary.pick_starter_word().unwrap_err();
        assert_eq!(err, PickError::ExhaustedCandidates { length: 4 });

        dictionary.reset();
        assert_eq!(dictionary.current_target_length(), 3);
        assert!(dictionary.pick_starter_word().is_ok());
    }

    #[test]
    fn test_stats() {
        let dictionary = eat_dictionary();
        assert_eq!(dictionary.word_count(), 8);
        // aet, aest, aeent
        assert_eq!(dictionary.signature_count(), 3);
        assert_eq!(dictionary.config().max_word_length, 5);
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let err = AnagramDictionary::with_seed(&Corpus::default(), DictionaryConfig::default(), 1).unwrap_err();
        assert_eq!(err.code(), "D002");
        assert!(err.display_detailed().contains("C002"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DictionaryConfig { min_word_length: 8, ..Default::default() };
        let err = AnagramDictionary::with_seed(&Corpus::from_words(EAT_CORPUS), config, 1).unwrap_err();
        assert_eq!(err.code(), "D001");
        assert!(matches!(err, DictionaryError::Config(ConfigError::ContradictoryBounds { min: 8, max: 7 })));
        assert!(err.display_detailed().contains("K002"));
    }

    #[test]
    fn test_huge_max_length_builds_from_corpus_size() {
        let config = DictionaryConfig { min_word_length: 3, max_word_length: usize::MAX, min_anagrams_for_starter: 2 };
        let mut dictionary = AnagramDictionary::with_seed(&Corpus::from_words(EAT_CORPUS), config, 1).unwrap();

        assert_eq!(dictionary.filter_report().buckets.len(), 3);
        assert!(dictionary.bucket(usize::MAX).is_empty());
        assert_eq!(dictionary.pick_starter_word().unwrap().len(), 3);
        assert_eq!(
            dictionary.pick_starter_word().unwrap_err(),
            PickError::ExhaustedCandidates { length: 4 }
        );
    }

    #[test]
    fn test_dictionaries_do_not_share_state() {
        let mut first = eat_dictionary();
        let second = eat_dictionary();
        first.pick_starter_word().unwrap();

        assert_eq!(first.current_target_length(), 4);
        assert_eq!(second.current_target_length(), 3);

        let other = AnagramDictionary::with_seed(&Corpus::from_words(["dog", "god"]), DictionaryConfig::default(), 1).unwrap();
        assert!(!other.is_acceptable_guess("tea", "dog"));
        assert!(first.anagrams_of("god").is_empty());
    }
}
