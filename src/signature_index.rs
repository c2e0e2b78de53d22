//! Signature → words index.
//!
//! Built once from the full corpus, read-only afterwards. Words sharing a
//! signature are kept in corpus order.

use crate::signature::Signature;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct SignatureIndex {
    by_signature: HashMap<Signature, Vec<Rc<str>>>,
}

impl SignatureIndex {
    /// Index every word under its signature.
    pub fn build<I>(words: I) -> SignatureIndex
    where
        I: IntoIterator<Item = Rc<str>>,
    {
        let mut by_signature: HashMap<Signature, Vec<Rc<str>>> = HashMap::new();
        for word in words {
            match by_signature.entry(Signature::of(&word)) {
                Entry::Occupied(mut e) => e.get_mut().push(word),
                Entry::Vacant(e) => {
                    e.insert(vec![word]);
                }
            }
        }
        SignatureIndex { by_signature }
    }

    /// All corpus words that are anagrams of `word` (including `word` itself, if
    /// it is in the corpus). Empty when nothing matches.
    pub fn words_sharing_signature(&self, word: &str) -> &[Rc<str>] {
        self.get(&Signature::of(word))
    }

    /// Lookup by a precomputed signature.
    pub fn get(&self, signature: &Signature) -> &[Rc<str>] {
        self.by_signature.get(signature).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct signatures.
    pub fn signature_count(&self) -> usize {
        self.by_signature.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(words: &[&str]) -> SignatureIndex {
        SignatureIndex::build(words.iter().map(|w| Rc::from(*w)))
    }

    fn as_strs(words: &[Rc<str>]) -> Vec<&str> {
        words.iter().map(|w| w.as_ref()).collect()
    }

    #[test]
    fn test_groups_anagrams_in_corpus_order() {
        let index = index_of(&["tea", "post", "eat", "stop", "ate", "pots"]);

        assert_eq!(as_strs(index.words_sharing_signature("eat")), vec!["tea", "eat", "ate"]);
        assert_eq!(as_strs(index.words_sharing_signature("tops")), vec!["post", "stop", "pots"]);
        assert_eq!(index.signature_count(), 2);
    }

    #[test]
    fn test_query_word_need_not_be_in_corpus() {
        let index = index_of(&["tea", "eat"]);
        assert_eq!(as_strs(index.words_sharing_signature("tae")), vec!["tea", "eat"]);
    }

    #[test]
    fn test_query_is_case_normalized() {
        let index = index_of(&["tea", "eat"]);
        assert_eq!(as_strs(index.words_sharing_signature("ATE")), vec!["tea", "eat"]);
    }

    #[test]
    fn test_missing_signature_is_empty() {
        let index = index_of(&["tea"]);
        assert!(index.words_sharing_signature("xyz").is_empty());
        assert!(index.words_sharing_signature("").is_empty());
    }

    #[test]
    fn test_get_by_signature() {
        let index = index_of(&["eats", "east", "seat"]);
        let sig = Signature::of("eat").with_letter('s');
        assert_eq!(as_strs(index.get(&sig)), vec!["eats", "east", "seat"]);
    }

    #[test]
    fn test_empty_index() {
        let index = index_of(&[]);
        assert_eq!(index.signature_count(), 0);
        assert!(index.words_sharing_signature("eat").is_empty());
    }
}
