//! One-letter-extension anagrams.
//!
//! The extensions of a word are the corpus words that use all of its letters plus
//! exactly one more, in any order: "eat" → "east", "teas", ...
//!
//! Any result that contains the base word as a contiguous substring, ignoring
//! case, is dropped, so "eat" → "eats" and "eat" → "Seat" do not count. The
//! same rule decides whether a guess is acceptable, so the starter filter and
//! live play agree on what counts as an answer.

use crate::anagram_char::LOWERCASE_ALPHABET;
use crate::signature::Signature;
use crate::signature_index::SignatureIndex;
use std::rc::Rc;

/// Whether `candidate` contains `base` as a contiguous substring, ignoring case.
pub(crate) fn wraps_word(candidate: &str, base: &str) -> bool {
    candidate.to_lowercase().contains(&base.to_lowercase())
}

/// Corpus words with `signature` plus one letter, minus those wrapping `word`.
fn matching_extensions<'a>(
    index: &'a SignatureIndex,
    word: &str,
    signature: &'a Signature,
) -> impl Iterator<Item = &'a Rc<str>> + 'a {
    let base = word.to_lowercase();
    LOWERCASE_ALPHABET
        .flat_map(move |c| index.get(&signature.with_letter(c)))
        .filter(move |candidate| !candidate.to_lowercase().contains(base.as_str()))
}

/// The one-letter-extension anagrams of `word`.
///
/// Results come grouped by the added letter, `a` through `z`, each group in
/// corpus order. `word` need not be in the corpus.
pub fn extensions_of(index: &SignatureIndex, word: &str) -> Vec<Rc<str>> {
    extensions_with_signature(index, word, &Signature::of(word))
}

/// As [`extensions_of`], reusing an already-computed signature of `word`.
pub fn extensions_with_signature(index: &SignatureIndex, word: &str, signature: &Signature) -> Vec<Rc<str>> {
    matching_extensions(index, word, signature).cloned().collect()
}

/// Number of one-letter-extension anagrams of `word`.
pub fn count_extensions(index: &SignatureIndex, word: &str, signature: &Signature) -> usize {
    matching_extensions(index, word, signature).count()
}
