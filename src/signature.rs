//! Canonical letter signatures.
//!
//! A signature is a word's characters, lowercased and sorted ascending (an
//! "alphagram"). Two words are anagrams of each other exactly when their
//! signatures are equal, which makes the signature the key of the anagram index.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(Box<str>);

impl Signature {
    /// Compute the signature of `word`.
    #[must_use]
    pub fn of(word: &str) -> Signature {
        let mut chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
        chars.sort_unstable();
        Signature(chars.into_iter().collect::<String>().into_boxed_str())
    }

    /// The signature of `word + c`, given the signature of `word`.
    ///
    /// Inserting into the already-sorted form is linear, so callers that try all
    /// 26 extra letters pay for one sort instead of 26.
    #[must_use]
    pub fn with_letter(&self, c: char) -> Signature {
        let mut extended = String::with_capacity(self.0.len() + c.len_utf8());
        let mut inserted = false;
        for existing in self.0.chars() {
            if !inserted && c <= existing {
                extended.push(c);
                inserted = true;
            }
            extended.push(existing);
        }
        if !inserted {
            extended.push(c);
        }
        Signature(extended.into_boxed_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anagram_char::LOWERCASE_ALPHABET;
    use proptest::prelude::*;

    #[test]
    fn test_of_sorts_letters() {
        assert_eq!(Signature::of("stop").as_str(), "opst");
        assert_eq!(Signature::of("eat").as_str(), "aet");
        assert_eq!(Signature::of("").as_str(), "");
    }

    #[test]
    fn test_of_is_case_normalized() {
        assert_eq!(Signature::of("Tea"), Signature::of("eat"));
        assert_eq!(Signature::of("POST"), Signature::of("spot"));
    }

    #[test]
    fn test_anagrams_share_signature() {
        let sig = Signature::of("post");
        for w in ["stop", "pots", "tops", "opts", "spot"] {
            assert_eq!(Signature::of(w), sig, "{w} should be an anagram of post");
        }
        assert_ne!(Signature::of("posts"), sig);
        assert_ne!(Signature::of("pot"), sig);
    }

    #[test]
    fn test_with_letter_positions() {
        let sig = Signature::of("eat"); // "aet"
        assert_eq!(sig.with_letter('a').as_str(), "aaet"); // front, duplicate
        assert_eq!(sig.with_letter('s').as_str(), "aest"); // middle
        assert_eq!(sig.with_letter('z').as_str(), "aetz"); // end
        assert_eq!(Signature::of("").with_letter('q').as_str(), "q");
    }

    proptest! {
        #[test]
        fn prop_with_letter_matches_resort(word in "[a-z]{0,12}", idx in 0usize..26) {
            let c = LOWERCASE_ALPHABET.nth(idx).unwrap();
            let extended = format!("{word}{c}");
            prop_assert_eq!(Signature::of(&word).with_letter(c), Signature::of(&extended));
        }

        #[test]
        fn prop_signature_equal_iff_permutation(a in "[a-e]{0,6}", b in "[a-e]{0,6}") {
            let mut a_sorted: Vec<char> = a.chars().collect();
            let mut b_sorted: Vec<char> = b.chars().collect();
            a_sorted.sort_unstable();
            b_sorted.sort_unstable();
            prop_assert_eq!(Signature::of(&a) == Signature::of(&b), a_sorted == b_sorted);
        }

        #[test]
        fn prop_shuffled_word_keeps_signature(word in "[a-z]{1,10}", rotation in 0usize..10) {
            let chars: Vec<char> = word.chars().collect();
            let k = rotation % chars.len();
            let rotated: String = chars[k..].iter().chain(&chars[..k]).collect();
            prop_assert_eq!(Signature::of(&word), Signature::of(&rotated));
        }
    }
}
