use std::ops::RangeInclusive;

/// The letters a word can be extended by, in the order extensions are reported.
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';

pub(crate) trait AnagramChar {
    /// A letter the game can play with: ASCII `a`–`z` in either case.
    fn is_letter(&self) -> bool;
}

impl AnagramChar for char {
    fn is_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }
}

/// The first character in `word` that is not a playable letter, if any.
pub(crate) fn first_non_letter(word: &str) -> Option<char> {
    word.chars().find(|c| !c.is_letter())
}
