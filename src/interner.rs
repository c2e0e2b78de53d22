//! String interning so each corpus word is allocated once.
//!
//! The word set, the signature index and the length buckets all hold the same
//! words. Each dictionary owns one `Interner`; the structures share `Rc<str>`
//! pointers into it. The interner doubles as the corpus word set.

use std::collections::HashSet;
use std::rc::Rc;

#[derive(Debug, Default)]
pub(crate) struct Interner {
    words: HashSet<Rc<str>>,
}

impl Interner {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Interner { words: HashSet::with_capacity(capacity) }
    }

    /// Intern a string, returning an `Rc<str>`.
    ///
    /// If the string has been interned before, returns a cheap clone of the existing `Rc`.
    pub(crate) fn intern(&mut self, s: &str) -> Rc<str> {
        if let Some(existing) = self.words.get(s) {
            return Rc::clone(existing);
        }

        let rc: Rc<str> = Rc::from(s);
        self.words.insert(Rc::clone(&rc));
        rc
    }

    pub(crate) fn contains(&self, s: &str) -> bool {
        self.words.contains(s)
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_same_string_returns_same_rc() {
        let mut interner = Interner::default();

        let s1 = interner.intern("hello");
        let s2 = interner.intern("hello");

        // Same underlying allocation - Rc::ptr_eq checks pointer equality
        assert!(Rc::ptr_eq(&s1, &s2));
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn test_intern_different_strings() {
        let mut interner = Interner::default();

        let s1 = interner.intern("hello");
        let s2 = interner.intern("world");

        assert!(!Rc::ptr_eq(&s1, &s2));
        assert_eq!(s1.as_ref(), "hello");
        assert_eq!(s2.as_ref(), "world");
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_contains() {
        let mut interner = Interner::with_capacity(4);
        interner.intern("post");

        assert!(interner.contains("post"));
        assert!(!interner.contains("posts"));
        assert!(!interner.contains(""));
    }

    #[test]
    fn test_interners_are_independent() {
        let mut a = Interner::default();
        let b = Interner::default();
        a.intern("stop");

        assert!(a.contains("stop"));
        assert!(!b.contains("stop"));
    }
}
