//! Candidate starter words grouped by length.
//!
//! Only lengths inside the playable range are bucketed, and a bucket exists only
//! once a word of that length turns up, so memory follows the corpus rather than
//! the width of the range. The starter filter only shrinks the buckets' contents.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct LengthBuckets {
    buckets: BTreeMap<usize, Vec<Rc<str>>>,
}

impl LengthBuckets {
    /// Bucket every word whose length lies in `lengths`; skip the rest.
    pub fn build<I>(lengths: RangeInclusive<usize>, words: I) -> LengthBuckets
    where
        I: IntoIterator<Item = Rc<str>>,
    {
        let mut buckets: BTreeMap<usize, Vec<Rc<str>>> = BTreeMap::new();
        for word in words {
            let len = word.chars().count();
            if lengths.contains(&len) {
                buckets.entry(len).or_default().push(word);
            }
        }
        LengthBuckets { buckets }
    }

    /// The words of length `len`. Empty when no word of that length was bucketed.
    pub fn bucket(&self, len: usize) -> &[Rc<str>] {
        self.buckets.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Keep only the words for which `keep` returns true, bucket by bucket.
    ///
    /// Returns `(length, kept, removed)` for every bucket, shortest first.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<(usize, usize, usize)>
    where
        F: FnMut(&str) -> bool,
    {
        self.buckets
            .iter_mut()
            .map(|(&len, words)| {
                let before = words.len();
                words.retain(|w| keep(w));
                (len, words.len(), before - words.len())
            })
            .collect()
    }

    /// `(length, words)` pairs, shortest first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Rc<str>])> {
        self.buckets.iter().map(|(&len, words)| (len, words.as_slice()))
    }

    /// Total number of bucketed words.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
