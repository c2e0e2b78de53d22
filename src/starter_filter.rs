//! Prune length buckets down to words that make a solvable round.

use crate::extensions::count_extensions;
use crate::length_buckets::LengthBuckets;
use crate::signature::Signature;
use crate::signature_index::SignatureIndex;
use instant::Instant;
use log::debug;
use std::fmt;

/// Outcome of filtering one length bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketFilterStats {
    pub length: usize,
    pub kept: usize,
    pub removed: usize,
}

/// Per-length outcome of the starter filter, shortest length first.
///
/// Lengths with no candidates to begin with have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub buckets: Vec<BucketFilterStats>,
}

impl FilterReport {
    pub fn total_kept(&self) -> usize {
        self.buckets.iter().map(|b| b.kept).sum()
    }

    pub fn total_removed(&self) -> usize {
        self.buckets.iter().map(|b| b.removed).sum()
    }

    /// Lengths whose candidates were all filtered out.
    pub fn empty_lengths(&self) -> Vec<usize> {
        self.buckets.iter().filter(|b| b.kept == 0).map(|b| b.length).collect()
    }
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self
            .buckets
            .iter()
            .map(|b| format!("{}: {} kept/{} removed", b.length, b.kept, b.removed))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Remove every bucketed word with fewer than `min_anagrams` one-letter extensions.
///
/// Runs once, before any starter word is picked. A bucket may end up empty; that
/// is reported, not treated as an error.
pub fn filter_starter_words(buckets: &mut LengthBuckets, index: &SignatureIndex, min_anagrams: usize) -> FilterReport {
    let t_filter = Instant::now();

    let report = FilterReport {
        buckets: buckets
            .retain(|word| count_extensions(index, word, &Signature::of(word)) >= min_anagrams)
            .into_iter()
            .map(|(length, kept, removed)| BucketFilterStats { length, kept, removed })
            .collect(),
    };

    debug!(
        "Filtered starter words (min {min_anagrams} extensions) in {:.3}s: {report}",
        t_filter.elapsed().as_secs_f64()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::extensions_of;
    use std::rc::Rc;

    const EAT_CORPUS: [&str; 8] = ["eat", "tea", "ate", "eats", "east", "seat", "teas", "eaten"];

    fn build(words: &[&str], lengths: std::ops::RangeInclusive<usize>) -> (SignatureIndex, LengthBuckets) {
        let rcs: Vec<Rc<str>> = words.iter().map(|w| Rc::from(*w)).collect();
        (SignatureIndex::build(rcs.iter().cloned()), LengthBuckets::build(lengths, rcs))
    }

    #[test]
    fn test_eat_survives_at_threshold_two() {
        let (index, mut buckets) = build(&EAT_CORPUS, 3..=5);

        let report = filter_starter_words(&mut buckets, &index, 2);

        // eat → east, teas; tea → eats, east, seat; ate → eats, east, seat, teas
        let kept: Vec<&str> = buckets.bucket(3).iter().map(|w| w.as_ref()).collect();
        assert_eq!(kept, vec!["eat", "tea", "ate"]);
        assert!(buckets.bucket(4).is_empty());
        assert!(buckets.bucket(5).is_empty());
        assert_eq!(report.total_kept(), 3);
        assert_eq!(report.total_removed(), 5);
        assert_eq!(report.empty_lengths(), vec![4, 5]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let (index, mut buckets) = build(&EAT_CORPUS, 3..=3);

        filter_starter_words(&mut buckets, &index, 3);

        // eat has exactly 2, tea 3, ate 4
        let kept: Vec<&str> = buckets.bucket(3).iter().map(|w| w.as_ref()).collect();
        assert_eq!(kept, vec!["tea", "ate"]);
    }

    #[test]
    fn test_every_survivor_meets_threshold() {
        let (index, mut buckets) = build(&EAT_CORPUS, 3..=5);
        let before: Vec<Rc<str>> = buckets.iter().flat_map(|(_, ws)| ws.iter().cloned()).collect();

        filter_starter_words(&mut buckets, &index, 3);

        for (_, words) in buckets.iter() {
            for w in words {
                assert!(extensions_of(&index, w).len() >= 3, "{w} should have at least 3 extensions");
            }
        }
        for w in before {
            let survived = buckets.bucket(w.len()).contains(&w);
            assert_eq!(survived, extensions_of(&index, &w).len() >= 3, "wrong verdict for {w}");
        }
    }

    #[test]
    fn test_report_skips_lengths_without_candidates() {
        let (index, mut buckets) = build(&EAT_CORPUS, 3..=usize::MAX);
        let report = filter_starter_words(&mut buckets, &index, 2);

        let lengths: Vec<usize> = report.buckets.iter().map(|b| b.length).collect();
        assert_eq!(lengths, vec![3, 4, 5]);
        assert_eq!(report.empty_lengths(), vec![4, 5]);
    }

    #[test]
    fn test_zero_threshold_keeps_everything() {
        let (index, mut buckets) = build(&EAT_CORPUS, 3..=5);
        let report = filter_starter_words(&mut buckets, &index, 0);

        assert_eq!(report.total_removed(), 0);
        assert_eq!(buckets.total(), 8);
    }

    #[test]
    fn test_report_display() {
        let report = FilterReport {
            buckets: vec![
                BucketFilterStats { length: 3, kept: 2, removed: 1 },
                BucketFilterStats { length: 4, kept: 0, removed: 4 },
            ],
        };
        assert_eq!(report.to_string(), "3: 2 kept/1 removed, 4: 0 kept/4 removed");
    }
}
