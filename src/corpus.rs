//! `corpus`: load and preprocess the word list the dictionary is built from.
//!
//! A corpus can come from a file, from any buffered reader, or from an in-memory
//! string (the latter is what WebAssembly builds use, since direct file I/O isn't
//! allowed there).
//!
//! The parsing logic:
//! - One word per line.
//! - Each line is trimmed; lines that are empty after trimming are skipped.
//! - Words keep the case they were written in; "Paris" stays "Paris". Only
//!   signatures are case-normalized.
//! - A word containing anything but ASCII letters is rejected
//!   ([`LoadPolicy::Strict`]) or skipped with a warning ([`LoadPolicy::Lenient`]).
//! - Exact repeats are dropped; the first occurrence keeps its position, so the
//!   final list is in corpus order. "Tea" and "tea" are different words.
//!
//! `load_from_path(...)` is **native-only**.

use crate::anagram_char::first_non_letter;
use crate::errors::CorpusError;
use log::{info, warn};
use std::collections::HashSet;
use std::io::BufRead;

/// What to do with a word that contains characters other than ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Fail on the first such word.
    #[default]
    Strict,
    /// Skip it and log a warning.
    Lenient,
}

/// A processed, ready-to-index word list.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Distinct words as written, in the order they first appeared.
    /// Example: `["eat", "tea", "ate", "eats", ...]`
    pub words: Vec<String>,
    /// Number of words dropped under [`LoadPolicy::Lenient`].
    pub skipped: usize,
}

/// Accumulates lines into a [`Corpus`] while tracking duplicates.
struct CorpusBuilder {
    policy: LoadPolicy,
    seen: HashSet<String>,
    corpus: Corpus,
}

impl CorpusBuilder {
    fn new(policy: LoadPolicy) -> Self {
        CorpusBuilder { policy, seen: HashSet::new(), corpus: Corpus::default() }
    }

    fn push_line(&mut self, line_number: usize, raw_line: &str) -> Result<(), Box<CorpusError>> {
        let line = raw_line.trim();
        if line.is_empty() {
            return Ok(());
        }

        if let Some(invalid_char) = first_non_letter(line) {
            return match self.policy {
                LoadPolicy::Strict => Err(Box::new(CorpusError::InvalidWordChars {
                    line: line_number,
                    word: line.to_string(),
                    invalid_char,
                })),
                LoadPolicy::Lenient => {
                    warn!("Skipping \"{line}\" on line {line_number}: invalid character '{invalid_char}'");
                    self.corpus.skipped += 1;
                    Ok(())
                }
            };
        }

        let word = line.to_string();
        if self.seen.insert(word.clone()) {
            self.corpus.words.push(word);
        }
        Ok(())
    }

    fn finish(self) -> Corpus {
        info!("Loaded {} words ({} skipped)", self.corpus.words.len(), self.corpus.skipped);
        self.corpus
    }
}

impl Corpus {
    /// Build a corpus directly from already-clean words, skipping the line rules.
    ///
    /// Empty strings and exact repeats are still dropped.
    pub fn from_words<I, S>(words: I) -> Corpus
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();
        Corpus { words, skipped: 0 }
    }

    /// Parse a corpus from an in-memory string (one word per line).
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    ///
    /// # Errors
    ///
    /// Under [`LoadPolicy::Strict`], returns [`CorpusError::InvalidWordChars`] for
    /// the first word that contains a character other than an ASCII letter.
    pub fn parse_from_str(contents: &str, policy: LoadPolicy) -> Result<Corpus, Box<CorpusError>> {
        let mut builder = CorpusBuilder::new(policy);
        for (idx, raw_line) in contents.lines().enumerate() {
            builder.push_line(idx + 1, raw_line)?;
        }
        Ok(builder.finish())
    }

    /// Read a corpus line by line from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Io`] if the reader fails, or
    /// [`CorpusError::InvalidWordChars`] as for [`Corpus::parse_from_str`].
    pub fn from_reader<R: BufRead>(reader: R, policy: LoadPolicy) -> Result<Corpus, Box<CorpusError>> {
        Self::read_lines(reader, "reader", policy)
    }

    fn read_lines<R: BufRead>(reader: R, source_name: &str, policy: LoadPolicy) -> Result<Corpus, Box<CorpusError>> {
        let mut builder = CorpusBuilder::new(policy);
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| {
                Box::new(CorpusError::Io { context: format!("{source_name} (line {})", idx + 1), source })
            })?;
            builder.push_line(idx + 1, &line)?;
        }
        Ok(builder.finish())
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Example:
    /// `let corpus = Corpus::load_from_path("words.txt", LoadPolicy::Strict)?;`
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Io`] if the file cannot be opened or read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P, policy: LoadPolicy) -> Result<Corpus, Box<CorpusError>> {
        let path_ref = path.as_ref();
        let source_name = format!("'{}'", path_ref.display());

        let file = std::fs::File::open(path_ref)
            .map_err(|source| Box::new(CorpusError::Io { context: source_name.clone(), source }))?;

        Self::read_lines(std::io::BufReader::new(file), &source_name, policy)
    }
}
