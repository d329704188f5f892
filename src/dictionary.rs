use std::cmp::Ordering;
use std::io::BufRead;

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

/// Queries a [`Solver`](crate::Solver) makes of its word list.
pub trait WordIndex {
    /// Whether some word starts with `candidate`, so that extending `candidate` might still spell a word.
    fn may_be_prefix(&self, candidate: &str) -> bool;
    /// Whether `candidate` is exactly a word.
    fn is_word(&self, candidate: &str) -> bool;
}

/// Reasons a [`Dictionary`] could not be constructed.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// No words were supplied, or every line was blank.
    #[error("dictionary contains no words")]
    Empty,
    /// The words were not in ascending byte order; `index` is the first word found out of place.
    #[error("dictionary is not sorted: {previous:?} precedes {word:?} at index {index}")]
    Unsorted {
        /// Position of `word` in the input.
        index: usize,
        /// The word before it, which compares greater.
        previous: String,
        /// The out-of-place word.
        word: String,
    },
    /// The word source could not be read.
    #[error("could not read dictionary")]
    Io(#[from] std::io::Error),
}

/// A word list in ascending byte-lexicographic order, answering prefix and membership queries by binary search.
///
/// Words are compared as raw bytes with no case folding, so the list and the grid labels must already share a case
/// convention.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Wrap `words`, which must be non-empty and already sorted. Duplicates are permitted.
    pub fn new(words: Vec<String>) -> Result<Self, DictionaryError> {
        Self::checked(words, false)
    }

    /// Sort `words`, then wrap them as with [`Self::new`].
    pub fn from_unsorted(mut words: Vec<String>) -> Result<Self, DictionaryError> {
        words.sort_unstable();
        Self::checked(words, true)
    }

    fn checked(words: Vec<String>, resorted: bool) -> Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        if let Some((index, (previous, word))) = words.iter()
            .tuple_windows::<(_, _)>()
            .enumerate()
            .find(|(_, (previous, word))| previous > word) {
            return Err(DictionaryError::Unsorted { index: index + 1, previous: previous.clone(), word: word.clone() });
        }

        debug!(words = words.len(), resorted, "loaded dictionary");
        Ok(Self { words })
    }

    /// Read one word per line, trimming whitespace and skipping blank lines. The lines must already be sorted.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        Self::new(read_words(reader)?)
    }

    /// As [`Self::from_reader`], sorting the words first.
    pub fn from_reader_unsorted<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        Self::from_unsorted(read_words(reader)?)
    }

    /// Number of words, counting duplicates.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; an empty dictionary cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    // Closed-interval binary search. With `truncate`, each probed word is cut to the candidate's length first, which
    // keeps the list sorted and makes any word starting with the candidate compare equal.
    fn search(&self, candidate: &str, truncate: bool) -> bool {
        let needle = candidate.as_bytes();
        let (mut start, mut end) = (0, self.words.len() - 1);

        loop {
            let mid = (start + end) / 2;
            let probe = self.words[mid].as_bytes();
            let probe = if truncate && probe.len() >= needle.len() { &probe[..needle.len()] } else { probe };
            let ordering = needle.cmp(probe);

            if start == end {
                return ordering == Ordering::Equal;
            }

            match ordering {
                Ordering::Less => end = mid,
                Ordering::Greater => start = mid + 1,
                Ordering::Equal => return true,
            }
        }
    }
}

impl WordIndex for Dictionary {
    fn may_be_prefix(&self, candidate: &str) -> bool {
        self.search(candidate, true)
    }

    fn is_word(&self, candidate: &str) -> bool {
        self.search(candidate, false)
    }
}

fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>, DictionaryError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }

    Ok(words)
}
