//! Word frequency model built from corpus text.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use lazy_static::lazy_static;
use log::info;
use rayon::prelude::*;
use regex::Regex;

use crate::error::{read_to_string, Result, SpellError};

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").expect("word pattern is valid");
    static ref APOSTROPHE_WORD: Regex =
        Regex::new(r"[^\W_]+['’]*[^\W_]*").expect("apostrophe pattern is valid");
}

/// How corpus text is split into word tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tokenizer {
    /// Maximal runs of word characters (letters, digits, underscore).
    #[default]
    Word,
    /// Letters and digits, optionally joined or followed by apostrophes. A
    /// token never starts with an apostrophe and underscore splits words.
    Apostrophe,
}

impl Tokenizer {
    fn regex(self) -> &'static Regex {
        match self {
            Tokenizer::Word => &*WORD,
            Tokenizer::Apostrophe => &*APOSTROPHE_WORD,
        }
    }

    /// Lowercase `text` and return its tokens in order of appearance.
    pub fn tokens(self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.regex()
            .find_iter(&lowered)
            .map(|m| m.as_str().to_owned())
            .collect()
    }
}

/// Lowercase `text` and split it into word tokens with the default tokenizer.
pub fn words(text: &str) -> Vec<String> {
    Tokenizer::Word.tokens(text)
}

fn count_tokens(tokenizer: Tokenizer, text: &str) -> HashMap<String, usize> {
    let lowered = text.to_lowercase();
    let mut counts = HashMap::new();
    for m in tokenizer.regex().find_iter(&lowered) {
        *counts.entry(m.as_str().to_owned()).or_insert(0) += 1;
    }
    counts
}

fn merge_counts(
    mut left: HashMap<String, usize>,
    mut right: HashMap<String, usize>,
) -> HashMap<String, usize> {
    if left.len() < right.len() {
        std::mem::swap(&mut left, &mut right);
    }
    for (word, count) in right {
        *left.entry(word).or_insert(0) += count;
    }
    left
}

/// Immutable mapping from word to occurrence count.
///
/// Every stored count is at least one; a word is *known* iff it is a key.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    word_freqs: HashMap<String, usize>,
    total_words: usize,
}

impl FrequencyModel {
    fn from_map(word_freqs: HashMap<String, usize>) -> Self {
        let total_words = word_freqs.values().sum();
        FrequencyModel {
            word_freqs,
            total_words,
        }
    }

    /// A model with no words. Every lookup against it misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Count the word tokens of a single text.
    pub fn from_text(text: &str) -> Self {
        Self::from_texts(&[text])
    }

    /// Count word tokens across several texts combined.
    pub fn from_texts<S: AsRef<str> + Sync>(texts: &[S]) -> Self {
        Self::with_tokenizer(Tokenizer::Word, texts)
    }

    /// Count tokens across several texts using the given tokenizer.
    ///
    /// Texts are counted in parallel and merged, so the result does not depend
    /// on how the work was split.
    pub fn with_tokenizer<S: AsRef<str> + Sync>(tokenizer: Tokenizer, texts: &[S]) -> Self {
        let counts = texts
            .par_iter()
            .map(|text| count_tokens(tokenizer, text.as_ref()))
            .reduce(HashMap::new, merge_counts);

        let model = Self::from_map(counts);
        info!(
            "built frequency model: {} tokens, {} distinct words",
            model.total_words,
            model.word_freqs.len()
        );
        model
    }

    /// Read and count the given corpus files. Any unreadable file is fatal.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        Self::from_files_with_tokenizer(Tokenizer::Word, paths)
    }

    /// Read and count the given corpus files with a specific tokenizer.
    pub fn from_files_with_tokenizer<P: AsRef<Path>>(
        tokenizer: Tokenizer,
        paths: &[P],
    ) -> Result<Self> {
        let texts = paths
            .iter()
            .map(read_to_string)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::with_tokenizer(tokenizer, &texts))
    }

    /// Build from explicit `(word, count)` pairs. Duplicate words are summed and
    /// zero counts are dropped.
    pub fn from_counts<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut word_freqs = HashMap::new();
        for (word, count) in iter {
            if count == 0 {
                continue;
            }
            *word_freqs.entry(word.into()).or_insert(0) += count;
        }
        Self::from_map(word_freqs)
    }

    /// Parse a `term count` per line frequency list.
    ///
    /// Columns are whitespace separated; extra columns are ignored and blank
    /// lines are skipped. Terms are taken verbatim.
    pub fn from_frequency_list(text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut columns = trimmed.split_whitespace();
            let entry = match (columns.next(), columns.next()) {
                (Some(term), Some(count)) => count.parse::<usize>().ok().map(|c| (term, c)),
                _ => None,
            };
            match entry {
                Some(entry) => entries.push(entry),
                None => return Err(SpellError::malformed_frequency_entry(idx + 1, line)),
            }
        }

        let model = Self::from_counts(entries);
        info!(
            "loaded frequency list: {} distinct words",
            model.word_freqs.len()
        );
        Ok(model)
    }

    /// Read and parse a frequency-list file.
    pub fn load_frequency_list<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = read_to_string(path)?;
        Self::from_frequency_list(&text)
    }

    /// Occurrence count of `word`, zero if unknown.
    pub fn count(&self, word: &str) -> usize {
        self.word_freqs.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_freqs.contains_key(word)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total_words
    }

    /// `count(word) / total()`, or `0.0` for an empty model.
    pub fn probability(&self, word: &str) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.count(word) as f64 / self.total_words as f64
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.word_freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_freqs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.word_freqs.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// The subset of `words` that appear in the model.
    pub fn known<I, S>(&self, words: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|w| self.contains(w.as_ref()))
            .map(|w| w.as_ref().to_owned())
            .collect()
    }
}
