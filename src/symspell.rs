//! Symmetric-delete spelling correction.
//!
//! Every dictionary word is indexed under all the strings obtained by deleting
//! up to `max_dictionary_edit_distance` characters from its prefix. A lookup
//! then only has to generate deletions of the query, which is far cheaper than
//! enumerating insertions and substitutions over an alphabet. Candidates found
//! through the index are verified with the optimal string alignment distance.

use std::collections::{HashMap, HashSet};

use log::{info, warn};

use crate::corrector::Corrector;
use crate::error::{Result, SpellError};
use crate::frequency::FrequencyModel;

/// Controls which suggestions a lookup returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// The single best suggestion.
    Top,
    /// Every suggestion at the smallest distance found.
    Closest,
    /// Every suggestion within the requested distance.
    All,
}

/// A dictionary word proposed for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub term: String,
    /// Edit distance from the query.
    pub distance: usize,
    /// Frequency of the term in the dictionary.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymSpellConfig {
    /// Largest edit distance the delete index supports.
    pub max_dictionary_edit_distance: usize,
    /// Number of leading characters of each word that get indexed.
    pub prefix_length: usize,
    /// Words seen fewer times than this are left out of the dictionary.
    pub count_threshold: usize,
}

impl Default for SymSpellConfig {
    fn default() -> Self {
        SymSpellConfig {
            max_dictionary_edit_distance: 2,
            prefix_length: 7,
            count_threshold: 1,
        }
    }
}

impl SymSpellConfig {
    pub fn with_max_edit_distance(max_dictionary_edit_distance: usize) -> Self {
        SymSpellConfig {
            max_dictionary_edit_distance,
            ..Default::default()
        }
    }
}

/// Prefix of `word` holding at most `len` chars.
fn prefix(word: &str, len: usize) -> &str {
    match word.char_indices().nth(len) {
        Some((idx, _)) => &word[..idx],
        None => word,
    }
}

/// `key` itself plus every string reachable by deleting up to `max_distance`
/// of its chars.
fn prefix_deletes(key: &str, max_distance: usize) -> HashSet<String> {
    let mut out = HashSet::new();
    out.insert(key.to_owned());

    let mut frontier = vec![key.to_owned()];
    for _ in 0..max_distance {
        let mut next = Vec::new();
        for s in &frontier {
            for (i, c) in s.char_indices() {
                let mut t = String::with_capacity(s.len());
                t.push_str(&s[..i]);
                t.push_str(&s[i + c.len_utf8()..]);
                if out.insert(t.clone()) {
                    next.push(t);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    out
}

/// Optimal string alignment distance: Levenshtein plus adjacent transpositions,
/// with no substring edited more than once.
pub fn osa_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (alen, blen) = (a.len(), b.len());

    if alen == 0 {
        return blen;
    }
    if blen == 0 {
        return alen;
    }

    let mut dp = vec![vec![0usize; blen + 1]; alen + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=blen {
        dp[0][j] = j;
    }

    for i in 1..=alen {
        for j in 1..=blen {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(dp[i - 2][j - 2] + 1);
            }
            dp[i][j] = best;
        }
    }

    dp[alen][blen]
}

pub struct SymSpellChecker {
    config: SymSpellConfig,
    words: FrequencyModel,
    deletes: HashMap<String, Vec<String>>,
}

impl SymSpellChecker {
    /// Index every word of `model` seen at least `count_threshold` times.
    pub fn new(model: &FrequencyModel, config: SymSpellConfig) -> Self {
        let mut config = config;
        if config.prefix_length <= config.max_dictionary_edit_distance {
            warn!(
                "prefix length {} must exceed the max edit distance {}, using {}",
                config.prefix_length,
                config.max_dictionary_edit_distance,
                config.max_dictionary_edit_distance + 1
            );
            config.prefix_length = config.max_dictionary_edit_distance + 1;
        }

        let words = FrequencyModel::from_counts(
            model
                .iter()
                .filter(|&(_, count)| count >= config.count_threshold),
        );

        let mut deletes: HashMap<String, Vec<String>> = HashMap::new();
        for (word, _) in words.iter() {
            let key = prefix(word, config.prefix_length);
            for delete in prefix_deletes(key, config.max_dictionary_edit_distance) {
                deletes.entry(delete).or_default().push(word.to_owned());
            }
        }

        info!(
            "built symspell index: {} words, {} delete keys, max distance {}",
            words.len(),
            deletes.len(),
            config.max_dictionary_edit_distance
        );

        SymSpellChecker {
            config,
            words,
            deletes,
        }
    }

    pub fn config(&self) -> &SymSpellConfig {
        &self.config
    }

    /// The indexed dictionary.
    pub fn words(&self) -> &FrequencyModel {
        &self.words
    }

    /// Suggestions for `term` within `max_edit_distance`, ordered by distance,
    /// then descending count, then alphabetically.
    pub fn lookup(
        &self,
        term: &str,
        max_edit_distance: usize,
        verbosity: Verbosity,
    ) -> Result<Vec<Suggestion>> {
        if max_edit_distance > self.config.max_dictionary_edit_distance {
            return Err(SpellError::InvalidEditDistance {
                requested: max_edit_distance,
                max: self.config.max_dictionary_edit_distance,
            });
        }
        Ok(self.lookup_within(term, max_edit_distance, verbosity))
    }

    fn lookup_within(
        &self,
        term: &str,
        max_edit_distance: usize,
        verbosity: Verbosity,
    ) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        let count = self.words.count(term);
        if count > 0 {
            suggestions.push(Suggestion {
                term: term.to_owned(),
                distance: 0,
                count,
            });
            if verbosity != Verbosity::All {
                return suggestions;
            }
        }
        if max_edit_distance == 0 {
            return suggestions;
        }

        let term_len = term.chars().count();
        let mut considered: HashSet<&str> = HashSet::new();
        considered.insert(term);

        let key = prefix(term, self.config.prefix_length);
        for candidate in prefix_deletes(key, max_edit_distance) {
            let Some(origins) = self.deletes.get(&candidate) else {
                continue;
            };
            for word in origins {
                if !considered.insert(word.as_str()) {
                    continue;
                }
                if word.chars().count().abs_diff(term_len) > max_edit_distance {
                    continue;
                }
                let distance = osa_distance(term, word);
                if distance <= max_edit_distance {
                    suggestions.push(Suggestion {
                        term: word.clone(),
                        distance,
                        count: self.words.count(word),
                    });
                }
            }
        }

        suggestions.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| b.count.cmp(&a.count))
                .then_with(|| a.term.cmp(&b.term))
        });

        match verbosity {
            Verbosity::Top => suggestions.truncate(1),
            Verbosity::Closest => {
                if let Some(min) = suggestions.first().map(|s| s.distance) {
                    suggestions.retain(|s| s.distance == min);
                }
            }
            Verbosity::All => {}
        }

        suggestions
    }
}

impl Corrector for SymSpellChecker {
    /// Closest lookup at the configured distance; unknown words come back as is.
    fn correct(&self, word: &str) -> String {
        let max = self.config.max_dictionary_edit_distance;
        self.lookup_within(word, max, Verbosity::Closest)
            .into_iter()
            .next()
            .map(|s| s.term)
            .unwrap_or_else(|| word.to_owned())
    }

    fn frequency(&self, word: &str) -> usize {
        self.words.count(word)
    }
}
