//! Norvig-style spelling correction over a word frequency model.

use std::collections::BTreeSet;

use log::debug;

use crate::corrector::Corrector;
use crate::edits::{edit2_variants, edit_variants};
use crate::frequency::FrequencyModel;

/// Where a candidate set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// The word itself is in the dictionary.
    Known,
    /// Known words one edit away.
    Edit1,
    /// Known words two edits away.
    Edit2,
    /// Nothing known within two edits; the input is its own candidate.
    Unknown,
}

impl Tier {
    /// Tiers tried in order; the first non-empty one wins.
    pub const SEARCH_ORDER: [Tier; 3] = [Tier::Known, Tier::Edit1, Tier::Edit2];
}

/// The winning candidate set for a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub tier: Tier,
    pub words: BTreeSet<String>,
}

pub struct NorvigSpellChecker {
    model: FrequencyModel,
}

impl NorvigSpellChecker {
    pub fn new(model: FrequencyModel) -> Self {
        NorvigSpellChecker { model }
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    fn known_at(&self, tier: Tier, word: &str) -> BTreeSet<String> {
        match tier {
            Tier::Known => self.model.known([word]),
            Tier::Edit1 => self.model.known(edit_variants(word)),
            Tier::Edit2 => edit2_variants(word)
                .filter(|e2| self.model.contains(e2))
                .collect(),
            Tier::Unknown => BTreeSet::new(),
        }
    }

    /// Known corrections for `word` from the first tier that has any.
    pub fn candidates(&self, word: &str) -> Candidates {
        for tier in Tier::SEARCH_ORDER {
            let words = self.known_at(tier, word);
            if !words.is_empty() {
                debug!("{:?}: {} candidate(s) at {:?}", word, words.len(), tier);
                return Candidates { tier, words };
            }
        }

        debug!("{:?}: no known word within two edits", word);
        Candidates {
            tier: Tier::Unknown,
            words: BTreeSet::from([word.to_owned()]),
        }
    }

    /// The subset of `words` present in the dictionary.
    pub fn known<I, S>(&self, words: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.model.known(words)
    }

    /// Probability of `word` under the frequency model.
    pub fn prob(&self, word: &str) -> f64 {
        self.model.probability(word)
    }

    pub fn freq(&self, word: &str) -> usize {
        self.model.count(word)
    }

    /// All candidates, most frequent first. Equal counts are ordered
    /// alphabetically.
    pub fn spell(&self, word: &str) -> Vec<String> {
        let mut candidates: Vec<String> = self.candidates(word).words.into_iter().collect();
        // Stable over the alphabetical set order, so ties stay alphabetical.
        candidates.sort_by_key(|w| std::cmp::Reverse(self.freq(w)));
        candidates
    }

    /// The most probable correction for `word`.
    ///
    /// Among candidates with the same count the alphabetically smallest wins.
    pub fn correct(&self, word: &str) -> String {
        self.candidates(word)
            .words
            .into_iter()
            .max_by(|a, b| self.freq(a).cmp(&self.freq(b)).then_with(|| b.cmp(a)))
            .unwrap_or_else(|| word.to_owned())
    }

    pub fn dictionary(&self) -> Vec<(String, usize)> {
        self.model
            .iter()
            .map(|(word, freq)| (word.to_owned(), freq))
            .collect()
    }
}

impl Corrector for NorvigSpellChecker {
    fn correct(&self, word: &str) -> String {
        NorvigSpellChecker::correct(self, word)
    }

    fn frequency(&self, word: &str) -> usize {
        self.freq(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(entries: &[(&str, usize)]) -> NorvigSpellChecker {
        NorvigSpellChecker::new(FrequencyModel::from_counts(entries.iter().copied()))
    }

    #[test]
    fn test_single_substitution_prefers_higher_count() {
        let checker = checker(&[("abc", 10), ("abd", 5)]);
        assert_eq!(checker.correct("abx"), "abc");
        assert_eq!(checker.candidates("abx").tier, Tier::Edit1);
        assert_eq!(checker.spell("abx"), vec!["abc", "abd"]);
    }

    #[test]
    fn test_empty_model_returns_input() {
        let checker = NorvigSpellChecker::new(FrequencyModel::empty());
        assert_eq!(checker.correct("hello"), "hello");
        assert_eq!(checker.candidates("hello").tier, Tier::Unknown);
    }

    #[test]
    fn test_known_word_is_its_own_correction() {
        let model = FrequencyModel::from_text("the thee then the the a an and");
        let checker = NorvigSpellChecker::new(model);
        for (word, _) in checker.dictionary() {
            assert_eq!(checker.correct(&word), word);
        }
        let candidates = checker.candidates("thee");
        assert_eq!(candidates.tier, Tier::Known);
        assert_eq!(candidates.words.len(), 1);
    }

    #[test]
    fn test_closer_tier_wins_over_higher_count() {
        let checker = checker(&[("spell", 1), ("spells", 1000)]);
        assert_eq!(checker.correct("spelz"), "spell");
    }

    #[test]
    fn test_two_edit_correction() {
        let checker = checker(&[("spelling", 3)]);
        let candidates = checker.candidates("speling");
        assert_eq!(candidates.tier, Tier::Edit1);

        let candidates = checker.candidates("spellnig");
        assert_eq!(candidates.tier, Tier::Edit1);

        let candidates = checker.candidates("sepllign");
        assert_eq!(candidates.tier, Tier::Edit2);
        assert_eq!(checker.correct("sepllign"), "spelling");
    }

    #[test]
    fn test_unknown_beyond_two_edits() {
        let checker = checker(&[("spelling", 3)]);
        assert_eq!(checker.correct("xyz"), "xyz");
        assert_eq!(checker.spell("xyz"), vec!["xyz"]);
    }

    #[test]
    fn test_tie_break_is_alphabetical() {
        let checker = checker(&[("cat", 4), ("bat", 4), ("hat", 4)]);
        for _ in 0..5 {
            assert_eq!(checker.correct("xat"), "bat");
        }
        assert_eq!(checker.spell("xat"), vec!["bat", "cat", "hat"]);
    }

    #[test]
    fn test_correct_is_total() {
        let checker = checker(&[("a", 1), ("word", 7)]);
        for input in ["", "!", "123", "wörd", "WORD", "a b"] {
            let corrected = checker.correct(input);
            if !input.is_empty() {
                assert!(!corrected.is_empty(), "empty correction for {input:?}");
            }
        }
        // The empty string is one insertion away from "a".
        assert_eq!(checker.correct(""), "a");
    }

    #[test]
    fn test_prob_normalizes_counts() {
        let checker = checker(&[("abc", 10), ("abd", 5)]);
        assert!((checker.prob("abc") - 10.0 / 15.0).abs() < 1e-12);
        assert_eq!(checker.prob("zzz"), 0.0);
        assert_eq!(checker.known(["abc", "zzz"]).len(), 1);
    }
}
