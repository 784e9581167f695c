//! Accuracy and throughput measurement for a corrector over a labeled test set.

use std::fmt;
use std::time::{Duration, Instant};

use crate::corrector::Corrector;
use crate::testset::TestPair;

/// A misspelling the corrector got wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miss {
    pub misspelled: String,
    pub got: String,
    pub got_count: usize,
    pub expected: String,
    pub expected_count: usize,
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "correction({}) => {} ({}); expected {} ({})",
            self.misspelled, self.got, self.got_count, self.expected, self.expected_count
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpellTestReport {
    pub total: usize,
    pub good: usize,
    /// Misses whose expected word is not in the dictionary at all.
    pub unknown: usize,
    pub elapsed: Duration,
    /// Only filled in verbose runs.
    pub misses: Vec<Miss>,
}

impl SpellTestReport {
    fn ratio(&self, n: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            n as f64 / self.total as f64
        }
    }

    /// Fraction of pairs corrected to the expected word.
    pub fn accuracy(&self) -> f64 {
        self.ratio(self.good)
    }

    /// Fraction of pairs that failed with an expected word missing from the
    /// dictionary.
    pub fn unknown_rate(&self) -> f64 {
        self.ratio(self.unknown)
    }

    pub fn words_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for SpellTestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}% of {} correct ({:.0}% unknown) at {:.0} words per second",
            self.accuracy() * 100.0,
            self.total,
            self.unknown_rate() * 100.0,
            self.words_per_second()
        )
    }
}

/// Run `corrector` over every pair and tally the results.
pub fn spelltest<C: Corrector + ?Sized>(
    tests: &[TestPair],
    corrector: &C,
    verbose: bool,
) -> SpellTestReport {
    let start = Instant::now();
    let mut report = SpellTestReport {
        total: tests.len(),
        ..Default::default()
    };

    for pair in tests {
        let got = corrector.correct(&pair.misspelled);
        if got == pair.correct {
            report.good += 1;
            continue;
        }

        if !corrector.is_known(&pair.correct) {
            report.unknown += 1;
        }
        if verbose {
            let miss = Miss {
                got_count: corrector.frequency(&got),
                expected_count: corrector.frequency(&pair.correct),
                misspelled: pair.misspelled.clone(),
                got,
                expected: pair.correct.clone(),
            };
            report.misses.push(miss);
        }
    }

    report.elapsed = start.elapsed();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyModel;
    use crate::norvig::NorvigSpellChecker;

    fn corrector() -> NorvigSpellChecker {
        NorvigSpellChecker::new(FrequencyModel::from_counts(vec![
            ("the", 100),
            ("spelling", 3),
            ("abc", 10),
        ]))
    }

    #[test]
    fn test_counts_good_and_unknown() {
        let tests = vec![
            TestPair::new("the", "teh"),
            TestPair::new("the", "hte"),
            TestPair::new("spelling", "speling"),
            TestPair::new("zebra", "zebar"),
            TestPair::new("abd", "abx"),
        ];
        let report = spelltest(&tests, &corrector(), false);
        assert_eq!(report.total, 5);
        assert_eq!(report.good, 3);
        assert_eq!(report.unknown, 2);
        assert!(report.misses.is_empty());
        assert!((report.accuracy() - 0.6).abs() < 1e-12);
        assert!((report.unknown_rate() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_verbose_records_misses() {
        let tests = vec![TestPair::new("abd", "abx"), TestPair::new("the", "teh")];
        let report = spelltest(&tests, &corrector(), true);
        assert_eq!(
            report.misses,
            vec![Miss {
                misspelled: "abx".into(),
                got: "abc".into(),
                got_count: 10,
                expected: "abd".into(),
                expected_count: 0,
            }]
        );
        assert_eq!(
            report.misses[0].to_string(),
            "correction(abx) => abc (10); expected abd (0)"
        );
    }

    #[test]
    fn test_report_display() {
        let report = SpellTestReport {
            total: 270,
            good: 203,
            unknown: 15,
            elapsed: Duration::from_secs(2),
            misses: Vec::new(),
        };
        assert_eq!(
            report.to_string(),
            "75% of 270 correct (6% unknown) at 135 words per second"
        );
    }

    #[test]
    fn test_empty_testset() {
        let report = spelltest(&[], &corrector(), false);
        assert_eq!(report.accuracy(), 0.0);
        assert_eq!(report.unknown_rate(), 0.0);
        assert!(report.to_string().starts_with("0% of 0 correct (0% unknown)"));
    }
}
