//! Labeled misspellings in the `correct: wrong1 wrong2 ...` line format.

use std::path::Path;

use crate::error::{read_to_string, Result, SpellError};

/// A misspelling together with the word it should correct to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPair {
    pub correct: String,
    pub misspelled: String,
}

impl TestPair {
    pub fn new<S: Into<String>, T: Into<String>>(correct: S, misspelled: T) -> Self {
        TestPair {
            correct: correct.into(),
            misspelled: misspelled.into(),
        }
    }

    /// Parse one line into a pair per misspelling. `line_no` is only used for
    /// error reporting.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Vec<TestPair>> {
        let mut parts = line.split(':');
        let (correct, wrongs) = match (parts.next(), parts.next(), parts.next()) {
            (Some(correct), Some(wrongs), None) => (correct.trim(), wrongs),
            _ => return Err(SpellError::malformed_test_line(line_no, line)),
        };

        Ok(wrongs
            .split_whitespace()
            .map(|wrong| TestPair::new(correct, wrong))
            .collect())
    }
}

/// Parse a whole test set. Blank lines are skipped.
pub fn parse_testset(text: &str) -> Result<Vec<TestPair>> {
    let mut pairs = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        pairs.extend(TestPair::parse_line(line, idx + 1)?);
    }
    Ok(pairs)
}

pub fn load_testset<P: AsRef<Path>>(path: P) -> Result<Vec<TestPair>> {
    parse_testset(&read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let pairs = TestPair::parse_line("the: teh hte", 1).unwrap();
        assert_eq!(
            pairs,
            vec![TestPair::new("the", "teh"), TestPair::new("the", "hte")]
        );
    }

    #[test]
    fn test_parse_line_without_alternatives() {
        assert!(TestPair::parse_line("the:", 1).unwrap().is_empty());
    }

    #[test]
    fn test_missing_colon_is_fatal() {
        match TestPair::parse_line("the teh", 4) {
            Err(SpellError::MalformedTestLine { line, content }) => {
                assert_eq!(line, 4);
                assert_eq!(content, "the teh");
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert!(TestPair::parse_line("a: b: c", 1).is_err());
    }

    #[test]
    fn test_parse_testset() {
        let text = "contented: contenpted contende\n\
                    beginning: begining\n\
                    \n\
                    problem: problam proble\n";
        let pairs = parse_testset(text).unwrap();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[2], TestPair::new("beginning", "begining"));
    }

    #[test]
    fn test_parse_testset_reports_line_number() {
        let err = parse_testset("a: b\nbroken\n").unwrap_err();
        assert!(matches!(err, SpellError::MalformedTestLine { line: 2, .. }));
    }
}
