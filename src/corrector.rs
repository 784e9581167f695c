//! The contract shared by every spelling corrector in the crate.

/// A spelling corrector queried many times against a fixed dictionary.
pub trait Corrector {
    /// The most probable correction for `word`. Never fails; when nothing better
    /// is found the input comes back unchanged.
    fn correct(&self, word: &str) -> String;

    /// Occurrence count of `word` in the corrector's dictionary, zero if absent.
    fn frequency(&self, word: &str) -> usize;

    /// Whether `word` is in the corrector's dictionary.
    fn is_known(&self, word: &str) -> bool {
        self.frequency(word) > 0
    }
}
