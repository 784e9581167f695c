//! Frequency-based spelling correction and a harness to benchmark it.
//!
//! [`NorvigSpellChecker`] corrects a word by looking for the most frequent known
//! word within two edits. [`SymSpellChecker`] answers the same question with a
//! symmetric-delete index and is used as the point of comparison. Both implement
//! [`Corrector`], which is all [`spelltest`] needs.

use const_format::formatcp;

pub mod corrector;
pub mod edits;
pub mod error;
pub mod frequency;
pub mod norvig;
pub mod spelltest;
pub mod symspell;
pub mod testset;

pub use corrector::Corrector;
pub use edits::{edit2_variants, edit_variants, edits1, edits2};
pub use error::{Result, SpellError};
pub use frequency::{words, FrequencyModel, Tokenizer};
pub use norvig::{Candidates, NorvigSpellChecker, Tier};
pub use spelltest::{spelltest, Miss, SpellTestReport};
pub use symspell::{osa_distance, Suggestion, SymSpellChecker, SymSpellConfig, Verbosity};
pub use testset::{load_testset, parse_testset, TestPair};

#[cfg(feature = "onedir")]
const DATA_DIR: &str = ".";
#[cfg(not(feature = "onedir"))]
const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

macro_rules! data_file {
    ($filename:expr) => {
        formatcp!("{}/{}", DATA_DIR, $filename)
    };
}

/// Reference corpus the dictionary is counted from.
pub const BIG_TXT: &str = data_file!("big.txt");
/// Extra word list appended to the corpus for the "added data" runs.
pub const LEMMAS_TXT: &str = data_file!("lemmas.txt");
pub const SPELL_TESTSET1: &str = data_file!("spell-testset1.txt");
pub const SPELL_TESTSET2: &str = data_file!("spell-testset2.txt");
/// Ready-made `term count` dictionary for the full-data SymSpell run.
pub const FREQUENCY_DICTIONARY: &str = data_file!("frequency_dictionary_en_82_765.txt");

/// Both test sets, in the order they are reported.
pub const TESTSETS: [&str; 2] = [SPELL_TESTSET1, SPELL_TESTSET2];
