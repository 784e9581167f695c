//! Benchmarks the Norvig corrector against SymSpell on the bundled test sets.

use std::io::Write;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use log::{info, log_enabled, Level};

use spell_corrector::{
    load_testset, spelltest, Corrector, FrequencyModel, NorvigSpellChecker, SymSpellChecker,
    SymSpellConfig, TestPair, Tokenizer, BIG_TXT, FREQUENCY_DICTIONARY, LEMMAS_TXT, TESTSETS,
};

fn run_testsets(testsets: &[Vec<TestPair>], corrector: &dyn Corrector) {
    let verbose = log_enabled!(Level::Debug);
    for tests in testsets {
        let report = spelltest(tests, corrector, verbose);
        for miss in &report.misses {
            println!("{miss}");
        }
        println!("{report}");
    }
}

fn symspell(model: &FrequencyModel, max_edit_distance: usize) -> SymSpellChecker {
    SymSpellChecker::new(model, SymSpellConfig::with_max_edit_distance(max_edit_distance))
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let testsets = TESTSETS
        .iter()
        .map(|path| load_testset(path).with_context(|| format!("loading test set {path}")))
        .collect::<Result<Vec<_>>>()?;
    info!(
        "loaded {} test pairs",
        testsets.iter().map(Vec::len).sum::<usize>()
    );

    println!("norvig");
    let model = FrequencyModel::from_files(&[BIG_TXT]).context("loading corpus")?;
    run_testsets(&testsets, &NorvigSpellChecker::new(model));

    println!("norvig added data");
    let model =
        FrequencyModel::from_files(&[BIG_TXT, LEMMAS_TXT]).context("loading corpus and lemmas")?;
    run_testsets(&testsets, &NorvigSpellChecker::new(model));

    let corpus = FrequencyModel::from_files_with_tokenizer(Tokenizer::Apostrophe, &[BIG_TXT])
        .context("loading corpus")?;

    println!("symspell");
    run_testsets(&testsets, &symspell(&corpus, 2));

    println!("symspell edits3");
    run_testsets(&testsets, &symspell(&corpus, 3));

    println!("symspell edits3 full data");
    let dictionary = FrequencyModel::load_frequency_list(FREQUENCY_DICTIONARY)
        .context("loading frequency dictionary")?;
    run_testsets(&testsets, &symspell(&dictionary, 3));

    Ok(())
}
