//! Criterion benchmarks for the spelling correctors.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use spell_corrector::{
    edits1, Corrector, FrequencyModel, NorvigSpellChecker, SymSpellChecker, SymSpellConfig,
};

/// A synthetic corpus with a skewed word distribution.
fn corpus() -> String {
    let words = [
        "spelling", "correction", "algorithm", "frequency", "dictionary", "candidate",
        "distance", "transpose", "insertion", "deletion", "substitution", "probability",
        "the", "of", "and", "benchmark", "word", "corpus", "language", "model",
    ];

    let mut text = String::new();
    for (i, word) in words.iter().enumerate() {
        for _ in 0..(words.len() - i) * 5 {
            text.push_str(word);
            text.push(' ');
        }
    }
    text
}

const MISSPELLINGS: [&str; 8] = [
    "speling", "corection", "algoritm", "frequncy", "dictionry", "langauge", "wrod", "xyzzy",
];

fn bench_edits(c: &mut Criterion) {
    c.bench_function("edits1: 'spelling'", |b| b.iter(|| edits1(black_box("spelling"))));
}

fn bench_correctors(c: &mut Criterion) {
    let model = FrequencyModel::from_text(&corpus());
    let norvig = NorvigSpellChecker::new(model.clone());
    let symspell = SymSpellChecker::new(&model, SymSpellConfig::default());

    let mut group = c.benchmark_group("correct");
    group.throughput(Throughput::Elements(MISSPELLINGS.len() as u64));
    group.bench_function("norvig", |b| {
        b.iter(|| {
            for word in MISSPELLINGS {
                black_box(norvig.correct(black_box(word)));
            }
        })
    });
    group.bench_function("symspell", |b| {
        b.iter(|| {
            for word in MISSPELLINGS {
                black_box(symspell.correct(black_box(word)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_edits, bench_correctors);
criterion_main!(benches);
