//! Single- and double-edit candidate generation.

use std::collections::HashSet;

/// Letters used for substitutions and insertions.
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

fn splits(word: &str) -> Vec<(&str, &str)> {
    let mut splits: Vec<(&str, &str)> = word
        .char_indices()
        .map(|(i, _)| word.split_at(i))
        .collect();
    splits.push((word, ""));
    splits
}

/// Every string one edit away from `word`, before deduplication.
///
/// Order is deletions, adjacent transpositions, substitutions, insertions. For a
/// word of `n` chars that is `n`, `n - 1`, `26n` and `26(n + 1)` entries.
pub fn edit_variants(word: &str) -> Vec<String> {
    let splits = splits(word);
    let n = splits.len() - 1;
    let mut edits = Vec::with_capacity(n + n.saturating_sub(1) + 26 * n + 26 * (n + 1));

    // Deletes
    for (l, r) in &splits {
        let mut chars = r.chars();
        if chars.next().is_some() {
            edits.push(format!("{}{}", l, chars.as_str()));
        }
    }

    // Transposes
    for (l, r) in &splits {
        let mut chars = r.chars();
        if let (Some(a), Some(b)) = (chars.next(), chars.next()) {
            edits.push(format!("{}{}{}{}", l, b, a, chars.as_str()));
        }
    }

    // Replaces
    for (l, r) in &splits {
        let mut chars = r.chars();
        if chars.next().is_some() {
            let rest = chars.as_str();
            for c in LETTERS.chars() {
                edits.push(format!("{}{}{}", l, c, rest));
            }
        }
    }

    // Inserts
    for (l, r) in &splits {
        for c in LETTERS.chars() {
            edits.push(format!("{}{}{}", l, c, r));
        }
    }

    edits
}

/// All strings exactly one edit away from `word`.
pub fn edits1(word: &str) -> HashSet<String> {
    edit_variants(word).into_iter().collect()
}

/// Every string reachable by two successive single edits, before
/// deduplication of the second step.
pub fn edit2_variants(word: &str) -> impl Iterator<Item = String> {
    edits1(word)
        .into_iter()
        .flat_map(|e1| edit_variants(&e1))
}

/// All strings reachable by two successive single edits.
pub fn edits2(word: &str) -> HashSet<String> {
    edit2_variants(word).collect()
}
