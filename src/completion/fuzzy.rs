//! Fuzzy matcher tuned for kebab-case command vocabularies
//!
//! A search string scores against a word only when it is a subsequence of
//! that word. The score is the product of a weight per matched character
//! and a completion bonus:
//! - a match right after a `-` weighs `0.95` (word boundary)
//! - any other match weighs `1 - i / len(remaining)`, rewarding early hits
//! - the bonus is the fraction of the word consumed by the last match
//!
//! So `drio` ranks `describe-reserved-instances-offering` well above
//! `create-spot-datafeed-subscription`, and `describe-instance` prefers
//! `describe-instances` to `describe-instance-attribute`.

use std::cmp::Ordering;

/// Weight of a match that lands right after a hyphen.
const BOUNDARY_WEIGHT: f64 = 0.95;

/// Score how well `search` predicts `word`, in `[0, 1]`.
///
/// Returns `0.0` when `search` is longer than `word` or is not a
/// subsequence of it. Never panics.
pub fn score(search: &str, word: &str) -> f64 {
    let search: Vec<char> = search.chars().collect();
    let word: Vec<char> = word.chars().collect();
    if search.len() > word.len() || search.is_empty() {
        return 0.0;
    }

    let mut total = 1.0;
    let mut remaining: &[char] = &word;
    for ch in &search {
        let Some(i) = remaining.iter().position(|c| c == ch) else {
            return 0.0;
        };
        let weight = if i > 0 && remaining[i - 1] == '-' {
            BOUNDARY_WEIGHT
        } else {
            1.0 - i as f64 / remaining.len() as f64
        };
        total *= weight;
        remaining = &remaining[i + 1..];
    }

    let completion = 1.0 - remaining.len() as f64 / word.len() as f64;
    total * completion
}

/// Rank a corpus by descending score, dropping zero-score entries.
///
/// Ties keep their corpus order.
pub fn rank<S: AsRef<str>>(search: &str, corpus: &[S]) -> Vec<String> {
    let mut scored: Vec<(&str, f64)> = corpus
        .iter()
        .map(|word| (word.as_ref(), score(search, word.as_ref())))
        .filter(|(_, s)| *s > 0.0)
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|(word, _)| word.to_string()).collect()
}
