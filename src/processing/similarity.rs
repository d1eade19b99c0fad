//! Normalized string similarity used for fuzzy classification and cross-document matching

use strsim::{jaro, normalized_damerau_levenshtein};

/// Similarity strictly above this value counts as a fuzzy match
pub const FUZZY_THRESHOLD: f64 = 0.85;

/// Similarity in `[0, 1]`: the mean of Jaro similarity and normalized
/// Damerau-Levenshtein similarity.
///
/// Adjacent transpositions stay cheap (`pyhton` against `python`), and every extra
/// edit lowers the score wherever it sits in the word. Arguments are put in a
/// canonical order first. Identical strings score 1.0; an empty string against a
/// non-empty one scores 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let score = (jaro(first, second) + normalized_damerau_levenshtein(first, second)) / 2.0;
    score.clamp(0.0, 1.0)
}

/// Whether two terms are close enough to be treated as the same skill
pub fn is_fuzzy_match(a: &str, b: &str) -> bool {
    similarity(a, b) > FUZZY_THRESHOLD
}
