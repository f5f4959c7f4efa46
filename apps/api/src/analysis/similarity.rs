//! Lexical similarity primitives — text cleanup, sentence splitting, and
//! token-frequency cosine similarity.
//!
//! Deterministic stand-in for semantic embeddings: good enough to rank which
//! resume sentence best covers a given job requirement.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static NON_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[^\w\s.,;:!?()'"-]"#).unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strips characters outside word/space/basic punctuation and collapses
/// whitespace runs. Applied to resume text before analysis.
pub fn clean_text(text: &str) -> String {
    let stripped = NON_TEXT.replace_all(text, " ");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Splits text into trimmed, non-empty sentences on `.`, `!` and `?`.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn term_frequencies(sentence: &str) -> HashMap<String, f64> {
    let mut freqs = HashMap::new();
    for word in sentence.split_whitespace() {
        let token: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        if !token.is_empty() {
            *freqs.entry(token).or_insert(0.0) += 1.0;
        }
    }
    freqs
}

/// Cosine similarity between the term-frequency vectors of two sentences.
/// Returns 0.0 when either side has no tokens.
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    let fa = term_frequencies(a);
    let fb = term_frequencies(b);
    if fa.is_empty() || fb.is_empty() {
        return 0.0;
    }

    let dot: f64 = fa
        .iter()
        .filter_map(|(token, weight)| fb.get(token).map(|other| weight * other))
        .sum();
    let norm_a: f64 = fa.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = fb.values().map(|w| w * w).sum::<f64>().sqrt();

    dot / (norm_a * norm_b)
}
