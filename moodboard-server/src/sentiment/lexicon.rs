//! AFINN-165 valence lexicon
//!
//! Words are rated from -5 (very negative) to +5 (very positive). The word
//! list ships as `data/afinn-165.tsv` (one `word<TAB>valence` pair per line)
//! and is parsed once on first lookup. Only single lowercase tokens are
//! listed; lookups happen after tokenization, so multi-word phrases from the
//! upstream list are left out.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static AFINN_165: &str = include_str!("../../data/afinn-165.tsv");

/// Tokens that flip the valence of the word directly after them
static NEGATORS: &[&str] = &[
    "cant", "can't", "dont", "don't", "doesnt", "doesn't", "not", "non", "wont", "won't", "isnt",
    "isn't",
];

static LEXICON: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| parse(AFINN_165));

/// Malformed lines are skipped
fn parse(raw: &'static str) -> HashMap<&'static str, i32> {
    raw.lines()
        .filter_map(|line| {
            let (word, value) = line.split_once('\t')?;
            Some((word, value.trim().parse().ok()?))
        })
        .collect()
}

/// Valence of a single lowercase token, if rated
pub fn valence(token: &str) -> Option<i32> {
    LEXICON.get(token).copied()
}

/// Whether the token negates the following rated word
pub fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token)
}
