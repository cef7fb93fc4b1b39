//! Lexicon-based sentiment analysis
//!
//! `score` is the sum of word valences; `comparative` is `score` divided by
//! the number of tokens (0 for empty input).

mod lexicon;

pub use lexicon::{is_negator, valence};

/// Characters stripped before splitting into tokens
const STRIPPED: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '"',
    '~', '(', ')',
];

/// Result of analyzing one piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub score: i32,
    pub comparative: f64,
    /// Words that contributed positively (after negation)
    pub positive: Vec<String>,
    /// Words that contributed negatively (after negation)
    pub negative: Vec<String>,
}

/// Split text into lowercase tokens
///
/// Apostrophes and hyphens stay inside tokens ("it's", "self-made").
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || STRIPPED.contains(&c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Analyze text against the lexicon
pub fn analyze(text: &str) -> Analysis {
    let tokens = tokenize(text);
    let mut score = 0;
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let Some(mut value) = valence(token) else {
            continue;
        };
        if i > 0 && is_negator(&tokens[i - 1]) {
            value = -value;
        }
        if value > 0 {
            positive.push(token.clone());
        } else {
            negative.push(token.clone());
        }
        score += value;
    }

    let comparative = if tokens.is_empty() {
        0.0
    } else {
        f64::from(score) / tokens.len() as f64
    };

    Analysis {
        score,
        comparative,
        positive,
        negative,
    }
}
