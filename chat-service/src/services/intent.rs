//! Keyword-based intent classification for chat messages.
//!
//! Checks run in a fixed order and the first match wins, so the same message
//! always lands on the same intent.

use crate::utils::text::{normalize_message, remove_phrases, word_count};

pub const DESCRIBE_PHRASES: [&str; 3] = ["describe", "tell me about", "what is"];
pub const RECOMMEND_KEYWORDS: [&str; 2] = ["recommend", "suggest"];
pub const DEFAULT_GENRES: [&str; 6] = [
    "fantasy",
    "science fiction",
    "mystery",
    "romance",
    "thriller",
    "horror",
];

/// Messages with at most this many words are taken as a bare book title.
pub const SHORT_QUERY_WORDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Nothing left after trimming.
    Empty,
    DescribeBook { title: String },
    RecommendGenre { genre: String },
    /// Asked for a recommendation without naming a known genre.
    RecommendPrompt,
    Unrecognized,
}

pub fn default_genres() -> Vec<String> {
    DEFAULT_GENRES.iter().map(|g| g.to_string()).collect()
}

/// Classifies a raw message. `genres` is scanned in order and the first
/// genre contained anywhere in the message is chosen.
pub fn classify(message: &str, genres: &[String]) -> Intent {
    let message = normalize_message(message);

    if message.is_empty() {
        return Intent::Empty;
    }

    if DESCRIBE_PHRASES.iter().any(|p| message.contains(p)) {
        return Intent::DescribeBook {
            title: remove_phrases(&message, &DESCRIBE_PHRASES),
        };
    }

    if RECOMMEND_KEYWORDS.iter().any(|k| message.contains(k)) {
        return match genres.iter().find(|g| message.contains(g.as_str())) {
            Some(genre) => Intent::RecommendGenre {
                genre: genre.clone(),
            },
            None => Intent::RecommendPrompt,
        };
    }

    if word_count(&message) <= SHORT_QUERY_WORDS {
        return Intent::DescribeBook { title: message };
    }

    Intent::Unrecognized
}
