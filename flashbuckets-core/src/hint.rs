//! Partial reveal of a card's answer.

use crate::Card;
use serde::{Deserialize, Serialize};

/// Answers up to this many characters are shown whole.
pub const HINT_MAX_CHARS: usize = 10;
/// Answers up to this many words are shown whole under the word policy.
pub const HINT_MAX_WORDS: usize = 2;
pub const HINT_ELLIPSIS: &str = "...";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "policy")]
pub enum HintPolicy {
    /// Keep the first `max_chars` characters.
    Chars { max_chars: usize },
    /// Keep the first `max_words` whitespace-separated words.
    Words { max_words: usize },
}

impl Default for HintPolicy {
    fn default() -> Self {
        HintPolicy::Chars {
            max_chars: HINT_MAX_CHARS,
        }
    }
}

impl HintPolicy {
    pub fn words() -> Self {
        HintPolicy::Words {
            max_words: HINT_MAX_WORDS,
        }
    }

    pub fn hint(&self, card: &Card) -> String {
        let answer = card.answer.as_str();
        match *self {
            HintPolicy::Chars { max_chars } => {
                if answer.chars().count() <= max_chars {
                    return answer.to_string();
                }
                let head: String = answer.chars().take(max_chars).collect();
                head + HINT_ELLIPSIS
            }
            HintPolicy::Words { max_words } => {
                let words: Vec<&str> = answer.split_whitespace().collect();
                if words.len() <= max_words {
                    return answer.to_string();
                }
                words[..max_words].join(" ") + HINT_ELLIPSIS
            }
        }
    }
}

/// Hint under the default character policy.
pub fn get_hint(card: &Card) -> String {
    HintPolicy::default().hint(card)
}
