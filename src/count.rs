//! Word frequency counting with stopword filtering.

use std::collections::{HashMap, HashSet};

/// An immutable set of lower-case stopwords, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Built-in stopword list for a language code ("en", "de", "fr", ...).
    /// Unknown codes fall back to English.
    pub fn for_language(lang: &str) -> Self {
        use stop_words::LANGUAGE;
        let language = match lang.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };
        let words = stop_words::get(language)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { words }
    }

    /// Custom list; entries are lower-cased on construction.
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// No filtering at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Case-insensitive membership test.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

/// Count occurrences of each token, lower-cased, skipping stopwords.
/// Filtered words never appear as keys.
pub fn count(tokens: &[String], stopwords: &Stopwords) -> HashMap<String, u32> {
    let mut frequencies: HashMap<String, u32> = HashMap::new();
    for token in tokens {
        let word = token.to_lowercase();
        if stopwords.is_stopword(&word) {
            continue;
        }
        *frequencies.entry(word).or_insert(0) += 1;
    }
    frequencies
}
