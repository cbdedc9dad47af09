//! Text to word tokenization: maximal runs of word characters.

/// True for characters that belong inside a word (alphanumeric or underscore).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into words. Runs of word characters become tokens, everything
/// else separates them. Case is preserved; the counter normalizes later.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        assert_eq!(
            tokenize("The quick, brown fox!"),
            vec!["The", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn keeps_underscores_and_digits() {
        assert_eq!(tokenize("foo_bar 42 a1"), vec!["foo_bar", "42", "a1"]);
    }

    #[test]
    fn preserves_case() {
        assert_eq!(tokenize("Hello WORLD"), vec!["Hello", "WORLD"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn punctuation_only_yields_no_tokens() {
        assert!(tokenize("... !?! --- ,,,").is_empty());
    }
}
