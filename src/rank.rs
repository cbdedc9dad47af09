//! Ranking: the n most frequent words, ascending by count.

use std::collections::HashMap;

/// Default rank depth for the word cloud.
pub const TOP_WORDS: usize = 100;

/// Return the `n` highest-count words as (word, count) pairs sorted ascending
/// by count. Ties are broken lexicographically by word so output is
/// reproducible. Fewer than `n` distinct words returns all of them; `n = 0`
/// returns nothing.
pub fn top_n(frequencies: &HashMap<String, u32>, n: usize) -> Vec<(String, u32)> {
    let mut entries: Vec<(String, u32)> = frequencies
        .iter()
        .map(|(word, &count)| (word.clone(), count))
        .collect();
    entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    let skip = entries.len().saturating_sub(n);
    entries.split_off(skip)
}

#[cfg(test)]
mod tests {
    use super::top_n;
    use std::collections::HashMap;

    fn freq(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn returns_highest_counts_in_ascending_order() {
        let f = freq(&[("a", 5), ("b", 1), ("c", 3), ("d", 7)]);
        let top = top_n(&f, 3);
        assert_eq!(
            top,
            vec![
                ("c".to_string(), 3),
                ("a".to_string(), 5),
                ("d".to_string(), 7)
            ]
        );
    }

    #[test]
    fn returns_everything_when_n_exceeds_distinct_words() {
        let f = freq(&[("a", 2), ("b", 1)]);
        let top = top_n(&f, 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].1, 1);
        assert_eq!(top[1].1, 2);
    }

    #[test]
    fn zero_returns_empty() {
        let f = freq(&[("a", 2)]);
        assert!(top_n(&f, 0).is_empty());
    }

    #[test]
    fn ties_break_lexicographically() {
        let f = freq(&[("zebra", 2), ("apple", 2), ("mango", 2)]);
        let top = top_n(&f, 3);
        assert_eq!(
            top,
            vec![
                ("apple".to_string(), 2),
                ("mango".to_string(), 2),
                ("zebra".to_string(), 2)
            ]
        );
    }

    #[test]
    fn empty_map_returns_empty() {
        assert!(top_n(&HashMap::new(), 5).is_empty());
    }
}
