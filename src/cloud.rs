//! Bucketing ranked words into display-size categories 1 to 10.

use std::collections::HashMap;

use crate::error::CloudError;

/// Map each ranked word's count to a category in [1, 10], scaled against the
/// maximum count. `ranked` must be ascending by count, so the maximum is the
/// last entry; that word always lands in category 10.
pub fn bucketize(ranked: &[(String, u32)]) -> Result<HashMap<String, u32>, CloudError> {
    let max = match ranked.last() {
        Some((_, count)) => *count,
        None => return Err(CloudError::EmptyRanking),
    };

    let mut cloud = HashMap::with_capacity(ranked.len());
    for (word, count) in ranked {
        // ceil(10 * count / max); count <= max keeps this within [1, 10]
        let category = (10 * count).div_ceil(max);
        cloud.insert(word.clone(), category);
    }
    Ok(cloud)
}

#[cfg(test)]
mod tests {
    use super::bucketize;
    use crate::error::CloudError;

    fn ranked(pairs: &[(&str, u32)]) -> Vec<(String, u32)> {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn maximum_word_gets_category_ten() {
        let cloud = bucketize(&ranked(&[("low", 1), ("high", 9)])).unwrap();
        assert_eq!(cloud.get("high"), Some(&10));
    }

    #[test]
    fn categories_stay_in_range() {
        let input = ranked(&[("a", 1), ("b", 2), ("c", 50), ("d", 99), ("e", 100)]);
        let cloud = bucketize(&input).unwrap();
        for (word, _) in &input {
            let category = cloud[word];
            assert!((1..=10).contains(&category), "{word} got {category}");
        }
        assert_eq!(cloud["a"], 1);
        assert_eq!(cloud["e"], 10);
    }

    #[test]
    fn ceiling_division_rounds_up() {
        // 10 * 1 / 2 = 5 exactly; 10 * 1 / 3 rounds 3.33 up to 4
        let cloud = bucketize(&ranked(&[("half", 1), ("top", 2)])).unwrap();
        assert_eq!(cloud["half"], 5);
        let cloud = bucketize(&ranked(&[("third", 1), ("top", 3)])).unwrap();
        assert_eq!(cloud["third"], 4);
    }

    #[test]
    fn single_word_maps_to_ten() {
        let cloud = bucketize(&ranked(&[("only", 42)])).unwrap();
        assert_eq!(cloud["only"], 10);
        assert_eq!(cloud.len(), 1);
    }

    #[test]
    fn empty_ranking_is_an_error() {
        assert!(matches!(bucketize(&[]), Err(CloudError::EmptyRanking)));
    }
}
