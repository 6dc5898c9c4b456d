//! Ranking use case

use crate::model::ScoredArticle;

/// Number of articles kept after ranking
pub const DEFAULT_TOP_N: usize = 3;

/// Sort by score descending and keep the first `top_n`.
///
/// The sort is stable: articles with equal scores keep their input order.
pub fn rank(mut scored: Vec<ScoredArticle>, top_n: usize) -> Vec<ScoredArticle> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Article;

    fn scored(title: &str, score: f64) -> ScoredArticle {
        ScoredArticle {
            article: Article::new(title, "", "https://example.com"),
            score,
        }
    }

    fn titles(items: &[ScoredArticle]) -> Vec<&str> {
        items.iter().map(|s| s.article.title.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(vec![], DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn test_sorts_descending_and_truncates() {
        let ranked = rank(
            vec![
                scored("a", 10.0),
                scored("b", 50.0),
                scored("c", 30.0),
                scored("d", 70.0),
                scored("e", 0.0),
            ],
            DEFAULT_TOP_N,
        );
        assert_eq!(titles(&ranked), vec!["d", "b", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank(
            vec![
                scored("first", 20.0),
                scored("second", 20.0),
                scored("top", 40.0),
                scored("third", 20.0),
            ],
            DEFAULT_TOP_N,
        );
        assert_eq!(titles(&ranked), vec!["top", "first", "second"]);
    }

    #[test]
    fn test_all_equal_is_identity_prefix() {
        let input: Vec<_> = (0..10).map(|i| scored(&i.to_string(), 0.0)).collect();
        let ranked = rank(input, DEFAULT_TOP_N);
        assert_eq!(titles(&ranked), vec!["0", "1", "2"]);
    }

    #[test]
    fn test_fewer_than_top_n() {
        let ranked = rank(vec![scored("only", 5.0)], DEFAULT_TOP_N);
        assert_eq!(ranked.len(), 1);
    }
}
