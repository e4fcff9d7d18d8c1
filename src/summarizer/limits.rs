//! Summary length limits
//!
//! Two independent selections over the ranked sentences:
//!
//! - **line-limited**: the first `max_lines` sentences of the MMR order
//! - **character-limited**: the score-maximizing subset of the LexRank order
//!   whose combined length fits a character budget (exact 0/1 knapsack)
//!
//! Both return sentences ascending by id, i.e. in document order.

use crate::types::{RankedSentence, Summary};

/// Take the first `max_lines` sentences of the MMR order.
///
/// `None` (or a limit of at least the sentence count) keeps everything.
pub fn select_by_lines(reranked: &[RankedSentence], max_lines: Option<usize>) -> Summary {
    let take = max_lines.map_or(reranked.len(), |m| m.min(reranked.len()));
    let mut summary: Summary = reranked[..take].to_vec();
    summary.sort_by_key(|s| s.id);
    summary
}

/// Pick the subset of `ranked` with the highest total score whose combined
/// character count is at most `budget`.
///
/// Lengths are counted in Unicode scalar values. When the budget covers the
/// whole document (`budget >= document_chars`) the optimization is skipped
/// and every sentence is returned. A budget of 0 selects nothing.
pub fn select_by_characters(
    ranked: &[RankedSentence],
    budget: usize,
    document_chars: usize,
) -> Summary {
    if budget >= document_chars {
        let mut all = ranked.to_vec();
        all.sort_by_key(|s| s.id);
        return all;
    }

    let values: Vec<f64> = ranked.iter().map(|s| s.score).collect();
    let weights: Vec<usize> = ranked.iter().map(RankedSentence::char_len).collect();

    let mut summary: Summary = knapsack(&values, &weights, budget)
        .into_iter()
        .map(|i| ranked[i].clone())
        .collect();
    summary.sort_by_key(|s| s.id);
    summary
}

/// Exact 0/1 knapsack by dynamic programming.
///
/// Returns the indices of the chosen items in ascending order. On equal
/// value, leaving an item out is preferred.
pub fn knapsack(values: &[f64], weights: &[usize], capacity: usize) -> Vec<usize> {
    let n = values.len().min(weights.len());
    let width = capacity + 1;

    // dp over the previous item prefix; take[i * width + w] records whether
    // item i-1 is in the best subset of the first i items within budget w.
    let mut prev = vec![0.0f64; width];
    let mut curr = vec![0.0f64; width];
    let mut take = vec![false; (n + 1) * width];

    for i in 1..=n {
        let weight = weights[i - 1];
        let value = values[i - 1];
        for w in 0..width {
            curr[w] = prev[w];
            if weight <= w {
                let with_item = prev[w - weight] + value;
                if with_item > prev[w] {
                    curr[w] = with_item;
                    take[i * width + w] = true;
                }
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let mut chosen = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        if take[i * width + w] {
            chosen.push(i - 1);
            w -= weights[i - 1];
        }
    }
    chosen.reverse();
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked() -> Vec<RankedSentence> {
        // descending score order, as the ranker produces it
        vec![
            RankedSentence::new(2, "cccccccccc", 0.5), // 10 chars
            RankedSentence::new(0, "aaaaa", 0.3),      // 5 chars
            RankedSentence::new(1, "bbbbbb", 0.25),    // 6 chars
        ]
    }

    fn ids(summary: &[RankedSentence]) -> Vec<usize> {
        summary.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_lines_truncate_then_restore_order() {
        let summary = select_by_lines(&ranked(), Some(2));
        assert_eq!(ids(&summary), vec![0, 2]);
    }

    #[test]
    fn test_lines_unlimited() {
        assert_eq!(ids(&select_by_lines(&ranked(), None)), vec![0, 1, 2]);
        assert_eq!(ids(&select_by_lines(&ranked(), Some(10))), vec![0, 1, 2]);
    }

    #[test]
    fn test_lines_on_empty_input() {
        assert!(select_by_lines(&[], Some(3)).is_empty());
    }

    #[test]
    fn test_characters_prefers_two_small_over_one_large() {
        // 5 + 6 = 11 chars for 0.55 beats 10 chars for 0.5
        let summary = select_by_characters(&ranked(), 11, 100);
        assert_eq!(ids(&summary), vec![0, 1]);
    }

    #[test]
    fn test_characters_exact_fit_is_allowed() {
        let summary = select_by_characters(&ranked(), 10, 100);
        assert_eq!(ids(&summary), vec![2]);
    }

    #[test]
    fn test_characters_budget_below_shortest_is_empty() {
        assert!(select_by_characters(&ranked(), 4, 100).is_empty());
    }

    #[test]
    fn test_characters_zero_budget_is_empty() {
        assert!(select_by_characters(&ranked(), 0, 100).is_empty());
    }

    #[test]
    fn test_characters_budget_covering_document_returns_all() {
        let summary = select_by_characters(&ranked(), 30, 30);
        assert_eq!(ids(&summary), vec![0, 1, 2]);
    }

    #[test]
    fn test_characters_count_scalars_not_bytes() {
        let ranked = vec![
            RankedSentence::new(0, "猫が鳴く", 0.6), // 4 chars, 12 bytes
            RankedSentence::new(1, "犬", 0.4),
        ];
        let summary = select_by_characters(&ranked, 5, 100);
        assert_eq!(ids(&summary), vec![0, 1]);
    }

    #[test]
    fn test_knapsack_classic() {
        let values = [60.0, 100.0, 120.0];
        let weights = [10, 20, 30];
        assert_eq!(knapsack(&values, &weights, 50), vec![1, 2]);
    }

    #[test]
    fn test_knapsack_zero_weight_items_always_fit() {
        assert_eq!(knapsack(&[0.1, 0.2], &[0, 3], 0), vec![0]);
    }

    #[test]
    fn test_knapsack_empty() {
        assert!(knapsack(&[], &[], 10).is_empty());
    }
}
