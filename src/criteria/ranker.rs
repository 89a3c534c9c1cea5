//! Ordering of criterion scores into ranked positions.

use crate::criteria::SortDirection;
use serde::Serialize;

/// One row of a ranked result: a 1-based position, the alternative's name,
/// and its criterion score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub position: usize,
    pub alternative: String,
    pub score: f64,
}

/// Stable-sort alternatives by score and assign 1-based positions.
///
/// `names` and `scores` are parallel slices in declaration order, so ties
/// keep the declaration order through the stable sort.
#[must_use]
pub fn rank(names: &[String], scores: &[f64], direction: SortDirection) -> Vec<RankedEntry> {
    debug_assert_eq!(names.len(), scores.len());

    let mut pairs: Vec<(&String, f64)> = names.iter().zip(scores.iter().copied()).collect();
    match direction {
        SortDirection::Ascending => pairs.sort_by(|a, b| a.1.total_cmp(&b.1)),
        SortDirection::Descending => pairs.sort_by(|a, b| b.1.total_cmp(&a.1)),
    }

    pairs
        .into_iter()
        .enumerate()
        .map(|(index, (name, score))| RankedEntry {
            position: index + 1,
            alternative: name.clone(),
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_descending_puts_highest_first() {
        let ranked = rank(&names(&["A", "B", "C"]), &[2.0, 9.0, 5.0], SortDirection::Descending);

        assert_eq!(ranked[0].alternative, "B");
        assert_eq!(ranked[1].alternative, "C");
        assert_eq!(ranked[2].alternative, "A");
    }

    #[test]
    fn test_ascending_puts_lowest_first() {
        let ranked = rank(&names(&["A", "B"]), &[4.0, 1.0], SortDirection::Ascending);

        assert_eq!(ranked[0].alternative, "B");
        assert_eq!(ranked[1].alternative, "A");
    }

    #[test]
    fn test_positions_are_one_based_and_sequential() {
        let ranked = rank(&names(&["A", "B", "C"]), &[3.0, 1.0, 2.0], SortDirection::Ascending);

        let positions: Vec<usize> = ranked.iter().map(|entry| entry.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_scores_are_monotonic_along_positions() {
        let ranked = rank(&names(&["A", "B", "C", "D"]), &[5.0, 2.0, 8.0, 2.0], SortDirection::Descending);

        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_declaration_order() {
        let ranked = rank(&names(&["B", "A", "C"]), &[6.0, 6.0, 6.0], SortDirection::Descending);

        // All scores equal: the stable sort must preserve declaration order.
        let order: Vec<&str> = ranked.iter().map(|entry| entry.alternative.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        assert!(rank(&[], &[], SortDirection::Descending).is_empty());
    }
}
