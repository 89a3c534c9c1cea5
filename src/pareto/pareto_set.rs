//! Pareto set extraction.

use crate::matrix::RankMatrix;
use crate::pareto::DominanceRelation;

/// The alternatives no other alternative dominates.
///
/// The result is sorted lexicographically rather than in declaration order;
/// the set is a presentation artifact and the alphabetical order is part of
/// the tool's output contract.
#[must_use]
pub fn pareto_set(matrix: &RankMatrix, relation: &DominanceRelation) -> Vec<String> {
    let mut out: Vec<String> = matrix
        .alternatives()
        .iter()
        .enumerate()
        .filter(|(index, _)| !relation.is_dominated(*index))
        .map(|(_, name)| name.clone())
        .collect();

    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(alternatives: &[&str], experts: &[&str], ranks: Vec<Vec<u32>>) -> RankMatrix {
        RankMatrix::new(
            alternatives.iter().map(ToString::to_string).collect(),
            experts.iter().map(ToString::to_string).collect(),
            ranks,
        )
        .unwrap()
    }

    #[test]
    fn test_reference_scenario_yields_single_winner() {
        let m = matrix(&["A", "B", "C"], &["E1", "E2"], vec![vec![1, 2, 3], vec![1, 3, 2]]);
        let relation = DominanceRelation::analyze(&m);

        assert_eq!(pareto_set(&m, &relation), vec!["A".to_string()]);
    }

    #[test]
    fn test_incomparable_alternatives_all_survive() {
        // Each alternative wins for one expert, so nothing dominates anything.
        let m = matrix(&["B", "A"], &["E1", "E2"], vec![vec![1, 2], vec![2, 1]]);
        let relation = DominanceRelation::analyze(&m);

        // Output order is alphabetical, not declaration order.
        assert_eq!(pareto_set(&m, &relation), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_set_is_never_empty() {
        let m = matrix(&["A"], &["E1"], vec![vec![1]]);
        let relation = DominanceRelation::analyze(&m);

        assert_eq!(pareto_set(&m, &relation), vec!["A".to_string()]);
    }
}
