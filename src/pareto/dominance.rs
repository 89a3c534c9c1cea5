//! Pairwise dominance analysis over a rank matrix.

use crate::matrix::RankMatrix;

/// The pairwise dominance relation between alternatives.
///
/// Stored as a flat N×N boolean table indexed by alternative declaration
/// order. `dominates(a, b)` is true iff every expert ranks `a` at least as
/// well as `b` (numerically lower or equal) and at least one expert ranks `a`
/// strictly better. The diagonal is always false.
#[derive(Debug, Clone)]
pub struct DominanceRelation {
    count: usize,
    dominates: Vec<bool>,
}

impl DominanceRelation {
    /// Build the dominance relation for a complete rank matrix.
    ///
    /// Pure with respect to its input; O(alternatives² × experts).
    #[must_use]
    pub fn analyze(matrix: &RankMatrix) -> Self {
        let count = matrix.alternative_count();
        let mut dominates = vec![false; count * count];

        for a1 in 0..count {
            for a2 in 0..count {
                if a1 == a2 {
                    continue;
                }

                let mut better = false;
                let mut not_worse = true;

                for expert in 0..matrix.expert_count() {
                    let r1 = matrix.rank(expert, a1);
                    let r2 = matrix.rank(expert, a2);

                    if r1 > r2 {
                        not_worse = false;
                        break;
                    }

                    if r1 < r2 {
                        better = true;
                    }
                }

                dominates[a1 * count + a2] = not_worse && better;
            }
        }

        Self { count, dominates }
    }

    /// Whether alternative `a1` dominates alternative `a2`, by index.
    #[must_use]
    pub fn dominates(&self, a1: usize, a2: usize) -> bool {
        self.dominates[a1 * self.count + a2]
    }

    /// Whether any alternative dominates `alternative`.
    #[must_use]
    pub fn is_dominated(&self, alternative: usize) -> bool {
        (0..self.count).any(|other| self.dominates(other, alternative))
    }

    #[must_use]
    pub const fn alternative_count(&self) -> usize {
        self.count
    }
}
