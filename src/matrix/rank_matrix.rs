//! Multi-expert rank table.

use crate::error::Error;

/// A complete expert-by-alternative table of integer ranks.
///
/// Ranks are stored densely, indexed by `[expert][alternative]`, so every cell
/// exists by construction and iteration order is always the declaration order
/// of the name lists. Lower rank numbers are better.
///
/// Rank values are accepted as given: the table does not require each expert's
/// row to be a permutation of 1..N, so tied or duplicated ranks pass through
/// untouched.
#[derive(Debug, Clone)]
pub struct RankMatrix {
    alternatives: Vec<String>,
    experts: Vec<String>,
    ranks: Vec<Vec<u32>>,
}

impl RankMatrix {
    /// Assemble a rank matrix from declaration-ordered name lists and one rank
    /// row per expert.
    ///
    /// Only the shape is validated: there must be one row per expert and one
    /// value per alternative in each row.
    pub fn new(alternatives: Vec<String>, experts: Vec<String>, ranks: Vec<Vec<u32>>) -> Result<Self, Error> {
        if ranks.len() != experts.len() {
            return Err(Error::IncompleteMatrix {
                subject: "expert rank rows".to_string(),
                expected: experts.len(),
                actual: ranks.len(),
            });
        }

        for (expert, row) in experts.iter().zip(&ranks) {
            if row.len() != alternatives.len() {
                return Err(Error::IncompleteMatrix {
                    subject: format!("expert '{expert}'"),
                    expected: alternatives.len(),
                    actual: row.len(),
                });
            }
        }

        Ok(Self {
            alternatives,
            experts,
            ranks,
        })
    }

    /// Alternative names in declaration order.
    #[must_use]
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Expert names in declaration order.
    #[must_use]
    pub fn experts(&self) -> &[String] {
        &self.experts
    }

    /// The rank expert `expert` assigned to alternative `alternative`, by index.
    #[must_use]
    pub fn rank(&self, expert: usize, alternative: usize) -> u32 {
        self.ranks[expert][alternative]
    }

    #[must_use]
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    #[must_use]
    pub fn expert_count(&self) -> usize {
        self.experts.len()
    }
}
