//! Alternative-by-state utility table.

use crate::error::Error;

/// A complete alternative-by-state table of utility values.
///
/// Values are stored densely, indexed by `[alternative][state]`. The declared
/// `max_score` is the upper bound of the scoring scale the values were
/// collected against; it is carried for display purposes and is not
/// re-checked against individual cells here (the input boundary enforces the
/// [1, `max_score`] range while collecting).
#[derive(Debug, Clone)]
pub struct UtilityMatrix {
    alternatives: Vec<String>,
    state_count: usize,
    max_score: f64,
    utilities: Vec<Vec<f64>>,
}

impl UtilityMatrix {
    /// Assemble a utility matrix from a declaration-ordered alternative list
    /// and one utility row per alternative.
    ///
    /// Requires at least one state (the Laplace mean divides by the state
    /// count), a positive `max_score`, and exactly `state_count` values per
    /// alternative.
    pub fn new(alternatives: Vec<String>, state_count: usize, max_score: f64, utilities: Vec<Vec<f64>>) -> Result<Self, Error> {
        if state_count == 0 {
            return Err(Error::EmptyStateSet);
        }

        if max_score <= 0.0 {
            return Err(Error::NonPositiveMaxScore(max_score));
        }

        if utilities.len() != alternatives.len() {
            return Err(Error::IncompleteMatrix {
                subject: "alternative utility rows".to_string(),
                expected: alternatives.len(),
                actual: utilities.len(),
            });
        }

        for (alternative, row) in alternatives.iter().zip(&utilities) {
            if row.len() != state_count {
                return Err(Error::IncompleteMatrix {
                    subject: format!("alternative '{alternative}'"),
                    expected: state_count,
                    actual: row.len(),
                });
            }
        }

        Ok(Self {
            alternatives,
            state_count,
            max_score,
            utilities,
        })
    }

    /// Alternative names in declaration order.
    #[must_use]
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    #[must_use]
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    #[must_use]
    pub const fn state_count(&self) -> usize {
        self.state_count
    }

    #[must_use]
    pub const fn max_score(&self) -> f64 {
        self.max_score
    }

    /// The utility of alternative `alternative` under state `state`, by index.
    #[must_use]
    pub fn utility(&self, alternative: usize, state: usize) -> f64 {
        self.utilities[alternative][state]
    }

    /// All utilities of one alternative, in state order.
    #[must_use]
    pub fn row(&self, alternative: usize) -> &[f64] {
        &self.utilities[alternative]
    }
}
