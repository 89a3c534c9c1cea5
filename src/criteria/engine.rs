//! Scoring logic for the five uncertainty criteria.

use crate::criteria::Criterion;
use crate::matrix::UtilityMatrix;

/// One score per alternative for a single criterion.
///
/// Scores are parallel to the utility matrix's alternative list, so iteration
/// order is always the declaration order. That makes downstream tie-breaking
/// deterministic.
#[derive(Debug, Clone)]
pub struct CriterionScores {
    pub criterion: Criterion,
    pub scores: Vec<f64>,
}

/// Computes criterion scores from a utility matrix.
///
/// All five criteria are pure functions of the matrix; Hurwicz additionally
/// takes the optimism coefficient. The coefficient is assumed to already be
/// in [0, 1]; the input boundary rejects anything else before it gets here.
#[derive(Debug, Clone, Copy)]
pub struct CriteriaEngine<'a> {
    matrix: &'a UtilityMatrix,
}

impl<'a> CriteriaEngine<'a> {
    #[must_use]
    pub const fn new(matrix: &'a UtilityMatrix) -> Self {
        Self { matrix }
    }

    /// Compute scores for one criterion. `alpha` is only consulted by Hurwicz.
    #[must_use]
    pub fn evaluate(&self, criterion: Criterion, alpha: f64) -> CriterionScores {
        let scores = match criterion {
            Criterion::Savage => self.savage(),
            Criterion::Laplace => self.laplace(),
            Criterion::Wald => self.wald(),
            Criterion::MaxiMax => self.maximax(),
            Criterion::Hurwicz => self.hurwicz(alpha),
        };

        log::debug!("computed {criterion} scores: {scores:?}");

        CriterionScores { criterion, scores }
    }

    /// Savage minimax regret: for each state take the best utility any
    /// alternative achieves, charge each alternative the shortfall, and score
    /// by its worst shortfall. Lower is better.
    ///
    /// The per-state maxima start from 0.0, matching the reference behavior;
    /// utilities are positive by the input contract so the seed never wins.
    #[must_use]
    pub fn savage(&self) -> Vec<f64> {
        let mut state_maxima = vec![0.0_f64; self.matrix.state_count()];
        for (state, maximum) in state_maxima.iter_mut().enumerate() {
            for alternative in 0..self.matrix.alternative_count() {
                let value = self.matrix.utility(alternative, state);
                if value > *maximum {
                    *maximum = value;
                }
            }
        }

        (0..self.matrix.alternative_count())
            .map(|alternative| {
                let mut max_regret = 0.0_f64;
                for (state, maximum) in state_maxima.iter().enumerate() {
                    let regret = maximum - self.matrix.utility(alternative, state);
                    if regret > max_regret {
                        max_regret = regret;
                    }
                }
                max_regret
            })
            .collect()
    }

    /// Laplace: the mean utility over all states, treating every state as
    /// equally likely. Higher is better.
    #[must_use]
    pub fn laplace(&self) -> Vec<f64> {
        #[expect(clippy::cast_precision_loss, reason = "state counts are human-entered and tiny")]
        let states = self.matrix.state_count() as f64;

        (0..self.matrix.alternative_count())
            .map(|alternative| self.matrix.row(alternative).iter().sum::<f64>() / states)
            .collect()
    }

    /// Wald maximin: the worst-case utility. Higher is better.
    #[must_use]
    pub fn wald(&self) -> Vec<f64> {
        (0..self.matrix.alternative_count())
            .map(|alternative| {
                self.matrix
                    .row(alternative)
                    .iter()
                    .copied()
                    .fold(f64::INFINITY, f64::min)
            })
            .collect()
    }

    /// MaxiMax: the best-case utility. Higher is better.
    #[must_use]
    pub fn maximax(&self) -> Vec<f64> {
        (0..self.matrix.alternative_count())
            .map(|alternative| {
                self.matrix
                    .row(alternative)
                    .iter()
                    .copied()
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect()
    }

    /// Hurwicz: `alpha`-weighted blend of the best and worst cases.
    /// Higher is better.
    #[must_use]
    pub fn hurwicz(&self, alpha: f64) -> Vec<f64> {
        self.maximax()
            .into_iter()
            .zip(self.wald())
            .map(|(best, worst)| alpha * best + (1.0 - alpha) * worst)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(alternatives: &[&str], max_score: f64, utilities: Vec<Vec<f64>>) -> UtilityMatrix {
        let state_count = utilities[0].len();
        UtilityMatrix::new(
            alternatives.iter().map(ToString::to_string).collect(),
            state_count,
            max_score,
            utilities,
        )
        .unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        // A=[10,2], B=[6,6] on a 10-point scale.
        let m = matrix(&["A", "B"], 10.0, vec![vec![10.0, 2.0], vec![6.0, 6.0]]);
        let engine = CriteriaEngine::new(&m);

        assert_eq!(engine.savage(), vec![4.0, 4.0]);
        assert_eq!(engine.laplace(), vec![6.0, 6.0]);
        assert_eq!(engine.wald(), vec![2.0, 6.0]);
        assert_eq!(engine.maximax(), vec![10.0, 6.0]);
        assert_eq!(engine.hurwicz(0.5), vec![6.0, 6.0]);
    }

    #[test]
    fn test_savage_is_non_negative_and_zero_for_statewise_maximizer() {
        // A achieves the per-state maximum in every state.
        let m = matrix(&["A", "B"], 10.0, vec![vec![9.0, 8.0], vec![3.0, 8.0]]);
        let engine = CriteriaEngine::new(&m);

        let savage = engine.savage();
        assert!(savage.iter().all(|&s| s >= 0.0));
        assert_eq!(savage[0], 0.0);
        assert_eq!(savage[1], 6.0);
    }

    #[test]
    fn test_laplace_of_constant_row_is_that_constant() {
        let m = matrix(&["A"], 10.0, vec![vec![7.0, 7.0, 7.0]]);
        let engine = CriteriaEngine::new(&m);

        assert_eq!(engine.laplace(), vec![7.0]);
    }

    #[test]
    fn test_wald_never_exceeds_maximax() {
        let m = matrix(&["A", "B", "C"], 10.0, vec![vec![1.0, 9.0], vec![5.0, 5.0], vec![2.0, 8.0]]);
        let engine = CriteriaEngine::new(&m);

        for (worst, best) in engine.wald().into_iter().zip(engine.maximax()) {
            assert!(worst <= best);
        }
    }

    #[test]
    fn test_hurwicz_endpoints_match_wald_and_maximax() {
        let m = matrix(&["A", "B"], 10.0, vec![vec![1.0, 9.0], vec![4.0, 6.0]]);
        let engine = CriteriaEngine::new(&m);

        assert_eq!(engine.hurwicz(0.0), engine.wald());
        assert_eq!(engine.hurwicz(1.0), engine.maximax());
    }

    #[test]
    fn test_single_state_matrix() {
        let m = matrix(&["A", "B"], 10.0, vec![vec![3.0], vec![8.0]]);
        let engine = CriteriaEngine::new(&m);

        assert_eq!(engine.laplace(), vec![3.0, 8.0]);
        assert_eq!(engine.savage(), vec![5.0, 0.0]);
        assert_eq!(engine.wald(), engine.maximax());
    }

    #[test]
    fn test_evaluate_dispatches_by_criterion() {
        let m = matrix(&["A", "B"], 10.0, vec![vec![10.0, 2.0], vec![6.0, 6.0]]);
        let engine = CriteriaEngine::new(&m);

        let scores = engine.evaluate(Criterion::Wald, 0.5);
        assert_eq!(scores.criterion, Criterion::Wald);
        assert_eq!(scores.scores, vec![2.0, 6.0]);
    }
}
