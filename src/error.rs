//! Error types shared by the matrix builders and the input boundary.

/// Errors surfaced when assembling decision tables or validating scalar inputs.
///
/// The computation pipeline itself never raises these; they belong to the
/// construction and input-collection boundary. Once a matrix exists its shape
/// is complete by construction.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A rank or utility table was supplied with a missing or extra row/cell.
    #[error("incomplete matrix: expected {expected} values for {subject}, got {actual}")]
    IncompleteMatrix {
        subject: String,
        expected: usize,
        actual: usize,
    },

    /// A utility matrix was declared with zero states; the Laplace mean would
    /// divide by the state count.
    #[error("at least one state is required")]
    EmptyStateSet,

    /// The Hurwicz optimism coefficient must lie in [0, 1].
    #[error("optimism coefficient must be between 0 and 1, got {0}")]
    OutOfRangeCoefficient(f64),

    /// The declared scoring bound must be positive.
    #[error("maximum score must be positive, got {0}")]
    NonPositiveMaxScore(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_value() {
        let err = Error::OutOfRangeCoefficient(1.5);
        assert_eq!(err.to_string(), "optimism coefficient must be between 0 and 1, got 1.5");

        let err = Error::NonPositiveMaxScore(0.0);
        assert_eq!(err.to_string(), "maximum score must be positive, got 0");

        let err = Error::IncompleteMatrix {
            subject: "alternative 'A'".to_string(),
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "incomplete matrix: expected 3 values for alternative 'A', got 2");
    }
}
