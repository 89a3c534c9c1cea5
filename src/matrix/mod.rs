mod rank_matrix;
mod utility_matrix;

pub use rank_matrix::RankMatrix;
pub use utility_matrix::UtilityMatrix;
