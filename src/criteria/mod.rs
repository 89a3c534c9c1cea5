mod criterion;
mod engine;
mod ranker;

pub use criterion::{Criterion, SortDirection};
pub use engine::{CriteriaEngine, CriterionScores};
pub use ranker::{RankedEntry, rank};
