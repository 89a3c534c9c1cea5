mod dominance;
mod pareto_set;

pub use dominance::DominanceRelation;
pub use pareto_set::pareto_set;
