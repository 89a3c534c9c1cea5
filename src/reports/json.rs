//! Machine-readable report structures.

use crate::criteria::{Criterion, RankedEntry};
use crate::matrix::{RankMatrix, UtilityMatrix};
use crate::pareto::DominanceRelation;
use serde::Serialize;
use std::io::Write;

/// Full output of the group-ranking pipeline.
#[derive(Debug, Serialize)]
pub struct GroupReport {
    pub alternatives: Vec<String>,
    pub experts: Vec<String>,
    /// Rank rows indexed `[expert][alternative]`.
    pub ranks: Vec<Vec<u32>>,
    /// Boolean rows indexed `[dominator][dominated]`.
    pub dominance: Vec<Vec<bool>>,
    pub pareto_set: Vec<String>,
}

impl GroupReport {
    #[must_use]
    pub fn build(matrix: &RankMatrix, relation: &DominanceRelation, pareto_set: Vec<String>) -> Self {
        let ranks = (0..matrix.expert_count())
            .map(|expert| (0..matrix.alternative_count()).map(|alternative| matrix.rank(expert, alternative)).collect())
            .collect();

        let dominance = (0..matrix.alternative_count())
            .map(|a1| (0..matrix.alternative_count()).map(|a2| relation.dominates(a1, a2)).collect())
            .collect();

        Self {
            alternatives: matrix.alternatives().to_vec(),
            experts: matrix.experts().to_vec(),
            ranks,
            dominance,
            pareto_set,
        }
    }

    pub fn write(&self, out: &mut impl Write) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// One criterion's scores and ranking within an [`UncertaintyReport`].
#[derive(Debug, Serialize)]
pub struct CriterionReport {
    pub criterion: Criterion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    pub ranking: Vec<RankedEntry>,
}

/// Full output of the uncertainty pipeline.
#[derive(Debug, Serialize)]
pub struct UncertaintyReport {
    pub alternatives: Vec<String>,
    pub state_count: usize,
    pub max_score: f64,
    /// Utility rows indexed `[alternative][state]`.
    pub utilities: Vec<Vec<f64>>,
    pub criteria: Vec<CriterionReport>,
}

impl UncertaintyReport {
    #[must_use]
    pub fn build(matrix: &UtilityMatrix, criteria: Vec<CriterionReport>) -> Self {
        let utilities = (0..matrix.alternative_count()).map(|alternative| matrix.row(alternative).to_vec()).collect();

        Self {
            alternatives: matrix.alternatives().to_vec(),
            state_count: matrix.state_count(),
            max_score: matrix.max_score(),
            utilities,
            criteria,
        }
    }

    pub fn write(&self, out: &mut impl Write) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
