//! Fixed-width console tables.

use crate::criteria::{Criterion, RankedEntry};
use crate::matrix::{RankMatrix, UtilityMatrix};
use crate::pareto::DominanceRelation;
use owo_colors::{OwoColorize, Style};
use std::io::{Result as IoResult, Write};

const NAME_WIDTH: usize = 20;
const VALUE_WIDTH: usize = 15;
const CELL_WIDTH: usize = 8;
const POSITION_WIDTH: usize = 5;

/// Renders pipeline results as fixed-width tables.
#[derive(Debug)]
pub struct ConsoleReport<'a, W> {
    out: &'a mut W,
    color: bool,
}

impl<'a, W: Write> ConsoleReport<'a, W> {
    #[must_use]
    pub fn new(out: &'a mut W, color: bool) -> Self {
        Self { out, color }
    }

    fn heading_style(&self) -> Style {
        if self.color {
            Style::new().bold().cyan()
        } else {
            Style::new()
        }
    }

    fn highlight_style(&self) -> Style {
        if self.color {
            Style::new().bold().green()
        } else {
            Style::new()
        }
    }

    /// The collected expert-by-alternative rank table: one row per
    /// alternative, one column per expert.
    pub fn rank_table(&mut self, matrix: &RankMatrix) -> IoResult<()> {
        let heading = self.heading_style();
        writeln!(self.out, "\n{}", "Rank table (rows: alternatives, columns: experts)".style(heading))?;

        write!(self.out, "{:<NAME_WIDTH$}", "Alternative")?;
        for expert in matrix.experts() {
            write!(self.out, "{expert:<CELL_WIDTH$}")?;
        }
        writeln!(self.out)?;

        for (index, alternative) in matrix.alternatives().iter().enumerate() {
            write!(self.out, "{alternative:<NAME_WIDTH$}")?;
            for expert in 0..matrix.expert_count() {
                write!(self.out, "{:<CELL_WIDTH$}", matrix.rank(expert, index))?;
            }
            writeln!(self.out)?;
        }

        Ok(())
    }

    /// The dominance matrix: `1` where the row dominates the column, `0`
    /// where it does not, `-` on the diagonal.
    pub fn dominance_matrix(&mut self, matrix: &RankMatrix, relation: &DominanceRelation) -> IoResult<()> {
        let heading = self.heading_style();
        writeln!(self.out, "\n{}", "Dominance matrix (1: row dominates column)".style(heading))?;

        write!(self.out, "{:<NAME_WIDTH$}", "")?;
        for alternative in matrix.alternatives() {
            write!(self.out, "{alternative:<CELL_WIDTH$}")?;
        }
        writeln!(self.out)?;

        for (a1, alternative) in matrix.alternatives().iter().enumerate() {
            write!(self.out, "{alternative:<NAME_WIDTH$}")?;
            for a2 in 0..matrix.alternative_count() {
                if a1 == a2 {
                    write!(self.out, "{:<CELL_WIDTH$}", "-")?;
                } else {
                    write!(self.out, "{:<CELL_WIDTH$}", u8::from(relation.dominates(a1, a2)))?;
                }
            }
            writeln!(self.out)?;
        }

        Ok(())
    }

    /// The Pareto-optimal alternatives as a numbered list.
    pub fn pareto_set(&mut self, set: &[String]) -> IoResult<()> {
        let heading = self.heading_style();
        let highlight = self.highlight_style();
        writeln!(self.out, "\n{}", "Pareto-optimal alternatives".style(heading))?;

        for (index, alternative) in set.iter().enumerate() {
            writeln!(self.out, "{}) {}", index + 1, alternative.style(highlight))?;
        }

        Ok(())
    }

    /// The collected alternative-by-state utility table.
    pub fn utility_table(&mut self, matrix: &UtilityMatrix) -> IoResult<()> {
        let heading = self.heading_style();
        writeln!(self.out, "\n{}", "Utility matrix (rows: alternatives, columns: states)".style(heading))?;

        write!(self.out, "{:<NAME_WIDTH$}", "Alternative")?;
        for state in 1..=matrix.state_count() {
            write!(self.out, "{:<VALUE_WIDTH$}", format!("State {state}"))?;
        }
        writeln!(self.out)?;

        for (index, alternative) in matrix.alternatives().iter().enumerate() {
            write!(self.out, "{alternative:<NAME_WIDTH$}")?;
            for &value in matrix.row(index) {
                write!(self.out, "{value:<VALUE_WIDTH$.2}")?;
            }
            writeln!(self.out)?;
        }

        Ok(())
    }

    /// One criterion's ranking table, best alternative first.
    pub fn criterion_ranking(&mut self, criterion: Criterion, ranked: &[RankedEntry]) -> IoResult<()> {
        let heading = self.heading_style();
        writeln!(self.out, "\n{}", format!("Results for the {} criterion", criterion.title()).style(heading))?;

        writeln!(
            self.out,
            "{:<POSITION_WIDTH$} {:<NAME_WIDTH$} {:<VALUE_WIDTH$}",
            "Rank",
            "Alternative",
            criterion.value_label()
        )?;

        for entry in ranked {
            writeln!(
                self.out,
                "{:<POSITION_WIDTH$} {:<NAME_WIDTH$} {:<VALUE_WIDTH$.4}",
                entry.position, entry.alternative, entry.score
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CriteriaEngine, rank};
    use crate::matrix::RankMatrix;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn rendered(f: impl FnOnce(&mut ConsoleReport<'_, Vec<u8>>) -> IoResult<()>) -> String {
        let mut buf = Vec::new();
        let mut report = ConsoleReport::new(&mut buf, false);
        f(&mut report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_rank_table_lists_experts_as_columns() {
        let matrix = RankMatrix::new(names(&["A", "B"]), names(&["E1", "E2"]), vec![vec![1, 2], vec![2, 1]]).unwrap();
        let text = rendered(|report| report.rank_table(&matrix));

        assert!(text.contains("E1"));
        assert!(text.contains("E2"));
        assert!(text.lines().any(|line| line.starts_with('A')));
    }

    #[test]
    fn test_dominance_matrix_marks_diagonal() {
        let matrix = RankMatrix::new(names(&["A", "B"]), names(&["E1"]), vec![vec![1, 2]]).unwrap();
        let relation = DominanceRelation::analyze(&matrix);
        let text = rendered(|report| report.dominance_matrix(&matrix, &relation));

        let row_a = text.lines().find(|line| line.starts_with('A')).unwrap();
        assert!(row_a.contains('-'));
        assert!(row_a.contains('1'));
    }

    #[test]
    fn test_pareto_set_is_numbered() {
        let text = rendered(|report| report.pareto_set(&names(&["A", "B"])));

        assert!(text.contains("1) A"));
        assert!(text.contains("2) B"));
    }

    #[test]
    fn test_utility_table_formats_two_decimals() {
        let matrix = UtilityMatrix::new(names(&["A"]), 2, 10.0, vec![vec![10.0, 2.5]]).unwrap();
        let text = rendered(|report| report.utility_table(&matrix));

        assert!(text.contains("10.00"));
        assert!(text.contains("2.50"));
        assert!(text.contains("State 2"));
    }

    #[test]
    fn test_criterion_ranking_formats_four_decimals() {
        let matrix = UtilityMatrix::new(names(&["A", "B"]), 2, 10.0, vec![vec![10.0, 2.0], vec![6.0, 6.0]]).unwrap();
        let engine = CriteriaEngine::new(&matrix);
        let scores = engine.wald();
        let ranked = rank(matrix.alternatives(), &scores, Criterion::Wald.direction());
        let text = rendered(|report| report.criterion_ranking(Criterion::Wald, &ranked));

        assert!(text.contains("Wald"));
        assert!(text.contains("Worst case"));
        assert!(text.contains("6.0000"));
        // B has the better worst case and must rank first.
        let rank_one = text.lines().find(|line| line.starts_with("1 ")).unwrap();
        assert!(rank_one.contains('B'));
    }
}
