//! The choice-under-uncertainty pipeline.

use crate::commands::{ColorMode, Host, Prompter};
use crate::criteria::{CriteriaEngine, Criterion, rank};
use crate::matrix::UtilityMatrix;
use crate::reports::{ConsoleReport, CriterionReport, UncertaintyReport};
use anyhow::Result;
use clap::Args;
use strum::IntoEnumIterator;

#[derive(Debug, Args)]
pub struct UncertaintyArgs {
    /// Criteria to evaluate (defaults to all five)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub criteria: Vec<Criterion>,

    /// Emit the results as JSON instead of console tables
    #[arg(long)]
    pub json: bool,

    /// When to colorize console output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl UncertaintyArgs {
    fn selected_criteria(&self) -> Vec<Criterion> {
        if self.criteria.is_empty() {
            Criterion::iter().collect()
        } else {
            self.criteria.clone()
        }
    }
}

/// Collect a complete utility matrix interactively, evaluate the selected
/// criteria, and report each criterion's ranking.
pub fn uncertainty_analysis<H: Host>(host: &mut H, args: &UncertaintyArgs) -> Result<()> {
    let criteria = args.selected_criteria();

    let (matrix, alpha) = collect_utility_matrix(host, criteria.contains(&Criterion::Hurwicz))?;

    log::info!(
        "evaluating {} criteria over {} alternatives and {} states",
        criteria.len(),
        matrix.alternative_count(),
        matrix.state_count()
    );

    let engine = CriteriaEngine::new(&matrix);
    let results: Vec<CriterionReport> = criteria
        .into_iter()
        .map(|criterion| {
            let scores = engine.evaluate(criterion, alpha);
            CriterionReport {
                criterion,
                alpha: (criterion == Criterion::Hurwicz).then_some(alpha),
                ranking: rank(matrix.alternatives(), &scores.scores, criterion.direction()),
            }
        })
        .collect();

    if args.json {
        let mut out = host.output();
        UncertaintyReport::build(&matrix, results).write(&mut out)?;
    } else {
        let mut out = host.output();
        let mut report = ConsoleReport::new(&mut out, args.color.resolve());
        report.utility_table(&matrix)?;
        for result in &results {
            report.criterion_ranking(result.criterion, &result.ranking)?;
        }
    }

    Ok(())
}

fn collect_utility_matrix<H: Host>(host: &mut H, needs_alpha: bool) -> Result<(UtilityMatrix, f64)> {
    let mut prompter = Prompter::new(host);

    let alternative_count = prompter.read_count("Number of alternatives: ")?;
    let alternatives: Vec<String> = (1..=alternative_count)
        .map(|i| prompter.read_name(&format!("Name of alternative {i}: ")))
        .collect::<Result<_>>()?;

    let state_count = prompter.read_count("Number of external states: ")?;
    let max_score = prompter.read_count("Maximum value of the scoring scale (for example, 10): ")?;

    #[expect(clippy::cast_precision_loss, reason = "scoring bounds are human-entered and tiny")]
    let max_score = max_score as f64;

    let mut utilities = Vec::with_capacity(alternative_count);
    for alternative in &alternatives {
        prompter.say(&format!("\nEnter utility values for alternative '{alternative}':"))?;

        let mut row = Vec::with_capacity(state_count);
        for state in 1..=state_count {
            row.push(prompter.read_bounded(
                &format!("Utility for alternative '{alternative}' in state {state} (1 to {max_score}): "),
                1.0,
                max_score,
            )?);
        }
        utilities.push(row);
    }

    let alpha = if needs_alpha {
        prompter.read_coefficient("Optimism coefficient α (0 to 1): ")?
    } else {
        0.0
    };

    Ok((UtilityMatrix::new(alternatives, state_count, max_score, utilities)?, alpha))
}
