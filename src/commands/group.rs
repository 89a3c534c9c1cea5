//! The multi-expert group-ranking pipeline.

use crate::commands::{ColorMode, Host, Prompter};
use crate::matrix::RankMatrix;
use crate::pareto::{DominanceRelation, pareto_set};
use crate::reports::{ConsoleReport, GroupReport};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct GroupArgs {
    /// Emit the results as JSON instead of console tables
    #[arg(long)]
    pub json: bool,

    /// When to colorize console output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

/// Collect a complete rank matrix interactively, run the dominance analysis,
/// and report the Pareto-optimal set.
pub fn group_ranking<H: Host>(host: &mut H, args: &GroupArgs) -> Result<()> {
    let matrix = collect_rank_matrix(host)?;

    log::info!(
        "analyzing dominance for {} alternatives ranked by {} experts",
        matrix.alternative_count(),
        matrix.expert_count()
    );

    let relation = DominanceRelation::analyze(&matrix);
    let optimal = pareto_set(&matrix, &relation);

    if args.json {
        let mut out = host.output();
        GroupReport::build(&matrix, &relation, optimal).write(&mut out)?;
    } else {
        let mut out = host.output();
        let mut report = ConsoleReport::new(&mut out, args.color.resolve());
        report.rank_table(&matrix)?;
        report.dominance_matrix(&matrix, &relation)?;
        report.pareto_set(&optimal)?;
    }

    Ok(())
}

fn collect_rank_matrix<H: Host>(host: &mut H) -> Result<RankMatrix> {
    let mut prompter = Prompter::new(host);

    let alternative_count = prompter.read_count("Number of alternatives: ")?;
    let alternatives: Vec<String> = (1..=alternative_count)
        .map(|i| prompter.read_name(&format!("Name of alternative {i}: ")))
        .collect::<Result<_>>()?;

    let expert_count = prompter.read_count("Number of experts: ")?;
    let experts: Vec<String> = (1..=expert_count)
        .map(|i| prompter.read_name(&format!("Name of expert {i}: ")))
        .collect::<Result<_>>()?;

    #[expect(clippy::cast_possible_truncation, reason = "alternative counts are human-entered and tiny")]
    let max_rank = alternative_count as u32;

    let mut ranks = Vec::with_capacity(expert_count);
    for expert in &experts {
        prompter.say(&format!("\n--- Ranking from expert {expert} ---"))?;

        let mut row = Vec::with_capacity(alternative_count);
        for alternative in &alternatives {
            row.push(prompter.read_rank(
                &format!("Rank for alternative '{alternative}' from expert '{expert}' (1..{max_rank}): "),
                max_rank,
            )?);
        }
        ranks.push(row);
    }

    Ok(RankMatrix::new(alternatives, experts, ranks)?)
}
