use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Which way ranking sorts criterion scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Lower scores rank first (regret-style criteria).
    Ascending,
    /// Higher scores rank first.
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Criterion {
    Savage,
    Laplace,
    Wald,
    MaxiMax,
    Hurwicz,
}

impl Criterion {
    /// The sort direction under which a better score ranks first.
    #[must_use]
    pub const fn direction(self) -> SortDirection {
        match self {
            // Savage minimizes the worst-case regret, so a smaller score wins.
            Self::Savage => SortDirection::Ascending,
            Self::Laplace | Self::Wald | Self::MaxiMax | Self::Hurwicz => SortDirection::Descending,
        }
    }

    /// Human-readable column label for the criterion's score.
    #[must_use]
    pub const fn value_label(self) -> &'static str {
        match self {
            Self::Savage => "Max regret",
            Self::Laplace => "Mean utility",
            Self::Wald => "Worst case",
            Self::MaxiMax => "Best case",
            Self::Hurwicz => "Blended value",
        }
    }

    /// Human-readable criterion name for report headings.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Savage => "Savage (minimax regret)",
            Self::Laplace => "Laplace (equal likelihood)",
            Self::Wald => "Wald (maximin)",
            Self::MaxiMax => "MaxiMax",
            Self::Hurwicz => "Hurwicz (optimism-weighted)",
        }
    }
}
