//! Command-line interface and orchestration.

mod group;
mod prompter;
mod uncertainty;

pub use group::{GroupArgs, group_ranking};
pub use prompter::Prompter;
pub use uncertainty::{UncertaintyArgs, uncertainty_analysis};

use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::io::{BufRead, IsTerminal, Write, stdout};

/// Abstraction over the process environment, so integration tests can drive
/// the tool with scripted input and capture its output.
pub trait Host {
    /// Where interactive answers are read from.
    fn input(&mut self) -> impl BufRead;

    /// Where prompts and reports are written.
    fn output(&mut self) -> impl Write;

    /// Where errors are written.
    fn error(&mut self) -> impl Write;

    /// Terminate with the given exit code.
    fn exit(&mut self, code: i32);
}

/// When to colorize console reports.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Always,
    Never,
    Auto,
}

impl ColorMode {
    fn resolve(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "choicerank", version, about = "Decision-theory toolkit: Pareto group ranking and choice under uncertainty")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank alternatives with multiple experts and extract the Pareto-optimal set
    Group(GroupArgs),

    /// Evaluate alternatives under uncertainty with the Savage, Laplace, Wald, MaxiMax, and Hurwicz criteria
    Uncertainty(UncertaintyArgs),
}

/// Parse arguments, run the selected pipeline, and report failures through
/// the host.
pub fn run<H: Host>(host: &mut H, args: impl IntoIterator<Item = impl Into<OsString> + Clone>) {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own help/usage text; route it unchanged.
            let rendered = err.render();
            if err.use_stderr() {
                _ = write!(host.error(), "{rendered}");
                host.exit(2);
            } else {
                _ = write!(host.output(), "{rendered}");
                host.exit(0);
            }
            return;
        }
    };

    let result = match cli.command {
        Command::Group(args) => group_ranking(host, &args),
        Command::Uncertainty(args) => uncertainty_analysis(host, &args),
    };

    if let Err(err) = result {
        _ = writeln!(host.error(), "error: {err:#}");
        host.exit(1);
    }
}
