mod console;
mod json;

pub use console::ConsoleReport;
pub use json::{CriterionReport, GroupReport, UncertaintyReport};
