//! choicerank crate
//!
//! This crate is an implementation detail of the `choicerank` tool. This crate's API is fluid and may change without warning
//! and in a semver-incompatible way.

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod criteria;

#[doc(hidden)]
pub mod error;

#[doc(hidden)]
pub mod matrix;

#[doc(hidden)]
pub mod pareto;

#[doc(hidden)]
pub mod reports;

pub use crate::commands::{Host, run};
pub use crate::error::Error;
