//! Interactive prompt-and-retry loops.
//!
//! All range validation lives here, at the input boundary: the computation
//! core assumes its preconditions hold and never re-checks them.

use crate::commands::Host;
use crate::error::Error;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

const RETRY_MESSAGE: &str = "Invalid value, please try again.";

/// Reads validated answers from the host, re-prompting until a well-formed
/// value arrives.
#[derive(Debug)]
pub struct Prompter<'a, H> {
    host: &'a mut H,
}

impl<'a, H: Host> Prompter<'a, H> {
    #[must_use]
    pub fn new(host: &'a mut H) -> Self {
        Self { host }
    }

    /// Print an informational line between prompts.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.host.output(), "{text}").context("writing prompt")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        let mut out = self.host.output();
        write!(out, "{prompt}").context("writing prompt")?;
        out.flush().context("flushing prompt")?;
        drop(out);

        let mut line = String::new();
        let read = self.host.input().read_line(&mut line).context("reading input")?;
        if read == 0 {
            bail!("unexpected end of input");
        }

        Ok(line.trim().to_string())
    }

    fn retry(&mut self, message: &str) -> Result<()> {
        writeln!(self.host.output(), "{message}").context("writing prompt")?;
        Ok(())
    }

    /// A non-empty name.
    pub fn read_name(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.retry(RETRY_MESSAGE)?;
        }
    }

    /// A positive count.
    pub fn read_count(&mut self, prompt: &str) -> Result<usize> {
        loop {
            let answer = self.ask(prompt)?;
            if let Ok(value) = answer.parse::<usize>()
                && value >= 1
            {
                return Ok(value);
            }
            self.retry(RETRY_MESSAGE)?;
        }
    }

    /// An integer rank in [1, max].
    pub fn read_rank(&mut self, prompt: &str, max: u32) -> Result<u32> {
        loop {
            let answer = self.ask(prompt)?;
            if let Ok(value) = answer.parse::<u32>()
                && (1..=max).contains(&value)
            {
                return Ok(value);
            }
            self.retry(&format!("Enter a number between 1 and {max}."))?;
        }
    }

    /// A floating-point value in [min, max].
    pub fn read_bounded(&mut self, prompt: &str, min: f64, max: f64) -> Result<f64> {
        loop {
            let answer = self.ask(prompt)?;
            if let Ok(value) = answer.parse::<f64>() {
                if (min..=max).contains(&value) {
                    return Ok(value);
                }

                log::debug!("rejected out-of-range answer {value} for [{min}, {max}]");
            }
            self.retry(RETRY_MESSAGE)?;
        }
    }

    /// The Hurwicz optimism coefficient, in [0, 1].
    pub fn read_coefficient(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let answer = self.ask(prompt)?;
            if let Ok(value) = answer.parse::<f64>() {
                if (0.0..=1.0).contains(&value) {
                    return Ok(value);
                }

                self.retry(&Error::OutOfRangeCoefficient(value).to_string())?;
                continue;
            }
            self.retry(RETRY_MESSAGE)?;
        }
    }
}
