//! A console tool for classroom decision-theory exercises.

use choicerank::Host;
use std::io::{BufRead, Write, stderr, stdin, stdout};

/// Default host that talks to the real process streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn input(&mut self) -> impl BufRead {
        stdin().lock()
    }

    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

fn main() {
    env_logger::init();
    choicerank::run(&mut RealHost, std::env::args());
}
