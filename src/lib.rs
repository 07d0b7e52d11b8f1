// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod board;
pub mod config;
pub mod solver;

mod fs;
mod parser;

use std::error::Error;

use crate::board::Board;
use crate::config::Config;
use crate::solver::{Solver, SolverErr};

pub use crate::parser::ParserErr;

pub trait LoadBoard {
    fn load_board(&self) -> Result<Board, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, config: &Config) -> Result<Solver, SolverErr>;
}
