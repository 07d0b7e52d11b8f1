mod a_star;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use log::{debug, info};
use separator::Separatable;
use typed_arena::Arena;

use crate::board::Board;
use crate::config::{Config, Dedup};
use crate::Solve;

use self::a_star::{backtrack_path, Search};

pub use self::a_star::Stats;

/// `move_count()` of a board that can't be solved.
pub const UNSOLVABLE: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    InvalidInput,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::InvalidInput => write!(f, "No initial board"),
        }
    }
}

impl Error for SolverErr {}

/// A solved (or proven unsolvable) puzzle.
///
/// All the searching happens in the constructors, the rest only reads the results.
pub struct Solver {
    initial: Board,
    path: Option<Vec<Board>>,
    stats: Stats,
    twin_stats: Stats,
}

impl Solver {
    pub fn new<B: Into<Option<Board>>>(initial: B) -> Result<Self, SolverErr> {
        Self::with_config(initial, &Config::default())
    }

    pub fn with_config<B: Into<Option<Board>>>(
        initial: B,
        config: &Config,
    ) -> Result<Self, SolverErr> {
        Self::with_priority(initial, config.dedup, config.priority())
    }

    /// `priority` gets the number of moves made so far and the board reached,
    /// nodes with lower values are expanded first.
    pub fn with_priority<B, P>(initial: B, dedup: Dedup, priority: P) -> Result<Self, SolverErr>
    where
        B: Into<Option<Board>>,
        P: Fn(u32, &Board) -> u32,
    {
        let initial = initial.into().ok_or(SolverErr::InvalidInput)?;
        info!(
            "Solving {0}x{0} board, manhattan: {1}, hamming: {2}",
            initial.dimension(),
            initial.manhattan(),
            initial.hamming()
        );

        let (path, stats, twin_stats) = solve(&initial, dedup, &priority);
        match path {
            Some(ref path) => info!(
                "Solved in {} moves, {} states visited",
                path.len() - 1,
                stats.total_visited().separated_string()
            ),
            None => info!(
                "Twin solved first - no solution, {} states visited",
                stats.total_visited().separated_string()
            ),
        }

        Ok(Solver {
            initial,
            path,
            stats,
            twin_stats,
        })
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn is_solvable(&self) -> bool {
        self.path.is_some()
    }

    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }

    /// Number of moves of an optimal solution or `UNSOLVABLE`.
    pub fn move_count(&self) -> i32 {
        self.moves().map_or(UNSOLVABLE, |moves| moves as i32)
    }

    /// Boards from the initial one to the goal, empty if there's no solution.
    pub fn solution(&self) -> impl Iterator<Item = &Board> + '_ {
        self.path.iter().flatten()
    }

    /// Stats of the search from the initial board.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Stats of the search from the twin board.
    pub fn twin_stats(&self) -> &Stats {
        &self.twin_stats
    }
}

impl Debug for Solver {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves() {
            None => writeln!(f, "No solution")?,
            Some(moves) => writeln!(f, "Moves: {}", moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, config: &Config) -> Result<Solver, SolverErr> {
        Solver::with_config(self.clone(), config)
    }
}

/// Runs the search from `initial` and from its twin in lockstep until one of them reaches the goal.
fn solve(
    initial: &Board,
    dedup: Dedup,
    priority: &dyn Fn(u32, &Board) -> u32,
) -> (Option<Vec<Board>>, Stats, Stats) {
    let arena = Arena::new();
    let twin_arena = Arena::new();
    let mut search = Search::new("initial", &arena, priority, dedup, initial.clone());
    let mut twin_search = Search::new("twin", &twin_arena, priority, dedup, initial.twin());

    // one of them is always solvable so this terminates
    let solved = loop {
        if search.is_solved() {
            break true;
        }
        if twin_search.is_solved() || search.is_exhausted() {
            break false;
        }
        search.step();
        twin_search.step();
    };
    debug_assert_eq!(solved, initial.is_solvable_by_parity());

    let path = if solved {
        debug!("Solved, backtracking path");
        search.current().map(backtrack_path)
    } else {
        None
    };
    (path, search.into_stats(), twin_search.into_stats())
}
