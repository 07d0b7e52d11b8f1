use std::fmt::{self, Display, Formatter};

use crate::board::Board;

/// Heuristic used to order the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Manhattan,
    Hamming,
}

impl Method {
    pub fn heuristic(self, board: &Board) -> u32 {
        match self {
            Method::Manhattan => board.manhattan(),
            Method::Hamming => board.hamming(),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Manhattan => write!(f, "manhattan"),
            Method::Hamming => write!(f, "hamming"),
        }
    }
}

/// Which already seen boards a search refuses to expand again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dedup {
    /// Only the board the current node was reached from.
    Predecessor,
    /// Every board expanded so far, plus the predecessor.
    Closed,
}

impl Display for Dedup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dedup::Predecessor => write!(f, "predecessor"),
            Dedup::Closed => write!(f, "closed-set"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub method: Method,
    pub dedup: Dedup,
    /// Multiplies the heuristic - anything above 1 gives up optimality for speed.
    pub weight: u32,
}

impl Config {
    pub fn new(method: Method, dedup: Dedup, weight: u32) -> Self {
        Config {
            method,
            dedup,
            weight,
        }
    }

    /// `moves + weight * h`, lower is expanded first
    ///
    /// Saturates instead of overflowing so any weight is accepted.
    pub fn priority(&self) -> impl Fn(u32, &Board) -> u32 {
        let method = self.method;
        let weight = self.weight;
        move |moves: u32, board: &Board| {
            weight
                .saturating_mul(method.heuristic(board))
                .saturating_add(moves)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Method::Manhattan, Dedup::Predecessor, 1)
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.weight == 1 {
            write!(f, "{} / {}", self.method, self.dedup)
        } else {
            write!(f, "{} x{} / {}", self.method, self.weight, self.dedup)
        }
    }
}
