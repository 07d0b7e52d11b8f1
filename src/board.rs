use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

/// Tiles are stored as `u16` so `n * n` must fit.
pub const MAX_DIMENSION: usize = 255;

/// Ways an arrangement can fail to be a valid board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    TooSmall(usize),
    TooLarge(usize),
    NotSquare { row: usize, len: usize },
    OutOfRange(u32),
    Duplicate(u32),
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::TooSmall(n) => write!(f, "Dimension {} is too small - at least 2 required", n),
            BoardErr::TooLarge(n) => {
                write!(f, "Dimension {} is larger than {}", n, MAX_DIMENSION)
            }
            BoardErr::NotSquare { row, len } => {
                write!(f, "Row {} has {} tiles - board must be square", row, len)
            }
            BoardErr::OutOfRange(tile) => write!(f, "Tile {} is out of range", tile),
            BoardErr::Duplicate(0) => write!(f, "More than one blank"),
            BoardErr::Duplicate(tile) => write!(f, "Tile {} appears more than once", tile),
        }
    }
}

impl Error for BoardErr {}

/// One arrangement of tiles. Immutable, heuristics are computed during construction.
#[derive(Clone)]
pub struct Board {
    n: usize,
    tiles: Vec<u16>,
    blank: usize,
    hamming: u32,
    manhattan: u32,
}

impl Board {
    pub fn new<R: AsRef<[u32]>>(rows: &[R]) -> Result<Board, BoardErr> {
        let n = rows.len();
        if n < 2 {
            return Err(BoardErr::TooSmall(n));
        }
        if n > MAX_DIMENSION {
            return Err(BoardErr::TooLarge(n));
        }

        let mut seen = vec![false; n * n];
        let mut tiles = Vec::with_capacity(n * n);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(BoardErr::NotSquare { row: r, len: row.len() });
            }
            for &tile in row {
                let index = tile as usize;
                if index >= n * n {
                    return Err(BoardErr::OutOfRange(tile));
                }
                if seen[index] {
                    return Err(BoardErr::Duplicate(tile));
                }
                seen[index] = true;
                tiles.push(tile as u16);
            }
        }
        // n * n distinct values below n * n, so the blank is there exactly once

        Ok(Board::from_tiles(n, tiles))
    }

    pub fn goal(n: usize) -> Result<Board, BoardErr> {
        if n < 2 {
            return Err(BoardErr::TooSmall(n));
        }
        let rows: Vec<Vec<u32>> = (0..n)
            .map(|r| {
                (0..n)
                    .map(|c| ((r * n + c + 1) % (n * n)) as u32)
                    .collect()
            })
            .collect();
        Board::new(&rows)
    }

    /// Only for tiles already known to be a permutation of `0..n * n`.
    fn from_tiles(n: usize, tiles: Vec<u16>) -> Board {
        let mut blank = 0;
        let mut hamming = 0;
        let mut manhattan = 0;
        for (pos, &tile) in tiles.iter().enumerate() {
            if tile == 0 {
                blank = pos;
                continue;
            }
            let (h, m) = tile_cost(n, tile, pos);
            hamming += h;
            manhattan += m;
        }
        Board {
            n,
            tiles,
            blank,
            hamming,
            manhattan,
        }
    }

    /// Swaps two cells, reusing the cached heuristics of `self`.
    fn swapped(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.tiles.clone();
        let mut hamming = self.hamming;
        let mut manhattan = self.manhattan;

        for &pos in &[a, b] {
            if tiles[pos] != 0 {
                let (h, m) = tile_cost(self.n, tiles[pos], pos);
                hamming -= h;
                manhattan -= m;
            }
        }
        tiles.swap(a, b);
        for &pos in &[a, b] {
            if tiles[pos] != 0 {
                let (h, m) = tile_cost(self.n, tiles[pos], pos);
                hamming += h;
                manhattan += m;
            }
        }

        let blank = if a == self.blank {
            b
        } else if b == self.blank {
            a
        } else {
            self.blank
        };

        Board {
            n: self.n,
            tiles,
            blank,
            hamming,
            manhattan,
        }
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    pub fn hamming(&self) -> u32 {
        self.hamming
    }

    pub fn manhattan(&self) -> u32 {
        self.manhattan
    }

    pub fn is_goal(&self) -> bool {
        self.hamming == 0
    }

    /// Panics unless both `row` and `col` are less than `dimension()`.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        u32::from(self.tiles[row * self.n + col])
    }

    /// Boards reachable by sliding one tile into the blank.
    ///
    /// The order is fixed: the tile above the blank, below, left, right.
    pub fn neighbors(&self) -> Vec<Board> {
        let n = self.n;
        let (r, c) = (self.blank / n, self.blank % n);

        let mut neighbors = Vec::with_capacity(4);
        if r > 0 {
            neighbors.push(self.swapped(self.blank, self.blank - n));
        }
        if r < n - 1 {
            neighbors.push(self.swapped(self.blank, self.blank + n));
        }
        if c > 0 {
            neighbors.push(self.swapped(self.blank, self.blank - 1));
        }
        if c < n - 1 {
            neighbors.push(self.swapped(self.blank, self.blank + 1));
        }
        neighbors
    }

    /// The first two non-blank tiles in row-major order swapped.
    ///
    /// Exactly one of a board and its twin is solvable.
    pub fn twin(&self) -> Board {
        let (a, b) = match self.blank {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        self.swapped(a, b)
    }

    /// Inversion count law - for odd `n` the inversions must be even,
    /// for even `n` inversions plus the blank's row counted from the top must be odd.
    pub fn is_solvable_by_parity(&self) -> bool {
        let tiles: Vec<u16> = self.tiles.iter().cloned().filter(|&t| t != 0).collect();
        let mut inversions = 0;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }

        if self.n % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank / self.n) % 2 == 1
        }
    }
}

/// Hamming and manhattan contribution of a non-blank tile at `pos`.
fn tile_cost(n: usize, tile: u16, pos: usize) -> (u32, u32) {
    let goal = usize::from(tile) - 1;
    if goal == pos {
        return (0, 0);
    }
    let (r, c) = (pos / n, pos % n);
    let (gr, gc) = (goal / n, goal % n);
    let dist = (r as isize - gr as isize).abs() + (c as isize - gc as isize).abs();
    (1, dist as u32)
}

impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        // heuristics are cheap to compare and usually differ
        self.n == other.n
            && self.blank == other.blank
            && self.hamming == other.hamming
            && self.manhattan == other.manhattan
            && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.n.hash(state);
        self.tiles.hash(state);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = (self.n * self.n - 1).to_string().len();
        writeln!(f, "{}", self.n)?;
        for row in self.tiles.chunks(self.n) {
            let cells: Vec<_> = row
                .iter()
                .map(|tile| format!("{:>width$}", tile, width = width))
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
