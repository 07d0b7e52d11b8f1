use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::{Board, BoardErr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    NotANumber(String),
    WrongCount { expected: usize, found: usize },
    Board(BoardErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "No dimension"),
            ParserErr::NotANumber(ref token) => write!(f, "Not a number: {}", token),
            ParserErr::WrongCount { expected, found } => {
                write!(f, "Expected {} tiles, found {}", expected, found)
            }
            ParserErr::Board(ref err) => write!(f, "Invalid board: {}", err),
        }
    }
}

impl Error for ParserErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ParserErr::Board(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardErr> for ParserErr {
    fn from(err: BoardErr) -> Self {
        ParserErr::Board(err)
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the dimension `n` followed by `n * n` tiles in row-major order.
///
/// Any whitespace separates numbers so the tiles don't have to be laid out in rows.
pub(crate) fn parse(text: &str) -> Result<Board, ParserErr> {
    let mut numbers = text.split_whitespace().map(|token| {
        token
            .parse::<u32>()
            .map_err(|_| ParserErr::NotANumber(token.to_owned()))
    });

    let n = numbers.next().ok_or(ParserErr::Empty)?? as usize;
    let tiles = numbers.collect::<Result<Vec<_>, _>>()?;
    if tiles.len() != n * n {
        return Err(ParserErr::WrongCount {
            expected: n * n,
            found: tiles.len(),
        });
    }

    // n == 0 gets here with no tiles, chunks would panic
    let rows: Vec<&[u32]> = if n == 0 {
        Vec::new()
    } else {
        tiles.chunks(n).collect()
    };
    Ok(Board::new(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing() {
        let board: Board = "3\n 0  1  3\n 4  2  5\n 7  8  6\n".parse().unwrap();
        assert_eq!(board, Board::new(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]).unwrap());

        // layout doesn't matter
        let board: Board = "2 1 2 3 0".parse().unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn formatted_board_parses_back() {
        let board = Board::new(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap();
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn errors() {
        assert_eq!(parse("").unwrap_err(), ParserErr::Empty);
        assert_eq!(parse("  \n ").unwrap_err(), ParserErr::Empty);
        assert_eq!(
            parse("2 1 x 3 0").unwrap_err(),
            ParserErr::NotANumber("x".to_owned())
        );
        assert_eq!(
            parse("-3").unwrap_err(),
            ParserErr::NotANumber("-3".to_owned())
        );
        assert_eq!(
            parse("2 1 2 3").unwrap_err(),
            ParserErr::WrongCount {
                expected: 4,
                found: 3
            }
        );
        assert_eq!(
            parse("0").unwrap_err(),
            ParserErr::Board(BoardErr::TooSmall(0))
        );
        assert_eq!(
            parse("1 0").unwrap_err(),
            ParserErr::Board(BoardErr::TooSmall(1))
        );
        assert_eq!(
            parse("2 1 2 3 3").unwrap_err(),
            ParserErr::Board(BoardErr::Duplicate(3))
        );

        let err = parse("2 1 2 3 4").unwrap_err();
        assert_eq!(err.to_string(), "Invalid board: Tile 4 is out of range");
        assert!(err.source().is_some());
    }
}
