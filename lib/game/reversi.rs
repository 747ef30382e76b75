use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

const EDGE: u8 = 8;
const SIZE: usize = EDGE as usize * EDGE as usize;

/// The contents of a square on the reversi board.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Square {
    #[default]
    #[display(fmt = ".")]
    Empty,
    #[display(fmt = "x")]
    Black,
    #[display(fmt = "o")]
    White,
}

/// The reason why a [`Board`] could not be constructed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum InvalidBoard {
    #[display(fmt = "`{}` is not a square, expected one of `.`, `x` or `o`", _0)]
    Square(#[error(not(source))] char),
    #[display(fmt = "expected {} squares, found {}", SIZE, _0)]
    Size(#[error(not(source))] usize),
}

impl TryFrom<char> for Square {
    type Error = InvalidBoard;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(Square::Empty),
            'x' => Ok(Square::Black),
            'o' => Ok(Square::White),
            c => Err(InvalidBoard::Square(c)),
        }
    }
}

/// The coordinates of a square, `x` is the column and `y` the row.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "({}, {})", x, y)]
#[serde(deny_unknown_fields)]
pub struct Point {
    #[cfg_attr(test, strategy(0..Board::EDGE))]
    x: u8,
    #[cfg_attr(test, strategy(0..Board::EDGE))]
    y: u8,
}

impl Point {
    /// Constructs [`Point`] from its coordinates.
    pub fn new(x: u8, y: u8) -> Self {
        Point { x, y }
    }

    /// The column.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// The row.
    pub fn y(&self) -> u8 {
        self.y
    }
}

/// A reversi board in row-major order.
///
/// Serialized as a sequence of exactly [`Board::SIZE`] squares.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(try_from = "Vec<Square>", into = "Vec<Square>")]
pub struct Board([Square; SIZE]);

impl Board {
    /// The number of squares along each side.
    pub const EDGE: u8 = EDGE;

    /// The total number of squares.
    pub const SIZE: usize = SIZE;

    /// An iterator over the squares in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Square> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<Square>> for Board {
    type Error = InvalidBoard;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        let size = squares.len();
        Ok(Board(squares.try_into().map_err(|_| InvalidBoard::Size(size))?))
    }
}

impl From<Board> for Vec<Square> {
    fn from(b: Board) -> Self {
        b.0.into()
    }
}

/// Parses the compact notation, one character per square, ignoring whitespace.
impl FromStr for Board {
    type Err = InvalidBoard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Square::try_from)
            .collect::<Result<Vec<_>, _>>()?
            .try_into()
    }
}

/// Prints the compact notation, one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.iter().enumerate() {
            if i > 0 && i % Self::EDGE as usize == 0 {
                f.write_char('\n')?;
            }

            write!(f, "{}", s)?;
        }

        Ok(())
    }
}
