use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tinyvec::ArrayVec;

/// The neighbor indices of a tile. A tile has at most 8 neighbors.
pub type Neighbors = ArrayVec<[usize; 8]>;

const DEFAULT_LAYOUT: [&str; 4] = ["l - - r", "l - - r", "l - - r", "l - - r"];

/// Position of a tile in the layout, which determines the set of neighbors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PositionClass {
    LeftEdge,
    RightEdge,
    Interior,
}

use PositionClass::{Interior, LeftEdge, RightEdge};

impl fmt::Display for PositionClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LeftEdge => write!(f, "l"),
            RightEdge => write!(f, "r"),
            Interior => write!(f, "-"),
        }
    }
}

impl FromStr for PositionClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" => Ok(LeftEdge),
            "r" => Ok(RightEdge),
            "-" => Ok(Interior),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

/// The layout of the tiles on a board: how many tiles there are, and which
/// tiles are adjacent.
///
/// Tiles are numbered `0..size()`. Adjacency only depends on the index and
/// its [`PositionClass`], never on the letters or the state of a game.
pub trait Topology: Sync {
    /// The number of tiles.
    fn size(&self) -> usize;

    /// The position class of tile `index`.
    /// ## Panics
    /// If `index` is out of range.
    fn class(&self, index: usize) -> PositionClass;

    /// The tiles adjacent to `index`, all in the range `0..size()`.
    fn neighbors(&self, index: usize) -> Neighbors;

    /// Check if `to` is a neighbor of `from`.
    fn is_adjacent(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).contains(&to)
    }
}

/// A rectangular grid of tiles, numbered row by row.
///
/// The first column is the left edge, the last column is the right edge.
/// A tile is adjacent to the (up to 8) tiles around it, horizontally,
/// vertically and diagonally.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    width: usize,
    classes: Vec<PositionClass>,
}

impl Default for Grid {
    /// The standard 4x4 boggle grid.
    fn default() -> Grid {
        // The default layout is valid, so it is safe to unwrap
        Grid::from_strings(&DEFAULT_LAYOUT).unwrap()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Grid {
    /// Create a grid with `width` columns and `height` rows.
    /// ## Errors
    /// If `width` < 2: every row needs a left and a right edge.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Grid, Topology, Error};
    /// let grid = Grid::new(5, 5)?;
    /// assert_eq!(grid.size(), 25);
    /// assert_eq!(grid.neighbors(0).as_slice(), &[1, 5, 6]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Grid, Error> {
        if width < 2 {
            return Err(Error::InvalidGridWidth(width));
        }
        let classes = (0..width * height)
            .map(|i| match i % width {
                0 => LeftEdge,
                col if col == width - 1 => RightEdge,
                _ => Interior,
            })
            .collect();
        Ok(Grid { width, classes })
    }

    /// Create a `Grid` from strings, one string for each row.
    /// Each row consists of cells joined by spaces: `l` for the left edge,
    /// `r` for the right edge and `-` for the interior.
    ///
    /// ## Errors
    /// If `grid` is empty, the rows have different lengths, or a cell can not
    /// be parsed as a [`PositionClass`].
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Grid, Error};
    /// let grid = Grid::from_strings(&["l - - r", "l - - r", "l - - r", "l - - r"])?;
    /// assert_eq!(grid, Grid::default());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.is_empty() {
            return Err(Error::InvalidRowCount(0));
        }
        let mut width = 0;
        let mut classes = Vec::new();
        for (i, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            let cells = row.split_whitespace().collect::<Vec<&str>>();
            if i == 0 {
                width = cells.len();
                if width < 2 {
                    return Err(Error::InvalidGridWidth(width));
                }
            } else if cells.len() != width {
                return Err(Error::InvalidRowLength(String::from(row), cells.len(), width));
            }
            for cell in cells {
                classes.push(cell.parse()?);
            }
        }
        Ok(Grid { width, classes })
    }

    /// Get grid classes as a vec of strings, one for each row.
    pub fn to_strings(&self) -> Vec<String> {
        self.classes
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(PositionClass::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.classes.len() / self.width
    }
}

/// (row, column) offsets to the neighbors of a tile.
fn offsets(class: PositionClass) -> &'static [(isize, isize)] {
    match class {
        LeftEdge => &[(-1, 0), (-1, 1), (0, 1), (1, 0), (1, 1)],
        RightEdge => &[(-1, -1), (-1, 0), (0, -1), (1, -1), (1, 0)],
        Interior => &[
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ],
    }
}

impl Topology for Grid {
    fn size(&self) -> usize {
        self.classes.len()
    }

    fn class(&self, index: usize) -> PositionClass {
        self.classes[index]
    }

    /// Neighbors are found by applying the offsets of the tile's class to the
    /// flat index, and dropping every result outside the board. A tile out of
    /// range has no neighbors.
    fn neighbors(&self, index: usize) -> Neighbors {
        let mut neighbors = Neighbors::new();
        let class = match self.classes.get(index) {
            Some(&class) => class,
            None => return neighbors,
        };
        let width = self.width as isize;
        let size = self.classes.len() as isize;
        for &(dy, dx) in offsets(class) {
            let n = index as isize + dy * width + dx;
            if n > -1 && n < size {
                neighbors.push(n as usize);
            }
        }
        neighbors
    }
}
