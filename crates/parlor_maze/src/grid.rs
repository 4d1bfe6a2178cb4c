//! Maze grid: parsing from text and neighbor expansion.

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A grid coordinate, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Cell {
    /// Creates a cell coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// Wire form is a two-element `[row, col]` array.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.row, self.col).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (row, col) = <(usize, usize)>::deserialize(deserializer)?;
        Ok(Self { row, col })
    }
}

/// The four axis moves, listed in the fixed expansion order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// One row up.
    #[display("up")]
    Up,
    /// One row down.
    #[display("down")]
    Down,
    /// One column left.
    #[display("left")]
    Left,
    /// One column right.
    #[display("right")]
    Right,
}

impl Direction {
    /// The neighboring coordinate in this direction.
    ///
    /// `None` when the move would cross the top or left edge; the bottom
    /// and right edges are bounded by the grid itself.
    fn step(self, from: Cell) -> Option<Cell> {
        match self {
            Direction::Up => from.row.checked_sub(1).map(|row| Cell::new(row, from.col)),
            Direction::Down => Some(Cell::new(from.row + 1, from.col)),
            Direction::Left => from.col.checked_sub(1).map(|col| Cell::new(from.row, col)),
            Direction::Right => Some(Cell::new(from.row, from.col + 1)),
        }
    }
}

/// Error raised when maze text cannot be parsed.
#[derive(Debug, Display)]
pub enum ParseError {
    /// The text must contain exactly one `A` and exactly one `B`.
    #[display("maze must have exactly one start and one goal, found {} and {}", _0, _1)]
    BadMarkerCount(usize, usize),
    /// Reading the maze file failed.
    #[display("failed to read maze file: {}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            ParseError::BadMarkerCount(..) => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// A parsed maze: wall grid plus start and goal coordinates.
///
/// Parsing fixes the grid once; searches and renderers only read it.
#[derive(Debug, Clone)]
pub struct Maze {
    height: usize,
    width: usize,
    walls: Vec<Vec<bool>>,
    start: Cell,
    goal: Cell,
}

impl Maze {
    /// Parses maze text.
    ///
    /// `A` marks the start, `B` the goal, a space an open cell, and any
    /// other character a wall. The grid is as tall as the line count and
    /// as wide as the longest line; short lines are padded with walls.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let starts = text.chars().filter(|&c| c == 'A').count();
        let goals = text.chars().filter(|&c| c == 'B').count();
        if starts != 1 || goals != 1 {
            return Err(ParseError::BadMarkerCount(starts, goals));
        }

        let lines: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        let height = lines.len();
        let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);

        let mut walls = vec![vec![false; width]; height];
        let mut start = None;
        let mut goal = None;
        for (row, line) in lines.iter().enumerate() {
            for col in 0..width {
                walls[row][col] = match line.get(col) {
                    Some('A') => {
                        start = Some(Cell::new(row, col));
                        false
                    }
                    Some('B') => {
                        goal = Some(Cell::new(row, col));
                        false
                    }
                    Some(' ') => false,
                    Some(_) => true,
                    // Past the end of a short line counts as wall.
                    None => true,
                };
            }
        }
        let start = start.expect("marker count checked above");
        let goal = goal.expect("marker count checked above");

        debug!(height, width, %start, %goal, "parsed maze");
        Ok(Self {
            height,
            width,
            walls,
            start,
            goal,
        })
    }

    /// Reads and parses a maze file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The start coordinate (the `A` marker).
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The goal coordinate (the `B` marker).
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Whether the cell is a wall. Coordinates off the grid count as walls.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .unwrap_or(true)
    }

    /// Walkable neighbors of `state` in up, down, left, right order.
    ///
    /// The order is load-bearing: it fixes tie-breaks, so a given maze and
    /// frontier discipline always traverse identically.
    pub fn neighbors(&self, state: Cell) -> Vec<(Direction, Cell)> {
        Direction::iter()
            .filter_map(|direction| direction.step(state).map(|cell| (direction, cell)))
            .filter(|(_, cell)| !self.is_wall(*cell))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracts_markers_and_dimensions() {
        let maze = Maze::parse("#A#\n# #\n#B#").unwrap();
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.start(), Cell::new(0, 1));
        assert_eq!(maze.goal(), Cell::new(2, 1));
        assert!(maze.is_wall(Cell::new(0, 0)));
        assert!(!maze.is_wall(Cell::new(1, 1)));
    }

    #[test]
    fn test_parse_rejects_missing_markers() {
        match Maze::parse("###\n# #") {
            Err(ParseError::BadMarkerCount(0, 0)) => {}
            other => panic!("expected BadMarkerCount, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_duplicate_markers() {
        match Maze::parse("AA\nB ") {
            Err(ParseError::BadMarkerCount(2, 1)) => {}
            other => panic!("expected BadMarkerCount, got {other:?}"),
        }
    }

    #[test]
    fn test_short_lines_pad_with_walls() {
        let maze = Maze::parse("A\n B").unwrap();
        assert_eq!(maze.width(), 2);
        // Row 0 is one char long, so column 1 is padding.
        assert!(maze.is_wall(Cell::new(0, 1)));
        assert!(!maze.is_wall(Cell::new(1, 0)));
    }

    #[test]
    fn test_walls_are_any_non_marker_non_space() {
        let maze = Maze::parse("AxB").unwrap();
        assert!(maze.is_wall(Cell::new(0, 1)));
    }

    #[test]
    fn test_out_of_bounds_counts_as_wall() {
        let maze = Maze::parse("AB").unwrap();
        assert!(maze.is_wall(Cell::new(5, 5)));
    }

    #[test]
    fn test_neighbors_follow_fixed_order() {
        // Open 3x3 with the probe in the middle.
        let maze = Maze::parse("A  \n   \n  B").unwrap();
        let neighbors = maze.neighbors(Cell::new(1, 1));
        assert_eq!(
            neighbors,
            vec![
                (Direction::Up, Cell::new(0, 1)),
                (Direction::Down, Cell::new(2, 1)),
                (Direction::Left, Cell::new(1, 0)),
                (Direction::Right, Cell::new(1, 2)),
            ]
        );
    }

    #[test]
    fn test_neighbors_skip_walls_and_edges() {
        let maze = Maze::parse("A#\n B").unwrap();
        // Start corner: up and left leave the grid, right is a wall.
        assert_eq!(
            maze.neighbors(maze.start()),
            vec![(Direction::Down, Cell::new(1, 0))]
        );
    }

    #[test]
    fn test_cell_serializes_as_pair() {
        let cell = Cell::new(2, 5);
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, "[2,5]");
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }
}
