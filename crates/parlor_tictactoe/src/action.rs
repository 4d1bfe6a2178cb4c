//! Moves and rule errors.

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A move: placing the next player's mark at (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Move {
    /// Creates a move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// Wire form is a two-element `[row, col]` array.
impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.row, self.col).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (row, col) = <(usize, usize)>::deserialize(deserializer)?;
        Ok(Self { row, col })
    }
}

/// Errors raised by the rule functions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RulesError {
    /// The target cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    SquareOccupied(Move),
    /// The target cell lies outside the 3x3 board.
    #[display("cell {} is outside the board", _0)]
    OutOfBounds(Move),
    /// The mark counts cannot arise from alternating play.
    #[display("unreachable position with {} X marks and {} O marks", _0, _1)]
    CorruptBoard(usize, usize),
    /// A terminal-only query ran on a live game.
    #[display("game is not over")]
    GameNotOver,
}

impl std::error::Error for RulesError {}
