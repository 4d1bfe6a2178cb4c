//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Serializes as a 3x3 array of `"X"`, `"O"`, or `null`, the shape the
/// move endpoints exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Player>; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[None; 3]; 3],
        }
    }

    /// Builds a board from a raw 3x3 grid.
    pub fn from_cells(cells: [[Option<Player>; 3]; 3]) -> Self {
        Self { cells }
    }

    /// The mark at (row, col), or `None` when empty or off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .flatten()
    }

    /// Checks if a cell is on the board and unoccupied.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(
            self.cells.get(row).and_then(|cells| cells.get(col)),
            Some(None)
        )
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Marks per player as `(x_count, o_count)`.
    pub fn counts(&self) -> (usize, usize) {
        let mut x_count = 0;
        let mut o_count = 0;
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(Player::X) => x_count += 1,
                    Some(Player::O) => o_count += 1,
                    None => {}
                }
            }
        }
        (x_count, o_count)
    }

    /// Returns all cells as a 3x3 grid.
    pub fn cells(&self) -> &[[Option<Player>; 3]; 3] {
        &self.cells
    }

    /// Places a mark without rule checks; `rules::apply` validates first.
    pub(crate) fn set(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = Some(player);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Formats the board as a three-line grid with `|` and `-+-+-` rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Some(player) => write!(f, "{player}")?,
                    None => write!(f, " ")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}
