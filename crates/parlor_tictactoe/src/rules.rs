//! Game rules as pure functions over board snapshots.
//!
//! Nothing here mutates a board in place: `apply` hands back a fresh copy,
//! so search can branch from any position without bookkeeping.

use crate::action::{Move, RulesError};
use crate::types::{Board, GameStatus, Player};

/// Winning lines: rows, then columns, then diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the player who moves next.
///
/// X goes first, so the counts are equal when X is to move and X leads by
/// one when O is; any other count cannot arise from alternating play.
pub fn to_move(board: &Board) -> Result<Player, RulesError> {
    let (x_count, o_count) = board.counts();
    if x_count == o_count {
        Ok(Player::X)
    } else if x_count == o_count + 1 {
        Ok(Player::O)
    } else {
        Err(RulesError::CorruptBoard(x_count, o_count))
    }
}

/// Returns the empty cells in row-major order.
///
/// The order fixes minimax tie-breaks, so it is part of the contract.
pub fn actions(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..3 {
        for col in 0..3 {
            if board.is_empty(row, col) {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves
}

/// Returns the board that results from the next player taking `mv`.
///
/// The input board is left untouched.
pub fn apply(board: &Board, mv: Move) -> Result<Board, RulesError> {
    if mv.row >= 3 || mv.col >= 3 {
        return Err(RulesError::OutOfBounds(mv));
    }
    if !board.is_empty(mv.row, mv.col) {
        return Err(RulesError::SquareOccupied(mv));
    }
    let player = to_move(board)?;
    let mut next = *board;
    next.set(mv.row, mv.col, player);
    Ok(next)
}

/// Returns the winning mark, if any line of three is complete.
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let mark = board.get(a.0, a.1);
        if mark.is_some() && mark == board.get(b.0, b.1) && mark == board.get(c.0, c.1) {
            return mark;
        }
    }
    None
}

/// Checks if the game is over: someone won or the board is full.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Terminal score from X's point of view: +1 X won, -1 O won, 0 draw.
///
/// Only terminal boards have a score.
pub fn utility(board: &Board) -> Result<i32, RulesError> {
    if !terminal(board) {
        return Err(RulesError::GameNotOver);
    }
    Ok(match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    })
}

/// Summarizes a board as in progress, won, or drawn.
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
