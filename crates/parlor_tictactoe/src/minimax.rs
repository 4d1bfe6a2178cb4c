//! Exhaustive minimax over the full game tree.
//!
//! The tree is at most nine plies deep, so the engine walks all of it and
//! skips pruning entirely.

use crate::action::{Move, RulesError};
use crate::rules;
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Returns the optimal move for the player to move.
///
/// X maximizes the terminal score, O minimizes it. Ties break toward the
/// earliest action in row-major order: a candidate replaces the incumbent
/// only on a strict improvement. Terminal boards have no move, so they
/// yield `Ok(None)`.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Result<Option<Move>, RulesError> {
    if rules::terminal(board) {
        return Ok(None);
    }
    let (value, mv) = match rules::to_move(board)? {
        Player::X => max_value(board)?,
        Player::O => min_value(board)?,
    };
    debug!(value, ?mv, "minimax settled");
    Ok(mv)
}

/// Best achievable score for X from `board`, with the move that gets it.
fn max_value(board: &Board) -> Result<(i32, Option<Move>), RulesError> {
    if rules::terminal(board) {
        return Ok((rules::utility(board)?, None));
    }
    let mut value = i32::MIN;
    let mut best = None;
    for mv in rules::actions(board) {
        let (reply, _) = min_value(&rules::apply(board, mv)?)?;
        if reply > value {
            value = reply;
            best = Some(mv);
        }
    }
    Ok((value, best))
}

/// Best achievable score for O from `board`, with the move that gets it.
fn min_value(board: &Board) -> Result<(i32, Option<Move>), RulesError> {
    if rules::terminal(board) {
        return Ok((rules::utility(board)?, None));
    }
    let mut value = i32::MAX;
    let mut best = None;
    for mv in rules::actions(board) {
        let (reply, _) = max_value(&rules::apply(board, mv)?)?;
        if reply < value {
            value = reply;
            best = Some(mv);
        }
    }
    Ok((value, best))
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Player> = Some(Player::X);
    const O: Option<Player> = Some(Player::O);
    const E: Option<Player> = None;

    fn board(cells: [[Option<Player>; 3]; 3]) -> Board {
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_ties_to_the_first_corner() {
        // Every opening draws under optimal play, so row-major tie-break
        // settles on (0, 0).
        assert_eq!(best_move(&Board::new()), Ok(Some(Move::new(0, 0))));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = board([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(best_move(&won), Ok(None));
        let drawn = board([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(best_move(&drawn), Ok(None));
    }

    #[test]
    fn test_takes_the_winning_cell() {
        let x_about_to_win = board([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(best_move(&x_about_to_win), Ok(Some(Move::new(0, 2))));
    }

    #[test]
    fn test_blocks_the_opponent() {
        // X threatens (2, 0); O has no win of its own to prefer.
        let o_must_block = board([[X, E, E], [X, O, E], [E, E, E]]);
        assert_eq!(best_move(&o_must_block), Ok(Some(Move::new(2, 0))));
    }

    #[test]
    fn test_prefers_winning_over_blocking() {
        // O completes its row instead of blocking X's row-1 threat.
        let o_can_win = board([[O, O, E], [X, X, E], [X, E, E]]);
        assert_eq!(best_move(&o_can_win), Ok(Some(Move::new(0, 2))));
    }

    #[test]
    fn test_corrupt_board_propagates_the_error() {
        let corrupt = board([[X, X, E], [E, E, E], [E, E, E]]);
        assert_eq!(best_move(&corrupt), Err(RulesError::CorruptBoard(2, 0)));
    }
}
