//! Pure tic-tac-toe rules with an exhaustive minimax engine.
//!
//! Boards are small immutable values, the rules are free functions over
//! them, and the engine searches the whole game tree. Nothing here does
//! I/O, so the crate drops into servers and tests alike.
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{Board, Move, best_move, rules};
//!
//! # fn example() -> Result<(), parlor_tictactoe::RulesError> {
//! let board = rules::apply(&Board::new(), Move::new(1, 1))?;
//! assert_eq!(rules::to_move(&board)?, parlor_tictactoe::Player::O);
//! assert!(best_move(&board)?.is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod minimax;
pub mod rules;
mod types;

// Crate-level exports - moves and rule errors
pub use action::{Move, RulesError};

// Crate-level exports - the engine
pub use minimax::best_move;

// Crate-level exports - domain types
pub use types::{Board, GameStatus, Player};
