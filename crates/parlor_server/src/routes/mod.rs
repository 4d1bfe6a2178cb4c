//! HTTP route handlers.

pub mod maze;
pub mod tictactoe;
