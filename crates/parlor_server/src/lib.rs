//! HTTP facade over the puzzle engines.
//!
//! The server exposes two small games behind a JSON API: grid-maze
//! search rendered to PNG, and tic-tac-toe against an exhaustive minimax
//! opponent.
//!
//! # Routes
//!
//! - `GET /maze-image/{maze}`: unsolved maze as a PNG
//! - `POST /solve`: run `stack` or `queue` search over a maze file
//! - `GET /mazes`: list the maze files available
//! - `GET /static/{file}`: rendered solve outputs
//! - `GET /ttt/start`: a fresh tic-tac-toe board
//! - `POST /ttt/move`: apply a player move
//! - `POST /ttt/ai`: let the engine move for the side to play

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod routes;
mod state;

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Crate-level exports - configuration
pub use config::{Cli, ConfigError, ServerConfig};

// Crate-level exports - HTTP error surface
pub use error::ApiError;

// Crate-level exports - shared state
pub use state::AppState;

/// Builds the application router over shared state.
///
/// The browser frontend is served from another origin, so CORS stays
/// permissive.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/maze-image/{maze}", get(routes::maze::maze_image))
        .route("/solve", post(routes::maze::solve_maze))
        .route("/mazes", get(routes::maze::list_mazes))
        .route("/ttt/start", get(routes::tictactoe::start))
        .route("/ttt/move", post(routes::tictactoe::make_move))
        .route("/ttt/ai", post(routes::tictactoe::ai_move))
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
