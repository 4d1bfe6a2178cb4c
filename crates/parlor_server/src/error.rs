//! Error type shared by the HTTP handlers.
//!
//! Every failure leaves the server as `{"error": message}` with a status
//! matched to the failure class. The messages are part of the API surface
//! and stay stable; clients match on them.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::Display;
use parlor_maze::{ParseError, SearchError};
use parlor_tictactoe::RulesError;
use serde_json::json;
use tracing::warn;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Display)]
pub enum ApiError {
    /// The maze name failed validation before touching the filesystem.
    #[display("Invalid maze file")]
    InvalidMazeName,
    /// No maze file with the requested name.
    #[display("Maze file not found.")]
    MazeNotFound,
    /// The algorithm was neither `stack` nor `queue`.
    #[display("Unknown algorithm.")]
    UnknownAlgorithm,
    /// The move request left out a required field.
    #[display("Missing board or move.")]
    MissingBoardOrMove,
    /// The maze file exists but its content cannot be used.
    #[display("{}", _0)]
    Maze(ParseError),
    /// The maze has no path from start to goal.
    #[display("{}", _0)]
    Search(SearchError),
    /// The board or move breaks the game rules.
    #[display("{}", _0)]
    Rules(RulesError),
    /// A server-side failure: I/O, encoding, or task scheduling.
    #[display("{}", _0)]
    Internal(String),
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Maze(e) => Some(e),
            ApiError::Search(e) => Some(e),
            ApiError::Rules(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for ApiError {
    fn from(e: ParseError) -> Self {
        ApiError::Maze(e)
    }
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        ApiError::Search(e)
    }
}

impl From<RulesError> for ApiError {
    fn from(e: RulesError) -> Self {
        ApiError::Rules(e)
    }
}

impl ApiError {
    /// HTTP status matching the failure.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidMazeName
            | ApiError::UnknownAlgorithm
            | ApiError::MissingBoardOrMove
            | ApiError::Rules(_) => StatusCode::BAD_REQUEST,
            ApiError::MazeNotFound => StatusCode::NOT_FOUND,
            // File read failures past the existence check are server-side.
            ApiError::Maze(ParseError::Io(_)) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            // Well-formed request, unusable maze content.
            ApiError::Maze(_) | ApiError::Search(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "request failed server-side");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
