//! Tic-tac-toe routes: new games, player moves, and the engine opponent.

use crate::error::ApiError;
use axum::Json;
use parlor_tictactoe::{Board, Move, Player, best_move, rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Body of `GET /ttt/start`.
#[derive(Debug, Serialize)]
pub struct StartResponse {
    /// An empty board.
    pub board: Board,
}

/// Body of `POST /ttt/move`.
///
/// Both fields are optional so an incomplete request gets the stable
/// "missing" message instead of a generic decode failure.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    /// Board before the move.
    pub board: Option<Board>,
    /// Move as `[row, col]`.
    #[serde(rename = "move")]
    pub mv: Option<Move>,
}

/// Game state as the move endpoints report it.
#[derive(Debug, Serialize)]
pub struct GameReport {
    /// Board after the move.
    pub board: Board,
    /// Player to move next, `null` once the game is over.
    pub next_player: Option<Player>,
    /// Winning mark, if any.
    pub winner: Option<Player>,
    /// Whether the game is over.
    pub game_over: bool,
}

impl GameReport {
    fn of(board: Board) -> Result<Self, ApiError> {
        let game_over = rules::terminal(&board);
        let next_player = if game_over {
            None
        } else {
            Some(rules::to_move(&board)?)
        };
        Ok(Self {
            board,
            next_player,
            winner: rules::winner(&board),
            game_over,
        })
    }
}

/// Body of `POST /ttt/ai`.
#[derive(Debug, Deserialize)]
pub struct AiRequest {
    /// Board the engine moves on.
    pub board: Option<Board>,
}

/// Body of a successful `POST /ttt/ai`.
#[derive(Debug, Serialize)]
pub struct AiResponse {
    /// Move the engine chose, `null` when the board was already over.
    #[serde(rename = "move")]
    pub mv: Option<Move>,
    /// Game state after the engine move.
    #[serde(flatten)]
    pub report: GameReport,
}

/// `GET /ttt/start`: a fresh game.
#[instrument]
pub async fn start() -> Json<StartResponse> {
    Json(StartResponse {
        board: Board::new(),
    })
}

/// `POST /ttt/move`: applies one player move and reports the result.
#[instrument(skip_all)]
pub async fn make_move(Json(req): Json<MoveRequest>) -> Result<Json<GameReport>, ApiError> {
    let (Some(board), Some(mv)) = (req.board, req.mv) else {
        return Err(ApiError::MissingBoardOrMove);
    };
    let next = rules::apply(&board, mv)?;
    Ok(Json(GameReport::of(next)?))
}

/// `POST /ttt/ai`: the minimax engine moves for whichever side is up.
#[instrument(skip_all)]
pub async fn ai_move(Json(req): Json<AiRequest>) -> Result<Json<AiResponse>, ApiError> {
    let Some(board) = req.board else {
        return Err(ApiError::MissingBoardOrMove);
    };
    let mv = best_move(&board)?;
    let after = match mv {
        Some(mv) => rules::apply(&board, mv)?,
        None => board,
    };
    Ok(Json(AiResponse {
        mv,
        report: GameReport::of(after)?,
    }))
}
