//! Maze routes: bitmap preview, solving, and listing.

use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use parlor_maze::{Cell, Maze, ParseError, RenderOptions, Strategy, render, solve};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};

/// Body of `POST /solve`.
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    /// Maze file name inside the configured maze directory.
    pub maze: String,
    /// `stack` for depth-first, `queue` for breadth-first.
    pub algorithm: String,
}

/// Body of a successful `POST /solve`.
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    /// Nodes removed from the frontier during the search.
    pub states_explored: usize,
    /// Text rendering with the solution marked.
    pub text: String,
    /// Path cells in order, start excluded, goal included.
    pub solution: Vec<Cell>,
    /// URL of the rendered PNG under `/static`.
    pub image: String,
}

/// Body of `GET /mazes`.
#[derive(Debug, Serialize)]
pub struct MazeListing {
    /// Maze file names, sorted.
    pub mazes: Vec<String>,
}

/// Resolves a client-supplied maze name inside the maze directory.
///
/// Separators and parent components are rejected outright, so names can
/// never escape the directory.
fn maze_file_path(state: &AppState, name: &str) -> Result<PathBuf, ApiError> {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return Err(ApiError::InvalidMazeName);
    }
    Ok(state.config.mazes_dir.join(name))
}

/// Loads a maze file, mapping a missing file to the 404 error.
fn load_maze(path: &std::path::Path) -> Result<Maze, ApiError> {
    Maze::from_path(path).map_err(|e| match e {
        ParseError::Io(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
            ApiError::MazeNotFound
        }
        other => ApiError::Maze(other),
    })
}

fn internal(e: impl std::fmt::Display) -> ApiError {
    ApiError::Internal(e.to_string())
}

/// `GET /maze-image/{maze}`: the unsolved maze as PNG bytes.
#[instrument(skip_all, fields(maze = %maze))]
pub async fn maze_image(
    State(state): State<Arc<AppState>>,
    Path(maze): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !maze.ends_with(".txt") {
        return Err(ApiError::InvalidMazeName);
    }
    let path = maze_file_path(&state, &maze)?;

    let png = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, ApiError> {
        let maze = load_maze(&path)?;
        let image = render(
            &maze,
            None,
            RenderOptions {
                show_solution: false,
                show_explored: false,
            },
        );
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, image::ImageFormat::Png)
            .map_err(internal)?;
        Ok(buffer.into_inner())
    })
    .await
    .map_err(internal)??;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

/// `POST /solve`: runs the requested discipline over a maze file and
/// writes the rendered outcome under the static directory.
#[instrument(skip_all, fields(maze = %req.maze, algorithm = %req.algorithm))]
pub async fn solve_maze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let strategy: Strategy = req
        .algorithm
        .parse()
        .map_err(|_| ApiError::UnknownAlgorithm)?;
    let path = maze_file_path(&state, &req.maze)?;

    // Sequence number keeps concurrent solves from sharing an output file.
    let stem = req.maze.trim_end_matches(".txt").to_string();
    let image_name = format!("{}_{}_{}.png", stem, strategy, state.next_render_seq());
    let static_dir = state.config.static_dir.clone();

    let response = tokio::task::spawn_blocking(move || -> Result<SolveResponse, ApiError> {
        let maze = load_maze(&path)?;
        let solution = solve(&maze, strategy)?;
        let image = render(
            &maze,
            Some(&solution),
            RenderOptions {
                show_solution: true,
                show_explored: true,
            },
        );
        std::fs::create_dir_all(&static_dir).map_err(internal)?;
        let output = static_dir.join(&image_name);
        image.save(&output).map_err(internal)?;
        info!(
            output = %output.display(),
            states_explored = solution.states_explored(),
            steps = solution.len(),
            "maze solved"
        );
        Ok(SolveResponse {
            states_explored: solution.states_explored(),
            text: maze.render_text(Some(&solution)),
            solution: solution.cells(),
            image: format!("/static/{}", image_name),
        })
    })
    .await
    .map_err(internal)??;

    Ok(Json(response))
}

/// `GET /mazes`: names of the maze files available to solve.
#[instrument(skip_all)]
pub async fn list_mazes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MazeListing>, ApiError> {
    let dir = state.config.mazes_dir.clone();
    let mut mazes = tokio::task::spawn_blocking(move || -> Result<Vec<String>, ApiError> {
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            // An absent directory just means nothing to list yet.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(internal(e)),
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(internal)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".txt") {
                names.push(name);
            }
        }
        Ok(names)
    })
    .await
    .map_err(internal)??;

    mazes.sort();
    Ok(Json(MazeListing { mazes }))
}
