//! Bitmap rendering of a maze and its exploration trace.
//!
//! Geometry and palette are a compatibility contract with existing
//! frontends, so the constants here are pinned by tests.

use crate::grid::{Cell, Maze};
use crate::search::Solution;
use image::{Rgba, RgbaImage};
use std::collections::HashSet;
use tracing::instrument;

/// Edge length of one grid cell, in pixels.
pub const CELL_SIZE: u32 = 50;
/// Gap around each cell fill, showing the background through.
pub const CELL_BORDER: u32 = 2;

/// Wall fill.
pub const WALL: Rgba<u8> = Rgba([40, 40, 40, 255]);
/// Start cell fill.
pub const START: Rgba<u8> = Rgba([255, 0, 0, 255]);
/// Goal cell fill.
pub const GOAL: Rgba<u8> = Rgba([0, 171, 28, 255]);
/// Fill for cells on the solution path.
pub const SOLUTION: Rgba<u8> = Rgba([220, 235, 113, 255]);
/// Fill for explored cells off the solution path.
pub const EXPLORED: Rgba<u8> = Rgba([212, 97, 85, 255]);
/// Plain open cell fill.
pub const OPEN: Rgba<u8> = Rgba([237, 240, 252, 255]);

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Which overlays to paint on top of the base grid.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Paint the solution path.
    pub show_solution: bool,
    /// Paint explored states.
    pub show_explored: bool,
}

impl Default for RenderOptions {
    /// Solution on, exploration off.
    fn default() -> Self {
        Self {
            show_solution: true,
            show_explored: false,
        }
    }
}

/// Renders the maze to an RGBA bitmap.
///
/// Each grid cell becomes a [`CELL_SIZE`] square with a [`CELL_BORDER`]
/// background gap on every side. Cell kinds take precedence in order:
/// wall, start, goal, solution path, explored, open. Overlays apply only
/// when a solution is given and the matching option is set; rendering an
/// unsolved maze paints walls, markers, and open floor alone.
///
/// Encoding the bitmap (and writing it anywhere) is the caller's business.
#[instrument(skip(maze, solution), fields(height = maze.height(), width = maze.width()))]
pub fn render(maze: &Maze, solution: Option<&Solution>, options: RenderOptions) -> RgbaImage {
    let (on_path, explored): (HashSet<Cell>, HashSet<Cell>) = match solution {
        Some(solution) => (
            solution.cells().into_iter().collect(),
            solution.explored().clone(),
        ),
        None => (HashSet::new(), HashSet::new()),
    };

    let mut image = RgbaImage::from_pixel(
        maze.width() as u32 * CELL_SIZE,
        maze.height() as u32 * CELL_SIZE,
        BACKGROUND,
    );

    for row in 0..maze.height() {
        for col in 0..maze.width() {
            let cell = Cell::new(row, col);
            let fill = if maze.is_wall(cell) {
                WALL
            } else if cell == maze.start() {
                START
            } else if cell == maze.goal() {
                GOAL
            } else if options.show_solution && on_path.contains(&cell) {
                SOLUTION
            } else if options.show_explored && explored.contains(&cell) {
                EXPLORED
            } else {
                OPEN
            };
            fill_cell(&mut image, row as u32, col as u32, fill);
        }
    }
    image
}

/// Fills one cell square, leaving the border gap on all sides.
///
/// Pixel ranges are inclusive on both ends; the fill covers both corner
/// pixels, which the palette tests probe directly.
fn fill_cell(image: &mut RgbaImage, row: u32, col: u32, fill: Rgba<u8>) {
    let x0 = col * CELL_SIZE + CELL_BORDER;
    let y0 = row * CELL_SIZE + CELL_BORDER;
    let x1 = (col + 1) * CELL_SIZE - CELL_BORDER;
    let y1 = (row + 1) * CELL_SIZE - CELL_BORDER;
    for y in y0..=y1 {
        for x in x0..=x1 {
            image.put_pixel(x, y, fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Strategy, solve};

    /// Center pixel of a cell, safely inside the border gap.
    fn center(row: u32, col: u32) -> (u32, u32) {
        (
            col * CELL_SIZE + CELL_SIZE / 2,
            row * CELL_SIZE + CELL_SIZE / 2,
        )
    }

    #[test]
    fn test_image_dimensions_scale_with_the_grid() {
        let maze = Maze::parse("A  B").unwrap();
        let image = render(&maze, None, RenderOptions::default());
        assert_eq!(image.width(), 4 * CELL_SIZE);
        assert_eq!(image.height(), CELL_SIZE);
    }

    #[test]
    fn test_unsolved_render_paints_markers_walls_and_floor() {
        let maze = Maze::parse("A# B").unwrap();
        let image = render(&maze, None, RenderOptions::default());
        let probe = |row, col| {
            let (x, y) = center(row, col);
            *image.get_pixel(x, y)
        };
        assert_eq!(probe(0, 0), START);
        assert_eq!(probe(0, 1), WALL);
        assert_eq!(probe(0, 2), OPEN);
        assert_eq!(probe(0, 3), GOAL);
    }

    #[test]
    fn test_border_gap_shows_the_background() {
        let maze = Maze::parse("AB").unwrap();
        let image = render(&maze, None, RenderOptions::default());
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
        // First pixel inside the inclusive fill range.
        assert_eq!(*image.get_pixel(CELL_BORDER, CELL_BORDER), START);
        // Far corner of the first cell, still inside the inclusive range.
        assert_eq!(
            *image.get_pixel(CELL_SIZE - CELL_BORDER, CELL_SIZE - CELL_BORDER),
            START
        );
        assert_eq!(
            *image.get_pixel(CELL_SIZE - CELL_BORDER + 1, CELL_BORDER),
            BACKGROUND
        );
    }

    #[test]
    fn test_solution_overlay_marks_the_path() {
        let maze = Maze::parse("A B").unwrap();
        let solution = solve(&maze, Strategy::Queue).unwrap();
        let image = render(&maze, Some(&solution), RenderOptions::default());
        let (x, y) = center(0, 1);
        assert_eq!(*image.get_pixel(x, y), SOLUTION);
    }

    #[test]
    fn test_explored_overlay_marks_visited_dead_ends() {
        // A breadth-first sweep of an open room explores off the path.
        let maze = Maze::parse("A  \n   \n  B").unwrap();
        let solution = solve(&maze, Strategy::Queue).unwrap();
        let image = render(
            &maze,
            Some(&solution),
            RenderOptions {
                show_solution: true,
                show_explored: true,
            },
        );
        let on_path: std::collections::HashSet<_> =
            solution.cells().into_iter().collect();
        let mut explored_seen = 0;
        for &cell in solution.explored() {
            if cell == maze.start() || cell == maze.goal() || on_path.contains(&cell) {
                continue;
            }
            let (x, y) = center(cell.row as u32, cell.col as u32);
            assert_eq!(*image.get_pixel(x, y), EXPLORED);
            explored_seen += 1;
        }
        assert!(explored_seen > 0, "fixture must leave explored dead ends");
    }

    #[test]
    fn test_overlays_require_their_options() {
        let maze = Maze::parse("A B").unwrap();
        let solution = solve(&maze, Strategy::Queue).unwrap();
        let image = render(
            &maze,
            Some(&solution),
            RenderOptions {
                show_solution: false,
                show_explored: false,
            },
        );
        let (x, y) = center(0, 1);
        assert_eq!(*image.get_pixel(x, y), OPEN);
    }
}
