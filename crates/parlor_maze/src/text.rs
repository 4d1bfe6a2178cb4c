//! Character rendering of a maze and its solution.

use crate::grid::{Cell, Maze};
use crate::search::Solution;
use std::collections::HashSet;

impl Maze {
    /// Renders the grid as text, one line per row.
    ///
    /// `█` is a wall, `A` the start, `B` the goal, `*` a cell on the
    /// solution path, and a space any other open cell. The goal keeps its
    /// `B` even though the path ends on it.
    pub fn render_text(&self, solution: Option<&Solution>) -> String {
        let on_path: HashSet<Cell> = solution
            .map(|solution| solution.cells().into_iter().collect())
            .unwrap_or_default();

        let mut lines = Vec::with_capacity(self.height());
        for row in 0..self.height() {
            let mut line = String::new();
            for col in 0..self.width() {
                let cell = Cell::new(row, col);
                line.push(if self.is_wall(cell) {
                    '█'
                } else if cell == self.start() {
                    'A'
                } else if cell == self.goal() {
                    'B'
                } else if on_path.contains(&cell) {
                    '*'
                } else {
                    ' '
                });
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::{Maze, Strategy, solve};

    #[test]
    fn test_unsolved_maze_renders_walls_and_markers() {
        let maze = Maze::parse("#A#\n# #\n#B#").unwrap();
        assert_eq!(maze.render_text(None), "█A█\n█ █\n█B█");
    }

    #[test]
    fn test_solution_cells_render_as_stars() {
        let maze = Maze::parse("A  B").unwrap();
        let solution = solve(&maze, Strategy::Queue).unwrap();
        assert_eq!(maze.render_text(Some(&solution)), "A**B");
    }

    #[test]
    fn test_short_lines_render_as_wall_padding() {
        let maze = Maze::parse("A\n B").unwrap();
        assert_eq!(maze.render_text(None), "A█\n B");
    }
}
