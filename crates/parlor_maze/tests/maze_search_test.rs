//! End-to-end traversal properties over whole mazes.

use parlor_maze::{Cell, Maze, SearchError, Strategy, solve};
use std::io::Write;

/// A loop maze: the left edge is a 4-step shortcut to the goal, while the
/// top row leads depth-first search around a 12-step detour.
const LOOP_MAZE: &str = "A    \n ### \n     \n ####\nB    ";

/// Reachable pocket around the start; the goal sits behind a full wall.
const SEALED_MAZE: &str = "A #B\n  ##";

fn parse(text: &str) -> Maze {
    Maze::parse(text).unwrap()
}

#[test]
fn test_queue_finds_the_shortest_path() {
    let solution = solve(&parse(LOOP_MAZE), Strategy::Queue).unwrap();
    assert_eq!(solution.len(), 4);
}

#[test]
fn test_stack_takes_the_detour() {
    let solution = solve(&parse(LOOP_MAZE), Strategy::Stack).unwrap();
    // Expansion pushes `right` last, so the stack walks the top loop.
    assert_eq!(solution.len(), 12);
}

#[test]
fn test_queue_never_beats_stack_on_length() {
    for text in [LOOP_MAZE, "AB", "A B", "A  \n   \n  B"] {
        let maze = parse(text);
        let bfs = solve(&maze, Strategy::Queue).unwrap();
        let dfs = solve(&maze, Strategy::Stack).unwrap();
        assert!(bfs.len() <= dfs.len());
    }
}

#[test]
fn test_paths_start_adjacent_and_end_on_goal() {
    let maze = parse(LOOP_MAZE);
    for strategy in [Strategy::Stack, Strategy::Queue] {
        let solution = solve(&maze, strategy).unwrap();
        let cells = solution.cells();
        let first = cells.first().copied().unwrap();
        let manhattan = first.row.abs_diff(maze.start().row) + first.col.abs_diff(maze.start().col);
        assert_eq!(manhattan, 1);
        assert_eq!(cells.last().copied(), Some(maze.goal()));
        // Consecutive path cells are grid-adjacent too.
        for pair in cells.windows(2) {
            let step = pair[0].row.abs_diff(pair[1].row) + pair[0].col.abs_diff(pair[1].col);
            assert_eq!(step, 1);
        }
    }
}

#[test]
fn test_exploration_count_invariants() {
    let maze = parse(LOOP_MAZE);
    for strategy in [Strategy::Stack, Strategy::Queue] {
        let solution = solve(&maze, strategy).unwrap();
        assert_eq!(solution.states_explored(), solution.explored().len());
        assert!(solution.states_explored() >= solution.len() + 1);
        assert!(solution.explored().contains(&maze.start()));
        assert!(solution.explored().contains(&maze.goal()));
    }
}

#[test]
fn test_detour_explains_its_exploration_count() {
    // The stack walk removes the start, eleven detour cells, and the goal.
    let solution = solve(&parse(LOOP_MAZE), Strategy::Stack).unwrap();
    assert_eq!(solution.states_explored(), 13);
}

#[test]
fn test_solves_are_deterministic() {
    let maze = parse(LOOP_MAZE);
    for strategy in [Strategy::Stack, Strategy::Queue] {
        let first = solve(&maze, strategy).unwrap();
        let second = solve(&maze, strategy).unwrap();
        assert_eq!(first.steps(), second.steps());
        assert_eq!(first.states_explored(), second.states_explored());
    }
}

#[test]
fn test_sealed_goal_reports_no_solution() {
    for strategy in [Strategy::Stack, Strategy::Queue] {
        assert_eq!(
            solve(&parse(SEALED_MAZE), strategy).unwrap_err(),
            SearchError::NoSolution
        );
    }
}

#[test]
fn test_from_path_round_trips_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LOOP_MAZE.as_bytes()).unwrap();
    let maze = Maze::from_path(file.path()).unwrap();
    assert_eq!(maze.start(), Cell::new(0, 0));
    assert_eq!(maze.goal(), Cell::new(4, 0));
    assert_eq!(solve(&maze, Strategy::Queue).unwrap().len(), 4);
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Maze::from_path(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, parlor_maze::ParseError::Io(_)));
}
