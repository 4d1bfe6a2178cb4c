//! The traversal engine shared by both frontier disciplines.

use crate::frontier::{Frontier, NodeId, QueueFrontier, StackFrontier, Strategy};
use crate::grid::{Cell, Direction, Maze};
use derive_more::Display;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// One discovered state in the traversal tree.
///
/// Nodes live in an arena indexed by [`NodeId`]; `parent` points back into
/// the same arena, so lineage is an index chain rather than an owned
/// reference cycle.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    state: Cell,
    /// Parent id and the move that produced this state; `None` at the root.
    parent: Option<(NodeId, Direction)>,
}

/// Outcome of a successful solve.
#[derive(Debug, Clone)]
pub struct Solution {
    steps: Vec<(Direction, Cell)>,
    explored: HashSet<Cell>,
    states_explored: usize,
}

impl Solution {
    /// Moves from the start to the goal, in order. The first entry is the
    /// first step away from the start; the last lands on the goal.
    pub fn steps(&self) -> &[(Direction, Cell)] {
        &self.steps
    }

    /// Cells along the path, start excluded, goal included.
    pub fn cells(&self) -> Vec<Cell> {
        self.steps.iter().map(|(_, cell)| *cell).collect()
    }

    /// Every state removed from the frontier, goal included.
    pub fn explored(&self) -> &HashSet<Cell> {
        &self.explored
    }

    /// Total removals from the frontier; always equals `explored().len()`.
    pub fn states_explored(&self) -> usize {
        self.states_explored
    }

    /// Number of moves from start to goal.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True only for a zero-step path, which a parsed maze never produces.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Error raised when the search exhausts the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    /// Every reachable state was expanded without meeting the goal.
    #[display("no path from start to goal")]
    NoSolution,
}

impl std::error::Error for SearchError {}

/// Solves the maze under the given frontier discipline.
#[instrument(skip(maze), fields(height = maze.height(), width = maze.width()))]
pub fn solve(maze: &Maze, strategy: Strategy) -> Result<Solution, SearchError> {
    match strategy {
        Strategy::Stack => run(maze, StackFrontier::default()),
        Strategy::Queue => run(maze, QueueFrontier::default()),
    }
}

fn run<F: Frontier>(maze: &Maze, mut frontier: F) -> Result<Solution, SearchError> {
    let mut arena = vec![SearchNode {
        state: maze.start(),
        parent: None,
    }];
    let mut in_frontier = HashSet::from([maze.start()]);
    let mut explored: HashSet<Cell> = HashSet::new();
    let mut states_explored = 0;
    frontier.add(0);

    loop {
        let Some(id) = frontier.remove() else {
            debug!(states_explored, "frontier exhausted");
            return Err(SearchError::NoSolution);
        };
        let state = arena[id].state;
        in_frontier.remove(&state);
        // Every removal counts as explored, the goal removal included.
        states_explored += 1;
        explored.insert(state);

        if state == maze.goal() {
            let steps = backtrace(&arena, id);
            debug!(states_explored, steps = steps.len(), "goal reached");
            return Ok(Solution {
                steps,
                explored,
                states_explored,
            });
        }

        for (action, next) in maze.neighbors(state) {
            if in_frontier.contains(&next) || explored.contains(&next) {
                continue;
            }
            arena.push(SearchNode {
                state: next,
                parent: Some((id, action)),
            });
            in_frontier.insert(next);
            frontier.add(arena.len() - 1);
        }
    }
}

/// Walks parent links from the goal node back to the root, then reverses.
fn backtrace(arena: &[SearchNode], goal: NodeId) -> Vec<(Direction, Cell)> {
    let mut steps = Vec::new();
    let mut id = goal;
    while let Some((parent, action)) = arena[id].parent {
        steps.push((action, arena[id].state));
        id = parent;
    }
    steps.reverse();
    steps
}
