//! Frontier disciplines for the traversal engine.
//!
//! The engine owns discovery and goal testing; a frontier only decides
//! removal order. Stack removal yields depth-first traversal, queue
//! removal breadth-first.

use derive_more::Display;
use std::collections::VecDeque;
use std::str::FromStr;

/// Index of a search node in the traversal arena.
pub type NodeId = usize;

/// Removal-order contract for the search frontier.
///
/// Implementations hold discovered-but-unexpanded node ids. They must not
/// reorder, deduplicate, or drop entries: the engine relies on `remove`
/// handing back exactly the ids previously passed to `add`.
pub trait Frontier {
    /// Inserts a discovered node.
    fn add(&mut self, id: NodeId);
    /// Removes the next node under this discipline, or `None` when empty.
    fn remove(&mut self) -> Option<NodeId>;
}

/// LIFO frontier: removes the most recently added node.
#[derive(Debug, Default)]
pub struct StackFrontier(Vec<NodeId>);

impl Frontier for StackFrontier {
    fn add(&mut self, id: NodeId) {
        self.0.push(id);
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.0.pop()
    }
}

/// FIFO frontier: removes the earliest added node.
#[derive(Debug, Default)]
pub struct QueueFrontier(VecDeque<NodeId>);

impl Frontier for QueueFrontier {
    fn add(&mut self, id: NodeId) {
        self.0.push_back(id);
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }
}

/// Frontier discipline selector for a solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Strategy {
    /// LIFO frontier, i.e. depth-first search.
    #[display("stack")]
    Stack,
    /// FIFO frontier, i.e. breadth-first search.
    #[display("queue")]
    Queue,
}

/// Error raised when a strategy name is neither `stack` nor `queue`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("unknown strategy {:?}", _0)]
pub struct UnknownStrategy(String);

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stack" => Ok(Strategy::Stack),
            "queue" => Ok(Strategy::Queue),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_removes_last_in() {
        let mut frontier = StackFrontier::default();
        frontier.add(1);
        frontier.add(2);
        frontier.add(3);
        assert_eq!(frontier.remove(), Some(3));
        assert_eq!(frontier.remove(), Some(2));
        frontier.add(4);
        assert_eq!(frontier.remove(), Some(4));
        assert_eq!(frontier.remove(), Some(1));
        assert_eq!(frontier.remove(), None);
    }

    #[test]
    fn test_queue_removes_first_in() {
        let mut frontier = QueueFrontier::default();
        frontier.add(1);
        frontier.add(2);
        frontier.add(3);
        assert_eq!(frontier.remove(), Some(1));
        frontier.add(4);
        assert_eq!(frontier.remove(), Some(2));
        assert_eq!(frontier.remove(), Some(3));
        assert_eq!(frontier.remove(), Some(4));
        assert_eq!(frontier.remove(), None);
    }

    #[test]
    fn test_strategy_parses_from_wire_names() {
        assert_eq!("stack".parse::<Strategy>().unwrap(), Strategy::Stack);
        assert_eq!("queue".parse::<Strategy>().unwrap(), Strategy::Queue);
        assert!("dijkstra".parse::<Strategy>().is_err());
        // Names are case-sensitive.
        assert!("Stack".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_strategy_displays_its_wire_name() {
        assert_eq!(Strategy::Stack.to_string(), "stack");
        assert_eq!(Strategy::Queue.to_string(), "queue");
    }
}
