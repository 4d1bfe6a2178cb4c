//! Grid mazes and uninformed search over them.
//!
//! This crate parses character mazes, traverses them with a pluggable
//! frontier, and renders the result as text or as an RGBA bitmap.
//!
//! # Architecture
//!
//! - **Grid**: maze parsing, wall queries, neighbor expansion
//! - **Frontier**: removal-order disciplines (stack and queue)
//! - **Search**: one traversal engine shared by both disciplines
//! - **Render**: text and bitmap views of a maze and its solution
//!
//! # Example
//!
//! ```
//! use parlor_maze::{Maze, Strategy, solve};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let maze = Maze::parse("A  \n # \n  B")?;
//! let solution = solve(&maze, Strategy::Queue)?;
//! assert_eq!(solution.len(), 4);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod frontier;
mod grid;
pub mod render;
mod search;
mod text;

// Crate-level exports - frontier disciplines
pub use frontier::{Frontier, NodeId, QueueFrontier, StackFrontier, Strategy, UnknownStrategy};

// Crate-level exports - grid types
pub use grid::{Cell, Direction, Maze, ParseError};

// Crate-level exports - bitmap rendering
pub use render::{RenderOptions, render};

// Crate-level exports - the traversal engine
pub use search::{SearchError, Solution, solve};

// Callers encode bitmaps themselves; re-export the pixel buffer type.
pub use image::RgbaImage;
