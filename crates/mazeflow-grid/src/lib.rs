//! Incremental shortest-path maintenance over a mutable tile grid.
//!
//! A [`Grid`] owns a dense rectangle of tiles with designated Entry and Exit
//! positions and maintains, for every tile, the cheapest route to the Exit:
//!
//! - [`Grid::recompute_all`] builds the full path tree with a Dijkstra-style
//!   relaxation pass rooted at the Exit.
//! - [`Grid::set_wall`] blocks a single tile and repairs the tree
//!   incrementally, cascading invalidation through the tiles whose route
//!   passed through it instead of recomputing the whole grid.
//! - [`Grid::randomize_walls`] generates solvable maze layouts by rejection
//!   sampling.
//! - [`Grid::path_from`] materializes the tile sequence from any origin to
//!   the Exit as a [`Path`].
//!
//! [`Agent`] is a small discrete walker that follows the maintained tree one
//! tile per step.
//!
//! All distances are measured *to* the Exit, so one relaxation pass serves
//! every possible path origin at once. Walls are not removed from the graph;
//! their traversal weight is the [`UNREACHABLE`] sentinel, which prices them
//! out of any real route.

mod agent;
mod error;
mod grid;
mod mazegen;
mod path;
mod relax;
mod tile;

pub use agent::{Agent, AgentStep};
pub use error::GridError;
pub use grid::Grid;
pub use mazegen::MAX_GENERATION_ATTEMPTS;
pub use path::Path;
pub use tile::{Tile, TileKind, UNREACHABLE};
