//! Geometry primitives for the mazeflow crates: [`Point`] and [`Bounds`].

mod geom;

pub use geom::{Bounds, BoundsIter, Point};
