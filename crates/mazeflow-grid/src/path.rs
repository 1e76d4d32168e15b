//! Materialized tile sequences from an origin to the Exit.

use mazeflow_core::Point;

use crate::error::GridError;
use crate::grid::Grid;
use crate::tile::TileKind;

/// An ordered tile sequence from an origin toward the Exit.
///
/// Derived from the path tree on demand; never authoritative state. A path
/// always holds at least its origin. When the origin is unreachable the
/// sequence stops early and [`is_complete`](Path::is_complete) is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<Point>,
    complete: bool,
}

impl Path {
    /// The tile the path starts from.
    #[inline]
    pub fn origin(&self) -> Point {
        self.points[0]
    }

    /// The full tile sequence, origin first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of tiles in the sequence, origin and terminus included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A path always contains at least its origin.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the sequence terminates at the Exit.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether the sequence traverses `p`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Iterate over the tiles in walking order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

impl Grid {
    /// Materialize the path from `p` to the Exit by following successor
    /// links.
    ///
    /// The result includes both `p` and the Exit. If `p` is unrouted the
    /// path holds only `p` and reports itself incomplete. The successor
    /// chain is acyclic by construction (successors have strictly smaller
    /// distances), so the walk always terminates; a chain longer than the
    /// grid indicates a broken tree and fails fast in debug builds.
    pub fn path_from(&self, p: Point) -> Result<Path, GridError> {
        let mut i = self.index_of(p)?;
        let mut points = Vec::new();
        loop {
            points.push(self.point(i));
            if points.len() > self.tiles.len() {
                debug_assert!(false, "successor chain longer than the grid");
                break;
            }
            match self.tiles[i].next {
                Some(n) => i = n,
                None => break,
            }
        }
        let complete = self.tiles[i].kind == TileKind::Exit;
        Ok(Path { points, complete })
    }

    /// Record `p` as the display origin and eagerly materialize its path.
    ///
    /// The stored path is kept current by [`set_wall`](Grid::set_wall) and
    /// [`recompute_all`](Grid::recompute_all).
    pub fn set_path_origin(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.index_of(p)?;
        self.origin = Some(i);
        self.current_path = Some(self.path_from(p)?);
        Ok(())
    }

    /// The display origin, if one was set.
    pub fn path_origin(&self) -> Option<Point> {
        self.origin.map(|i| self.point(i))
    }

    /// The eagerly maintained path from the display origin.
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_ref()
    }

    /// Re-derive the stored path after the tree changed. The origin index
    /// is always in bounds once set, so this cannot fail.
    pub(crate) fn refresh_path(&mut self) {
        if let Some(o) = self.origin {
            let p = self.point(o);
            if let Ok(path) = self.path_from(p) {
                self.current_path = Some(path);
            }
        }
    }
}
