//! The grid: tile storage, entry/exit bookkeeping, and coordinate access.

use mazeflow_core::{Bounds, Point};

use crate::error::GridError;
use crate::path::Path;
use crate::tile::{Tile, TileKind};

/// A fixed-size rectangle of tiles with at most one Entry and one Exit.
///
/// The grid owns every tile for its whole life; only tile kinds and
/// pathfinding state mutate. All mutating operations take `&mut self`, so
/// the borrow checker serializes mutators.
///
/// After changing the Entry or Exit position, the path tree is stale until
/// the next [`recompute_all`](Grid::recompute_all).
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) entry: Option<usize>,
    pub(crate) exit: Option<usize>,
    pub(crate) origin: Option<usize>,
    pub(crate) current_path: Option<Path>,
}

impl Grid {
    /// Create a grid of the given dimensions with every tile Free.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            tiles: (0..len).map(|_| Tile::new(TileKind::Free)).collect(),
            entry: None,
            exit: None,
            origin: None,
            current_path: None,
        }
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + p.x as usize)
    }

    /// Convert a `Point` to a flat index, reporting out-of-bounds coordinates.
    #[inline]
    pub(crate) fn index_of(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds { pos: p })
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    // -----------------------------------------------------------------------
    // Tile access
    // -----------------------------------------------------------------------

    /// The tile at `p`.
    pub fn tile(&self, p: Point) -> Result<&Tile, GridError> {
        Ok(&self.tiles[self.index_of(p)?])
    }

    /// The kind of the tile at `p`.
    pub fn kind(&self, p: Point) -> Result<TileKind, GridError> {
        Ok(self.tiles[self.index_of(p)?].kind)
    }

    /// Cheapest known cost from `p` to the Exit, or
    /// [`UNREACHABLE`](crate::UNREACHABLE).
    pub fn distance(&self, p: Point) -> Result<i32, GridError> {
        Ok(self.tiles[self.index_of(p)?].distance)
    }

    /// The next tile on the route from `p` toward the Exit, or `None` if
    /// `p` is unrouted or is the Exit itself.
    pub fn successor(&self, p: Point) -> Result<Option<Point>, GridError> {
        let i = self.index_of(p)?;
        Ok(self.tiles[i].next.map(|n| self.point(n)))
    }

    /// The in-bounds cardinal neighbours of `p` (up to four).
    pub fn neighbors(&self, p: Point) -> Result<Vec<Point>, GridError> {
        self.index_of(p)?;
        let bounds = self.bounds();
        Ok(p.cardinals()
            .into_iter()
            .filter(|&n| bounds.contains(n))
            .collect())
    }

    // -----------------------------------------------------------------------
    // Entry / Exit
    // -----------------------------------------------------------------------

    /// The Entry position, if one is set.
    pub fn entry(&self) -> Option<Point> {
        self.entry.map(|i| self.point(i))
    }

    /// The Exit position, if one is set.
    pub fn exit(&self) -> Option<Point> {
        self.exit.map(|i| self.point(i))
    }

    /// Make `p` the Entry, demoting any previous Entry to Free.
    pub fn set_entry(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.index_of(p)?;
        if let Some(old) = self.entry.replace(i) {
            if old != i {
                self.tiles[old].kind = TileKind::Free;
            }
        }
        if self.exit == Some(i) {
            self.exit = None;
        }
        self.tiles[i].kind = TileKind::Entry;
        Ok(())
    }

    /// Make `p` the Exit, demoting any previous Exit to Free.
    pub fn set_exit(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.index_of(p)?;
        if let Some(old) = self.exit.replace(i) {
            if old != i {
                self.tiles[old].kind = TileKind::Free;
            }
        }
        if self.entry == Some(i) {
            self.entry = None;
        }
        self.tiles[i].kind = TileKind::Exit;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_free() {
        let g = Grid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        for p in g.bounds().iter() {
            assert_eq!(g.kind(p).unwrap(), TileKind::Free);
        }
        assert_eq!(g.entry(), None);
        assert_eq!(g.exit(), None);
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be positive")]
    fn zero_width_panics() {
        let _ = Grid::new(0, 5);
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let g = Grid::new(3, 3);
        let p = Point::new(3, 0);
        assert_eq!(g.kind(p), Err(GridError::OutOfBounds { pos: p }));
        let q = Point::new(0, -1);
        assert_eq!(g.distance(q), Err(GridError::OutOfBounds { pos: q }));
    }

    #[test]
    fn entry_and_exit_round_trip() {
        let mut g = Grid::new(5, 5);
        g.set_entry(Point::new(0, 0)).unwrap();
        g.set_exit(Point::new(4, 4)).unwrap();
        assert_eq!(g.entry(), Some(Point::new(0, 0)));
        assert_eq!(g.exit(), Some(Point::new(4, 4)));
        assert_eq!(g.kind(Point::new(0, 0)).unwrap(), TileKind::Entry);
        assert_eq!(g.kind(Point::new(4, 4)).unwrap(), TileKind::Exit);
    }

    #[test]
    fn moving_entry_demotes_previous_holder() {
        let mut g = Grid::new(5, 5);
        g.set_entry(Point::new(0, 0)).unwrap();
        g.set_entry(Point::new(2, 2)).unwrap();
        assert_eq!(g.kind(Point::new(0, 0)).unwrap(), TileKind::Free);
        assert_eq!(g.entry(), Some(Point::new(2, 2)));
    }

    #[test]
    fn entry_over_exit_vacates_exit_slot() {
        let mut g = Grid::new(5, 5);
        g.set_exit(Point::new(1, 1)).unwrap();
        g.set_entry(Point::new(1, 1)).unwrap();
        assert_eq!(g.exit(), None);
        assert_eq!(g.entry(), Some(Point::new(1, 1)));
        assert_eq!(g.kind(Point::new(1, 1)).unwrap(), TileKind::Entry);
    }

    #[test]
    fn neighbors_are_clipped_at_edges() {
        let g = Grid::new(3, 3);
        let corner = g.neighbors(Point::new(0, 0)).unwrap();
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&Point::new(1, 0)));
        assert!(corner.contains(&Point::new(0, 1)));
        let center = g.neighbors(Point::new(1, 1)).unwrap();
        assert_eq!(center.len(), 4);
        assert!(g.neighbors(Point::new(5, 5)).is_err());
    }

    #[test]
    fn point_index_round_trip() {
        let g = Grid::new(7, 4);
        for p in g.bounds().iter() {
            let i = g.index(p).unwrap();
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.index(Point::new(7, 0)), None);
        assert_eq!(g.index(Point::new(0, 4)), None);
    }
}
