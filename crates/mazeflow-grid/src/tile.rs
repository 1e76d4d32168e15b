//! Tile kinds and per-tile pathfinding state.

/// Distance sentinel meaning "no known route to the Exit".
///
/// Doubles as the traversal weight of a Wall: large enough to exceed any
/// real path sum at supported grid sizes (a few thousand tiles), so blocked
/// tiles are priced out of every route without being removed from the graph.
pub const UNREACHABLE: i32 = 10_000;

/// The category of a tile, fixing its traversal weight and blocking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    /// Open ground.
    #[default]
    Free,
    /// Blocked ground, priced at [`UNREACHABLE`].
    Wall,
    /// The tile agents spawn on. At most one per grid.
    Entry,
    /// The tile all routes lead to. At most one per grid.
    Exit,
}

impl TileKind {
    /// Cost of stepping onto a tile of this kind.
    #[inline]
    pub const fn weight(self) -> i32 {
        match self {
            TileKind::Free | TileKind::Entry => 1,
            TileKind::Exit => 0,
            TileKind::Wall => UNREACHABLE,
        }
    }

    /// Whether the tile refuses to participate in the path tree.
    #[inline]
    pub const fn is_blocking(self) -> bool {
        matches!(self, TileKind::Wall)
    }
}

/// A single grid tile: its kind plus the pathfinding state maintained by
/// relaxation.
///
/// The path tree is distributed across tiles: `next` points at the successor
/// toward the Exit and `ancestors` holds the reverse edges (every tile whose
/// `next` is this one), which drive the invalidation cascade. Both are flat
/// indices into the grid's tile vector, never owning references.
#[derive(Debug, Clone)]
pub struct Tile {
    pub(crate) kind: TileKind,
    pub(crate) visited: bool,
    pub(crate) distance: i32,
    pub(crate) next: Option<usize>,
    pub(crate) ancestors: Vec<usize>,
}

impl Tile {
    pub(crate) fn new(kind: TileKind) -> Self {
        Self {
            kind,
            visited: false,
            distance: UNREACHABLE,
            next: None,
            ancestors: Vec::new(),
        }
    }

    /// The tile's kind.
    #[inline]
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// Cheapest known cost from this tile to the Exit, or [`UNREACHABLE`].
    #[inline]
    pub fn distance(&self) -> i32 {
        self.distance
    }

    /// Whether the tile currently has a route to the Exit.
    ///
    /// The Exit itself has no successor but is trivially routed.
    #[inline]
    pub fn is_routed(&self) -> bool {
        self.next.is_some() || self.kind == TileKind::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights() {
        assert_eq!(TileKind::Free.weight(), 1);
        assert_eq!(TileKind::Entry.weight(), 1);
        assert_eq!(TileKind::Exit.weight(), 0);
        assert_eq!(TileKind::Wall.weight(), UNREACHABLE);
    }

    #[test]
    fn only_walls_block() {
        assert!(TileKind::Wall.is_blocking());
        assert!(!TileKind::Free.is_blocking());
        assert!(!TileKind::Entry.is_blocking());
        assert!(!TileKind::Exit.is_blocking());
    }

    #[test]
    fn fresh_tile_is_unrouted() {
        let t = Tile::new(TileKind::Free);
        assert_eq!(t.distance(), UNREACHABLE);
        assert!(!t.is_routed());
    }
}
