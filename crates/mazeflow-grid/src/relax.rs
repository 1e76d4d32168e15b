//! Path-tree construction and incremental repair.
//!
//! Relaxation is a uniform-cost search rooted at the Exit: distances are
//! measured *to* the Exit over the 4-connected grid graph, weighted by
//! [`TileKind::weight`]. A single pass therefore serves every origin at
//! once. [`Grid::set_wall`] repairs the tree after a single tile becomes
//! blocked by cascading invalidation through the reverse (`ancestors`)
//! edges and re-relaxing only the region that was torn down.

use std::collections::BinaryHeap;

use mazeflow_core::Point;

use crate::error::GridError;
use crate::grid::Grid;
use crate::tile::{TileKind, UNREACHABLE};

/// Frontier entry, ordered so the max-heap pops the smallest distance first.
///
/// Stale entries (whose recorded distance no longer matches the tile) are
/// skipped on pop rather than removed eagerly. The secondary index key makes
/// the pop order a deterministic total order; any total order that never
/// starves a finite-distance tile would do.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenRef {
    idx: usize,
    distance: i32,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Grid {
    /// Rebuild the whole path tree from scratch.
    ///
    /// Every tile is reset (unvisited, distance at the sentinel, tree edges
    /// cleared), the Exit is seeded at distance 0, and relaxation runs to
    /// quiescence. Without an Exit the pass leaves every tile unrouted.
    ///
    /// Any stored display path is refreshed afterwards.
    pub fn recompute_all(&mut self) {
        for t in self.tiles.iter_mut() {
            t.visited = false;
            t.next = None;
            t.ancestors.clear();
            t.distance = UNREACHABLE;
        }
        if let Some(e) = self.exit {
            self.tiles[e].distance = 0;
        }
        self.relax();
        debug_assert!(
            self.exit
                .is_none_or(|e| self.tiles[e].distance == 0 && self.tiles[e].next.is_none()),
            "exit must stay the root of the path tree"
        );
        self.refresh_path();
    }

    /// Turn the tile at `p` into a Wall and repair the path tree.
    ///
    /// Returns `Ok(false)` without touching anything when `p` is the Entry
    /// or the Exit; walling a tile that is already a Wall is a successful
    /// no-op. Otherwise the tile is retyped, every tile whose route passed
    /// through it is invalidated, and relaxation re-runs over the
    /// invalidated region plus its frontier. If the stored display path
    /// crossed `p` it is recomputed.
    pub fn set_wall(&mut self, p: Point) -> Result<bool, GridError> {
        let i = self.index_of(p)?;
        match self.tiles[i].kind {
            TileKind::Entry | TileKind::Exit => return Ok(false),
            TileKind::Wall => return Ok(true),
            TileKind::Free => {}
        }

        self.tiles[i].kind = TileKind::Wall;
        let torn = self.invalidate(i);
        log::trace!("wall at {p} invalidated {torn} tile(s)");
        self.relax();

        if self
            .current_path
            .as_ref()
            .is_some_and(|path| path.contains(p))
        {
            self.refresh_path();
        }
        Ok(true)
    }

    /// Tear down the path-tree subtree that routed through `start`.
    ///
    /// Iterative worklist instead of recursion: a long corridor makes the
    /// cascade as deep as the grid. Each torn-down tile is detached from its
    /// successor, reset to the sentinel distance, and its non-wall
    /// neighbours are re-opened so they seed the next relaxation pass.
    /// Returns the number of tiles reset.
    fn invalidate(&mut self, start: usize) -> usize {
        let mut stack = vec![start];
        let mut torn = 0usize;
        while let Some(ci) = stack.pop() {
            torn += 1;
            if let Some(n) = self.tiles[ci].next.take() {
                self.tiles[n].ancestors.retain(|&a| a != ci);
            }
            self.tiles[ci].distance = UNREACHABLE;
            if !self.tiles[ci].kind.is_blocking() {
                self.tiles[ci].visited = false;
            }
            let cp = self.point(ci);
            for np in cp.cardinals() {
                let Some(ni) = self.index(np) else {
                    continue;
                };
                if !self.tiles[ni].kind.is_blocking() {
                    self.tiles[ni].visited = false;
                }
            }
            // Everything that routed through this tile is stale too.
            let mut upstream = std::mem::take(&mut self.tiles[ci].ancestors);
            stack.append(&mut upstream);
        }
        torn
    }

    /// Run relaxation over every unvisited tile with a finite distance.
    ///
    /// After a full reset only the Exit is finite, so this is a plain
    /// Dijkstra pass. After an invalidation cascade the finite unvisited
    /// tiles are exactly the frontier around the torn-down region, so the
    /// pass only touches that region: visited tiles keep their distances
    /// and are never relaxed again.
    pub(crate) fn relax(&mut self) {
        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
        for (i, t) in self.tiles.iter().enumerate() {
            if !t.visited && t.distance < UNREACHABLE {
                open.push(OpenRef {
                    idx: i,
                    distance: t.distance,
                });
            }
        }

        while let Some(OpenRef { idx: ci, distance }) = open.pop() {
            {
                let t = &self.tiles[ci];
                if t.visited || t.distance != distance {
                    continue; // stale entry
                }
            }
            self.tiles[ci].visited = true;

            let cp = self.point(ci);
            for np in cp.cardinals() {
                let Some(ni) = self.index(np) else {
                    continue;
                };
                if self.tiles[ni].visited {
                    continue;
                }
                let candidate = distance + self.tiles[ni].kind.weight();
                if candidate < self.tiles[ni].distance {
                    // A wall's weight saturates the candidate, so blocked
                    // tiles never pass this test and never join the tree.
                    if let Some(prev) = self.tiles[ni].next.take() {
                        self.tiles[prev].ancestors.retain(|&a| a != ni);
                    }
                    self.tiles[ni].distance = candidate;
                    self.tiles[ni].next = Some(ci);
                    self.tiles[ci].ancestors.push(ni);
                    open.push(OpenRef {
                        idx: ni,
                        distance: candidate,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
impl Grid {
    /// Panic unless the path tree satisfies its structural invariants:
    /// successor/ancestor symmetry, distance additivity, wall exclusion,
    /// and the Exit as root.
    pub(crate) fn check_tree(&self) {
        for i in 0..self.tiles.len() {
            let t = &self.tiles[i];
            let holders: Vec<usize> = (0..self.tiles.len())
                .filter(|&j| self.tiles[j].ancestors.contains(&i))
                .collect();
            match t.next {
                Some(n) => {
                    assert!(!t.kind.is_blocking(), "blocking tile {i} has a successor");
                    assert!(
                        !self.tiles[n].kind.is_blocking(),
                        "tile {i} routes through a wall"
                    );
                    assert_eq!(holders, vec![n], "ancestor bookkeeping broken for tile {i}");
                    assert_eq!(
                        self.tiles[n].ancestors.iter().filter(|&&a| a == i).count(),
                        1,
                        "tile {i} recorded more than once in its successor's ancestors"
                    );
                    assert_eq!(
                        t.distance,
                        self.tiles[n].distance + t.kind.weight(),
                        "distance of tile {i} does not match its successor chain"
                    );
                }
                None => {
                    assert!(holders.is_empty(), "unrouted tile {i} has ancestors");
                }
            }
        }
        if let Some(e) = self.exit {
            assert_eq!(self.tiles[e].next, None, "exit must have no successor");
            assert_eq!(self.tiles[e].distance, 0, "exit distance must be zero");
        }
    }
}
