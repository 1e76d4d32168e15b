//! Procedural maze generation by rejection sampling.

use rand::{Rng, RngExt};

use crate::error::GridError;
use crate::grid::Grid;
use crate::tile::TileKind;

/// Upper bound on rejected layouts before [`Grid::randomize_walls`] gives
/// up. The chance of rejecting a reasonable spawn rate this many times in a
/// row is negligible; hitting the bound means the rate is pathological for
/// the grid shape.
pub const MAX_GENERATION_ATTEMPTS: u32 = 100;

impl Grid {
    /// Generate a random solvable wall layout.
    ///
    /// Each attempt clears all walls, retypes every non-Entry/non-Exit tile
    /// to Wall independently with probability `rate`, and recomputes the
    /// path tree. A layout is accepted once the Entry has a route to the
    /// Exit; accepted layouts then have their unreachable Free tiles sealed
    /// by [`fill_dead_ends`](Grid::fill_dead_ends). Returns the number of
    /// attempts used.
    ///
    /// The caller provides the random generator, so seeded runs are
    /// reproducible. Requires an Entry and an Exit; `rate` must lie in
    /// `[0.0, 1.0)`.
    pub fn randomize_walls(&mut self, rate: f64, rng: &mut impl Rng) -> Result<u32, GridError> {
        if !(0.0..1.0).contains(&rate) {
            return Err(GridError::InvalidSpawnRate(rate));
        }
        let entry = self.entry.ok_or(GridError::MissingEntry)?;
        if self.exit.is_none() {
            return Err(GridError::MissingExit);
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            self.clear_walls();
            for i in 0..self.tiles.len() {
                match self.tiles[i].kind {
                    TileKind::Entry | TileKind::Exit => continue,
                    _ => {}
                }
                if rng.random::<f64>() < rate {
                    self.tiles[i].kind = TileKind::Wall;
                }
            }
            self.recompute_all();

            if self.tiles[entry].next.is_some() {
                let sealed = self.fill_dead_ends();
                log::debug!(
                    "solvable layout after {attempt} attempt(s), {sealed} dead end(s) sealed"
                );
                return Ok(attempt);
            }
        }
        Err(GridError::GenerationFailed {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    /// Retype every unrouted Free tile to Wall, sealing dead ends.
    ///
    /// Unrouted tiles are by definition outside the path tree, so no
    /// re-relaxation is needed. Returns the number of tiles sealed.
    pub fn fill_dead_ends(&mut self) -> usize {
        let mut sealed = 0;
        for t in self.tiles.iter_mut() {
            if t.kind == TileKind::Free && t.next.is_none() {
                debug_assert!(t.ancestors.is_empty(), "sealing a tile with ancestors");
                t.kind = TileKind::Wall;
                sealed += 1;
            }
        }
        sealed
    }

    /// Retype every Wall back to Free. Pathfinding state is reset by the
    /// next relaxation pass.
    fn clear_walls(&mut self) {
        for t in self.tiles.iter_mut() {
            if t.kind == TileKind::Wall {
                t.kind = TileKind::Free;
            }
        }
    }
}
