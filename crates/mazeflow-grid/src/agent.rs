//! Discrete agents walking the path tree.

use mazeflow_core::Point;

use crate::grid::Grid;
use crate::tile::TileKind;

/// Outcome of a single [`Agent::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStep {
    /// Advanced one tile toward the Exit.
    Moved(Point),
    /// Standing on the Exit; nothing left to do.
    Arrived,
    /// The current tile has no route to the Exit.
    Stuck,
}

/// A monster walking the grid one tile per step, always following the
/// maintained path tree.
///
/// Because the tree is repaired on every wall change, the agent never needs
/// its own route state: re-reading the successor each step automatically
/// picks up reroutes. Continuous interpolation and frame timing belong to
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pos: Point,
}

impl Agent {
    /// Spawn an agent at `pos` (typically the Entry).
    pub fn new(pos: Point) -> Self {
        Self { pos }
    }

    /// Current position.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Advance one tile along the path tree.
    ///
    /// Returns [`AgentStep::Arrived`] once the agent stands on the Exit and
    /// [`AgentStep::Stuck`] when its tile has no successor (walled in, out
    /// of bounds, or the tree is stale).
    pub fn step(&mut self, grid: &Grid) -> AgentStep {
        if grid.kind(self.pos) == Ok(TileKind::Exit) {
            return AgentStep::Arrived;
        }
        match grid.successor(self.pos) {
            Ok(Some(next)) => {
                self.pos = next;
                if grid.kind(next) == Ok(TileKind::Exit) {
                    AgentStep::Arrived
                } else {
                    AgentStep::Moved(next)
                }
            }
            _ => AgentStep::Stuck,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(w: i32, h: i32, entry: Point, exit: Point) -> Grid {
        let mut g = Grid::new(w, h);
        g.set_entry(entry).unwrap();
        g.set_exit(exit).unwrap();
        g.recompute_all();
        g
    }

    #[test]
    fn walks_entry_to_exit() {
        let g = open_grid(3, 3, Point::new(0, 0), Point::new(2, 2));
        let mut agent = Agent::new(Point::new(0, 0));
        let mut moves = 0;
        loop {
            match agent.step(&g) {
                AgentStep::Moved(p) => {
                    assert_ne!(g.kind(p).unwrap(), TileKind::Wall);
                    moves += 1;
                    assert!(moves < 10, "agent is looping");
                }
                AgentStep::Arrived => break,
                AgentStep::Stuck => panic!("agent stuck on an open grid"),
            }
        }
        assert_eq!(agent.pos(), Point::new(2, 2));
        // Four moves on the 3x3 diagonal, the last one reported as Arrived.
        assert_eq!(moves, 3);
    }

    #[test]
    fn arrived_when_spawned_on_the_exit() {
        let g = open_grid(3, 3, Point::new(0, 0), Point::new(2, 2));
        let mut agent = Agent::new(Point::new(2, 2));
        assert_eq!(agent.step(&g), AgentStep::Arrived);
        assert_eq!(agent.pos(), Point::new(2, 2));
    }

    #[test]
    fn stuck_when_walled_in() {
        let mut g = open_grid(3, 3, Point::new(0, 0), Point::new(2, 2));
        g.set_wall(Point::new(1, 0)).unwrap();
        g.set_wall(Point::new(0, 1)).unwrap();
        let mut agent = Agent::new(Point::new(0, 0));
        assert_eq!(agent.step(&g), AgentStep::Stuck);
        assert_eq!(agent.pos(), Point::new(0, 0));
    }

    #[test]
    fn reroutes_after_a_wall_mid_walk() {
        let mut g = open_grid(4, 4, Point::new(0, 0), Point::new(3, 3));
        let mut agent = Agent::new(Point::new(0, 0));
        assert!(matches!(agent.step(&g), AgentStep::Moved(_)));

        // Block the agent's planned next tile; the tree repair reroutes it.
        if let Ok(Some(next)) = g.successor(agent.pos()) {
            if g.kind(next).unwrap() == TileKind::Free {
                g.set_wall(next).unwrap();
            }
        }
        let mut moves = 0;
        loop {
            match agent.step(&g) {
                AgentStep::Moved(_) => {
                    moves += 1;
                    assert!(moves < 20, "agent is looping");
                }
                AgentStep::Arrived => break,
                AgentStep::Stuck => panic!("agent should still have a route"),
            }
        }
        assert_eq!(agent.pos(), Point::new(3, 3));
    }
}
