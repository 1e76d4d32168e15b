//! ASCII maze demo: generate a solvable layout, print it with the
//! entry-to-exit path highlighted, then walk an agent along it.

use mazeflow_core::Point;
use mazeflow_grid::{Agent, AgentStep, Grid, TileKind};

fn rune(kind: TileKind) -> char {
    match kind {
        TileKind::Free => '.',
        TileKind::Wall => '#',
        TileKind::Entry => '@',
        TileKind::Exit => '>',
    }
}

fn render(grid: &Grid) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let kind = grid.kind(p).expect("in-bounds point");
            let on_path = grid
                .current_path()
                .is_some_and(|path| path.contains(p) && kind == TileKind::Free);
            out.push(if on_path { '*' } else { rune(kind) });
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::new(40, 30);
    grid.set_entry(Point::new(6, 2))?;
    grid.set_exit(Point::new(34, 26))?;

    let mut rng = rand::rng();
    let attempts = grid.randomize_walls(0.3, &mut rng)?;

    let entry = grid.entry().ok_or("entry vanished")?;
    grid.set_path_origin(entry)?;
    print!("{}", render(&grid));
    println!("solvable maze in {attempts} attempt(s)");

    let mut agent = Agent::new(entry);
    let mut moves = 0u32;
    loop {
        match agent.step(&grid) {
            AgentStep::Moved(_) => moves += 1,
            AgentStep::Arrived => {
                println!("agent reached the exit in {} move(s)", moves + 1);
                break;
            }
            AgentStep::Stuck => {
                println!("agent is stuck at {}", agent.pos());
                break;
            }
        }
    }
    Ok(())
}
