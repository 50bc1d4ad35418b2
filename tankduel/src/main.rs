//! Tankduel — a top-down tank skirmish built on tilenav.

use tankduel_lib::Game;

const DT: f32 = 1.0 / 60.0;
const TICKS: u32 = 600;
const SEED: u64 = 0xDE1;

fn main() {
    let mut game = Game::new(SEED);
    if std::env::args().any(|a| a == "--debug") {
        game.debug.draw_nav_graph = true;
        game.debug.draw_search = true;
        game.debug.draw_path = true;
    }

    for tick in 0..TICKS {
        game.tick(DT);
        if tick % 60 == 0 {
            println!("t = {:.1}s", tick as f32 * DT);
            print!("{}", game.render_overlay());
        }
    }
}
