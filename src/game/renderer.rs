use crate::game::display::GameDisplay;
use crate::game::engine::Engine;

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, status: Option<&str>);
}

pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, status: Option<&str>) {
        let last_move = engine.last_move();
        ui.render_game_state(
            engine.board(),
            engine.turn(),
            last_move.as_ref(),
            engine.is_in_check(),
            status,
        );
        println!("Enter your move (e.g. e2e4), `undo` or `quit`:");
    }
}
