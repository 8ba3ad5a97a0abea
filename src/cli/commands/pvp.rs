//! PvP command - play a game against another human.

use chess_rules::game::engine::EngineConfig;
use chess_rules::game::input_source::HumanInput;
use chess_rules::game::r#loop::GameLoop;
use chess_rules::game::renderer::SimpleRenderer;
use chess_rules::game::state::GameState;
use chess_rules::input_handler::fen::STARTING_POSITION_FEN;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: GameState,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = EngineConfig {
            starting_position: self.starting_position,
        };
        let mut game = GameLoop::new(HumanInput::stdin(), SimpleRenderer, config);
        game.run();
    }
}
