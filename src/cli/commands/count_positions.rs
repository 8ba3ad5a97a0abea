//! Count positions command - count reachable positions up to a given depth.

use chess_rules::game::position_counter::run_count_positions;
use chess_rules::game::state::GameState;
use chess_rules::input_handler::fen::STARTING_POSITION_FEN;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: GameState,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        run_count_positions(self.depth, &self.starting_position);
    }
}
