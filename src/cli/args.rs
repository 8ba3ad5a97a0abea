//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{count_positions::CountPositionsArgs, pvp::PvpArgs};

#[derive(StructOpt)]
#[structopt(name = "chess", about = "Two-player chess on the command line ♛")]
pub enum Chess {
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. Moves are entered as from/to squares (`e2e4`); `undo` takes back the last move and `quit` ends the game. The initial position can be specified using FEN notation with `--fen` (default: starting position)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of reachable positions for each depth up to `--depth` (default: 4), and report the time it took to do so. The initial position can be specified using FEN notation with `--fen` (default: starting position)."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        match self {
            Self::Pvp(cmd) => cmd.execute(),
            Self::CountPositions(cmd) => cmd.execute(),
        }
    }
}
