use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::Chess;

fn main() {
    env_logger::init();
    Chess::from_args().execute();
}
