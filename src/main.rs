mod cli;

use cli::commands::Command;
use cli::GridGame;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    gridgame::instrumentation::init_tracing();

    GridGame::from_args().execute();

    #[cfg(feature = "instrumentation")]
    gridgame::instrumentation::print_timing_statistics();
}
