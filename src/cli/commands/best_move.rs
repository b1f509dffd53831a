//! Best move command - search one position and report the result.

use gridgame::board::Board;
use gridgame::game::{GameConfig, GameKind};
use gridgame::rules::RuleSet;
use gridgame::search::search_position;
use structopt::StructOpt;

use super::util::{create_config, with_rules};
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "tic-tac-toe")]
    pub game: GameKind,
    #[structopt(short, long)]
    pub depth: Option<u8>,
    #[structopt(short, long)]
    pub board: Board,
    #[structopt(long = "no-pruning")]
    pub no_pruning: bool,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let config = match create_config(self.game, self.depth) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("{}", error);
                return;
            }
        };
        with_rules!(self.game, calculate_best_move(&self.board, config, !self.no_pruning));
    }
}

fn calculate_best_move<R: RuleSet>(rules: R, board: &Board, config: GameConfig, pruning: bool) {
    println!("{}", board);

    let result = rules.evaluate(board);
    if result.is_terminal() {
        println!("The game is already over: {}", result);
        return;
    }

    let mover = board.next_to_move();
    let report = search_position(
        &rules,
        board,
        config.max_depth(),
        mover.maximize_score(),
        pruning,
    );

    match report.result.best_move {
        Some(best_move) => println!("Best move for {}: {}", mover, best_move),
        None => eprintln!("There are no legal moves in the given position."),
    }
    println!("* Score: {}", report.result.score);
    println!("* Search depth: {}", config.max_depth());
    println!("* Nodes visited: {}", report.stats.nodes_visited);
    println!("* Branches pruned: {}", report.stats.branches_pruned);
    println!("* Depth cutoffs: {}", report.stats.depth_cutoffs);
    if report.stats.rule_set_inconsistencies > 0 {
        println!(
            "* Rule set inconsistencies: {}",
            report.stats.rule_set_inconsistencies
        );
    }
}
