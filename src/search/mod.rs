//! Depth-limited minimax search with alpha-beta pruning.
//!
//! # Scoring
//!
//! Player two (the computer) maximizes and player one (the human) minimizes.
//! Terminal boards are scored relative to the ply at which they are reached:
//! a player-two win is worth `10 - depth`, a player-one win `-10 + depth` and
//! a draw `0`. Quick wins therefore outrank slow ones and losses are delayed
//! as long as possible. There is no heuristic evaluation: a board that is
//! still in play at the depth bound scores a neutral `0`.
//!
//! # Pruning
//!
//! The window `[alpha, beta]` carries the best score each side is already
//! guaranteed. Once `beta <= alpha` at a node, no remaining sibling can
//! change the decision above it, so enumeration stops. Pruning only changes
//! which nodes are visited, never the score or move chosen at the root; it can
//! be switched off to run plain minimax.
//!
//! # Backtracking
//!
//! The search places marks directly on the board it is given and clears each
//! one before trying the next candidate, so the board is identical before and
//! after every call. Callers pass a clone of the live board.

use std::cmp::{max, min};
use std::fmt;

use log::{debug, warn};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::{Board, BoardError, Move, Player};
use crate::rules::{RuleSet, TerminalResult};


/// Magnitude of a win found at the root.
pub const WIN_SCORE: i32 = 10;
/// Score of a draw, and of any board cut off by the depth bound.
pub const DRAW_SCORE: i32 = 0;

/// Counters collected over one top-level search. Diagnostics only, the search
/// never reads them back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_visited: usize,
    pub branches_pruned: usize,
    pub depth_cutoffs: usize,
    pub rule_set_inconsistencies: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes visited: {}, branches pruned: {}, depth cutoffs: {}",
            self.nodes_visited, self.branches_pruned, self.depth_cutoffs
        )?;
        if self.rule_set_inconsistencies > 0 {
            write!(
                f,
                ", rule set inconsistencies: {}",
                self.rule_set_inconsistencies
            )?;
        }
        Ok(())
    }
}

/// Score of a node and the move leading to it. `best_move` is `None` at
/// leaves: terminal boards, the depth bound, and boards with no legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Move>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// A finished top-level search: the chosen move plus the counters for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub result: SearchResult,
    pub stats: SearchStats,
}

pub struct SearchEngine<'a, R: RuleSet> {
    rules: &'a R,
    max_depth: u8,
    pruning: bool,
    stats: SearchStats,
}

impl<'a, R: RuleSet> SearchEngine<'a, R> {
    pub fn new(rules: &'a R, max_depth: u8) -> Self {
        Self {
            rules,
            max_depth,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Plain minimax: the window is still tracked but never cuts.
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn is_pruning(&self) -> bool {
        self.pruning
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Scores `board` from the point of view of the maximizer (player two).
    ///
    /// `depth` is the ply of `board` below the root and `maximizing` says
    /// whether player two moves next. The board is restored before returning.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.stats.nodes_visited += 1;

        match self.rules.evaluate(board) {
            TerminalResult::PlayerOneWins => return SearchResult::leaf(-WIN_SCORE + depth as i32),
            TerminalResult::PlayerTwoWins => return SearchResult::leaf(WIN_SCORE - depth as i32),
            TerminalResult::Draw => return SearchResult::leaf(DRAW_SCORE),
            TerminalResult::Ongoing => {}
        }

        if depth >= self.max_depth {
            self.stats.depth_cutoffs += 1;
            return SearchResult::leaf(DRAW_SCORE);
        }

        let candidates = self.rules.legal_moves(board);
        if candidates.is_empty() {
            self.stats.rule_set_inconsistencies += 1;
            warn!(
                "{}: board `{}` is ongoing but has no legal moves, scoring it as a draw",
                self.rules.name(),
                board.to_notation()
            );
            return SearchResult::leaf(DRAW_SCORE);
        }

        let mover = if maximizing { Player::Two } else { Player::One };
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for &candidate in candidates.iter() {
            let child = with_move_applied(board, candidate, mover, |board| {
                self.search(board, depth + 1, !maximizing, alpha, beta)
            });

            let child = match child {
                Ok(child) => child,
                Err(error) => {
                    self.stats.rule_set_inconsistencies += 1;
                    warn!(
                        "{}: skipping illegal candidate on board `{}`: {}",
                        self.rules.name(),
                        board.to_notation(),
                        error
                    );
                    continue;
                }
            };

            if update_best(child.score, candidate, maximizing, &mut best_score, &mut best_move) {
                if maximizing {
                    alpha = max(alpha, best_score);
                } else {
                    beta = min(beta, best_score);
                }
            }

            if self.pruning && beta <= alpha {
                self.stats.branches_pruned += 1;
                break;
            }
        }

        // every candidate was rejected above
        if best_move.is_none() {
            return SearchResult::leaf(DRAW_SCORE);
        }

        SearchResult {
            score: best_score,
            best_move,
        }
    }
}

/// Places `mover` at `target`, runs `f` on the resulting board, then clears
/// the cell again.
fn with_move_applied<F>(
    board: &mut Board,
    target: Move,
    mover: Player,
    f: F,
) -> Result<SearchResult, BoardError>
where
    F: FnOnce(&mut Board) -> SearchResult,
{
    board.place(target, mover)?;
    let result = f(board);
    board.clear(target)?;
    Ok(result)
}

/// Records `candidate` if its score strictly beats the current best, so the
/// earliest of several equal moves is kept. Returns true on improvement.
fn update_best(
    score: i32,
    candidate: Move,
    maximizing: bool,
    best_score: &mut i32,
    best_move: &mut Option<Move>,
) -> bool {
    let is_better = if maximizing {
        score > *best_score
    } else {
        score < *best_score
    };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate);
    }
    is_better
}

/// Chooses player two's reply on `board` with a full window.
///
/// Searches a private copy of `board`; the caller's board is never touched.
/// The returned stats cover this search only.
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn search_opponent_move<R: RuleSet>(rules: &R, board: &Board, max_depth: u8) -> SearchReport {
    run_root_search(SearchEngine::new(rules, max_depth), board, true)
}

/// Like [`search_opponent_move`], but for whichever side `maximizing`
/// selects and with pruning optionally disabled.
#[must_use = "search returns the best move found"]
pub fn search_position<R: RuleSet>(
    rules: &R,
    board: &Board,
    max_depth: u8,
    maximizing: bool,
    pruning: bool,
) -> SearchReport {
    let engine = SearchEngine::new(rules, max_depth);
    let engine = if pruning {
        engine
    } else {
        engine.without_pruning()
    };
    run_root_search(engine, board, maximizing)
}

fn run_root_search<R: RuleSet>(
    mut engine: SearchEngine<'_, R>,
    board: &Board,
    maximizing: bool,
) -> SearchReport {
    debug!(
        "{} search: depth {}, pruning {}",
        engine.rules.name(),
        engine.max_depth(),
        engine.is_pruning()
    );

    let mut scratch = board.clone();
    let result = engine.search(&mut scratch, 0, maximizing, i32::MIN, i32::MAX);

    SearchReport {
        result,
        stats: engine.stats(),
    }
}
