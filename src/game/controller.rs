use std::time::Duration;

use log::{debug, error, info};

use crate::board::{Board, Move, Player};
use crate::rules::{RuleSet, TerminalResult};
use crate::search::SearchReport;

use super::config::GameConfig;
use super::error::{GameError, MoveRejection};
use super::event::{GameEvent, PresentationSink};
use super::orchestrator::{Epoch, OpponentReport, Orchestrator};
use super::state::TurnState;

/// The authoritative turn state machine for one human (player one) against
/// the computer (player two).
///
/// The controller owns the live board and is the only thing that mutates it.
/// Opponent moves are searched on a background thread over a copy of the
/// board; the result is fed back through [`poll`](Self::poll),
/// [`wait_for_opponent`](Self::wait_for_opponent) or
/// [`opponent_move_ready`](Self::opponent_move_ready), always on the
/// controller's own thread.
pub struct TurnController<R: RuleSet, S: PresentationSink> {
    rules: R,
    sink: S,
    config: GameConfig,
    board: Board,
    state: TurnState,
    epoch: Epoch,
    orchestrator: Orchestrator,
    last_search: Option<SearchReport>,
    last_search_duration: Option<Duration>,
}

impl<R: RuleSet, S: PresentationSink> TurnController<R, S> {
    /// Starts a game with an empty board and player one to move.
    pub fn start(rules: R, sink: S, config: GameConfig) -> Self {
        let mut controller = Self {
            board: Board::new(config.rows(), config.columns()),
            rules,
            sink,
            config,
            state: TurnState::AwaitingHuman,
            epoch: Epoch::default(),
            orchestrator: Orchestrator::new(),
            last_search: None,
            last_search_duration: None,
        };
        controller.begin("Starting");
        controller
    }

    /// Starts a game on a `rows × columns` board, searching `max_depth` plies.
    pub fn from_dimensions(
        rules: R,
        sink: S,
        rows: usize,
        columns: usize,
        max_depth: u8,
    ) -> Result<Self, GameError> {
        let config = GameConfig::new(rows, columns, max_depth)?;
        Ok(Self::start(rules, sink, config))
    }

    /// Starts a game with the rule set's own board size and depth.
    pub fn with_default_config(rules: R, sink: S) -> Self {
        let config = rules.default_config();
        Self::start(rules, sink, config)
    }

    /// Abandons the current game, including any opponent search still
    /// running, and starts over with `config`.
    pub fn restart(&mut self, config: GameConfig) {
        self.orchestrator.cancel();
        self.epoch = self.epoch.next();
        self.config = config;
        self.board = Board::new(config.rows(), config.columns());
        self.state = TurnState::AwaitingHuman;
        self.last_search = None;
        self.last_search_duration = None;
        self.begin("Restarting");
    }

    fn begin(&mut self, verb: &str) {
        info!(
            "{} {} (epoch {}): {}x{} board, max depth {}",
            verb,
            self.rules.name(),
            self.epoch,
            self.config.rows(),
            self.config.columns(),
            self.config.max_depth()
        );
        self.emit(GameEvent::TurnChanged { player: Player::One });
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Search result and counters of the last opponent move this game.
    pub fn last_search(&self) -> Option<&SearchReport> {
        self.last_search.as_ref()
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_search_duration
    }

    /// Places player one's mark at `target` and, unless that ends the game,
    /// hands the turn to the opponent search.
    ///
    /// A rejected move leaves the board and state untouched.
    pub fn apply_human_move(&mut self, target: Move) -> Result<(), GameError> {
        if self.state != TurnState::AwaitingHuman {
            return Err(GameError::NotYourTurn { state: self.state });
        }

        self.check_human_move(target)?;
        self.board
            .place(target, Player::One)
            .map_err(|error| GameError::InvalidMove {
                target,
                reason: MoveRejection::from(&error),
            })?;
        debug!("player one played {}", target);
        self.emit(GameEvent::BoardUpdated {
            target,
            mover: Player::One,
        });

        let result = self.rules.evaluate(&self.board);
        if result.is_terminal() {
            self.finish(result);
            return Ok(());
        }

        self.state = TurnState::ComputingOpponent;
        self.emit(GameEvent::TurnChanged { player: Player::Two });

        let launched = self.orchestrator.launch(
            self.epoch,
            self.rules.clone(),
            self.board.clone(),
            self.config,
        );
        if let Err(error) = launched {
            return self.fail(error);
        }
        Ok(())
    }

    fn check_human_move(&self, target: Move) -> Result<(), GameError> {
        let reason = match self.board.get(target) {
            None => Some(MoveRejection::OutOfBounds),
            Some(cell) if !cell.is_empty() => Some(MoveRejection::Occupied),
            Some(_) if !self.rules.legal_moves(&self.board).contains(&target) => {
                Some(MoveRejection::NotLegal)
            }
            Some(_) => None,
        };

        match reason {
            Some(reason) => Err(GameError::InvalidMove { target, reason }),
            None => Ok(()),
        }
    }

    /// Applies a finished opponent search.
    ///
    /// Returns `Ok(false)` when the report belongs to an earlier game and was
    /// discarded. A failed search, or one that found no move, ends the game
    /// with [`GameEvent::OpponentFailed`] and returns the error.
    pub fn opponent_move_ready(&mut self, report: OpponentReport) -> Result<bool, GameError> {
        if report.epoch != self.epoch {
            debug!(
                "discarding opponent search from epoch {} (current epoch {})",
                report.epoch, self.epoch
            );
            return Ok(false);
        }

        if self.state != TurnState::ComputingOpponent {
            return Err(GameError::NotYourTurn { state: self.state });
        }

        let search = match report.outcome {
            Ok(search) => search,
            Err(error) => return self.fail(error),
        };
        info!(
            "opponent search took {:?}: score {}, {}",
            report.elapsed, search.result.score, search.stats
        );
        self.last_search = Some(search);
        self.last_search_duration = Some(report.elapsed);

        let target = match search.result.best_move {
            Some(target) => target,
            None => return self.fail(GameError::NoLegalMove),
        };

        if let Err(error) = self.board.place(target, Player::Two) {
            return self.fail(GameError::IllegalOpponentMove { target, error });
        }
        debug!("player two played {}", target);
        self.emit(GameEvent::BoardUpdated {
            target,
            mover: Player::Two,
        });

        let result = self.rules.evaluate(&self.board);
        if result.is_terminal() {
            self.finish(result);
        } else {
            self.state = TurnState::AwaitingHuman;
            self.emit(GameEvent::TurnChanged { player: Player::One });
        }
        Ok(true)
    }

    /// Applies any opponent results that have already arrived, without
    /// blocking. Returns true if one of them was for the current game.
    pub fn poll(&mut self) -> Result<bool, GameError> {
        let mut applied = false;
        while let Some(report) = self.orchestrator.try_next() {
            applied |= self.opponent_move_ready(report)?;
        }
        Ok(applied)
    }

    /// Blocks until the opponent has moved (or failed). Returns immediately
    /// when no opponent move is pending.
    pub fn wait_for_opponent(&mut self) -> Result<(), GameError> {
        while self.state == TurnState::ComputingOpponent {
            match self.orchestrator.next_blocking() {
                Some(report) => {
                    self.opponent_move_ready(report)?;
                }
                None => {
                    return self.fail(GameError::SearchUnavailable {
                        error: "result channel closed".to_string(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Waits up to `timeout` for the next report of any game and handles it.
    /// `None` means nothing arrived; otherwise whether it was applied.
    pub fn wait_for_report(&mut self, timeout: Duration) -> Result<Option<bool>, GameError> {
        match self.orchestrator.next_timeout(timeout) {
            Some(report) => self.opponent_move_ready(report).map(Some),
            None => Ok(None),
        }
    }

    fn finish(&mut self, result: TerminalResult) {
        info!("{} is over: {}", self.rules.name(), result);
        self.state = TurnState::Finished;
        self.emit(GameEvent::GameOver { result });
    }

    fn fail<T>(&mut self, error: GameError) -> Result<T, GameError> {
        error!("{} cannot continue: {}", self.rules.name(), error);
        self.orchestrator.cancel();
        self.state = TurnState::Finished;
        self.emit(GameEvent::OpponentFailed {
            error: error.clone(),
        });
        Err(error)
    }

    fn emit(&mut self, event: GameEvent) {
        self.sink.handle(&event);
    }
}
