//! Runs opponent searches off the controller's thread.
//!
//! Each launch gets its own worker thread holding a private clone of the
//! board, so nothing mutable is shared with the controller. Finished searches
//! come back over a single channel tagged with the epoch they were launched
//! in. Cancelling never stops a worker; its report is simply discarded on
//! arrival because its epoch no longer matches.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error};

use crate::board::Board;
use crate::rules::RuleSet;
use crate::search::{search_opponent_move, SearchReport};

use super::config::GameConfig;
use super::error::GameError;

/// Identifies one game instance. Bumped on every restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);

impl Epoch {
    pub fn next(&self) -> Self {
        Epoch(self.0 + 1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a worker sends back when its search is done.
#[derive(Debug)]
pub struct OpponentReport {
    pub epoch: Epoch,
    pub outcome: Result<SearchReport, GameError>,
    pub elapsed: Duration,
}

pub struct Orchestrator {
    sender: Sender<OpponentReport>,
    receiver: Receiver<OpponentReport>,
    outstanding: Option<Epoch>,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            outstanding: None,
        }
    }

    /// The epoch of the search whose result is still expected, if any.
    pub fn outstanding(&self) -> Option<Epoch> {
        self.outstanding
    }

    /// Starts searching player two's reply to `board` on a new thread and
    /// returns immediately.
    pub fn launch<R: RuleSet>(
        &mut self,
        epoch: Epoch,
        rules: R,
        board: Board,
        config: GameConfig,
    ) -> Result<(), GameError> {
        let sender = self.sender.clone();

        thread::Builder::new()
            .name(format!("opponent-search-{}", epoch))
            .spawn(move || {
                let start = Instant::now();
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                    search_opponent_move(&rules, &board, config.max_depth())
                }))
                .map_err(|_| {
                    error!("opponent search for epoch {} panicked", epoch);
                    GameError::SearchPanicked
                });

                // the controller may already be gone
                let _ = sender.send(OpponentReport {
                    epoch,
                    outcome,
                    elapsed: start.elapsed(),
                });
            })
            .map_err(|error| GameError::SearchUnavailable {
                error: error.to_string(),
            })?;

        debug!("launched opponent search for epoch {}", epoch);
        self.outstanding = Some(epoch);
        Ok(())
    }

    /// Forgets the outstanding search. Its report will still arrive and must
    /// be discarded by epoch.
    pub fn cancel(&mut self) {
        if let Some(epoch) = self.outstanding.take() {
            debug!("cancelled opponent search for epoch {}", epoch);
        }
    }

    /// Returns a finished report without blocking.
    pub fn try_next(&mut self) -> Option<OpponentReport> {
        match self.receiver.try_recv() {
            Ok(report) => Some(self.received(report)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Blocks until the next report arrives.
    pub fn next_blocking(&mut self) -> Option<OpponentReport> {
        self.receiver.recv().ok().map(|report| self.received(report))
    }

    /// Blocks for at most `timeout` waiting for the next report.
    pub fn next_timeout(&mut self, timeout: Duration) -> Option<OpponentReport> {
        match self.receiver.recv_timeout(timeout) {
            Ok(report) => Some(self.received(report)),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    fn received(&mut self, report: OpponentReport) -> OpponentReport {
        if self.outstanding == Some(report.epoch) {
            self.outstanding = None;
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;
    use crate::grid_position;
    use crate::rules::TicTacToe;

    const WAIT: Duration = Duration::from_secs(30);

    #[test]
    fn test_epoch_next() {
        let epoch = Epoch::default();
        assert_eq!(epoch.value(), 0);
        assert_eq!(epoch.next().value(), 1);
        assert!(epoch.next() > epoch);
    }

    #[test]
    fn test_launch_delivers_tagged_report() {
        let mut orchestrator = Orchestrator::new();
        let board = grid_position!["xx.", "o..", "..."];
        let epoch = Epoch::default().next();

        orchestrator
            .launch(epoch, TicTacToe, board, GameConfig::tictactoe())
            .unwrap();
        assert_eq!(orchestrator.outstanding(), Some(epoch));

        let report = orchestrator.next_timeout(WAIT).unwrap();
        assert_eq!(report.epoch, epoch);
        let search = report.outcome.unwrap();
        assert_eq!(search.result.best_move, Some(Move::new(0, 2)));
        assert!(search.stats.nodes_visited > 0);
        assert_eq!(orchestrator.outstanding(), None);
    }

    #[test]
    fn test_cancelled_search_still_reports_old_epoch() {
        let mut orchestrator = Orchestrator::new();
        let epoch = Epoch::default();

        orchestrator
            .launch(epoch, TicTacToe, Board::new(3, 3), GameConfig::tictactoe().with_max_depth(2).unwrap())
            .unwrap();
        orchestrator.cancel();
        assert_eq!(orchestrator.outstanding(), None);

        let report = orchestrator.next_timeout(WAIT).unwrap();
        assert_eq!(report.epoch, epoch);
    }

    #[test]
    fn test_try_next_without_launch() {
        let mut orchestrator = Orchestrator::new();
        assert!(orchestrator.try_next().is_none());
        assert!(orchestrator
            .next_timeout(Duration::from_millis(10))
            .is_none());
    }
}
