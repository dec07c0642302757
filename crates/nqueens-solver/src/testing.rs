//! Test utilities for solver traces.
//!
//! This module provides [`TraceTester`], a harness that runs a search and
//! checks its trace with chained assertions.
//!
//! # Example
//!
//! ```ignore
//! TraceTester::solve(2)
//!     .assert_no_solution()
//!     .assert_last(StepAction::Backtrack, 0, &[-1, -1])
//!     .assert_replayable();
//! ```

use crate::{BacktrackSolver, SearchResult, StepAction, replay_trace};

/// An expected trace record: action, row, column, and wire positions.
pub(crate) type ExpectedStep = (StepAction, usize, Option<usize>, Vec<i64>);

/// Builds an [`ExpectedStep`].
pub(crate) fn step(
    action: StepAction,
    row: usize,
    col: Option<usize>,
    positions: &[i64],
) -> ExpectedStep {
    (action, row, col, positions.to_vec())
}

/// A test harness for checking search traces.
///
/// All assertion methods return `self` for chaining and use
/// `#[track_caller]` so failures point at the calling test.
#[derive(Debug)]
pub(crate) struct TraceTester {
    result: SearchResult,
}

impl TraceTester {
    /// Runs an unlimited search for an `n`×`n` board.
    #[track_caller]
    pub(crate) fn solve(n: usize) -> Self {
        let result = BacktrackSolver::new().solve(n).unwrap();
        Self { result }
    }

    #[track_caller]
    pub(crate) fn assert_solution_found(self) -> Self {
        assert!(
            self.result.solution_found(),
            "expected a solution, got {}",
            self.result.outcome()
        );
        self
    }

    #[track_caller]
    pub(crate) fn assert_no_solution(self) -> Self {
        assert!(
            self.result.outcome().is_no_solution(),
            "expected no solution, got {}",
            self.result.outcome()
        );
        assert!(!self.result.steps().is_empty(), "trace must not be empty");
        self
    }

    /// Asserts the whole trace, record by record.
    #[track_caller]
    pub(crate) fn assert_steps(self, expected: &[ExpectedStep]) -> Self {
        let actual: Vec<ExpectedStep> = self
            .result
            .steps()
            .iter()
            .map(|s| (s.action(), s.row(), s.col(), s.board().to_signed()))
            .collect();
        for (index, (actual, expected)) in actual.iter().zip(expected).enumerate() {
            assert_eq!(actual, expected, "step {index} differs");
        }
        assert_eq!(actual.len(), expected.len(), "trace length differs");
        self
    }

    #[track_caller]
    pub(crate) fn assert_last(self, action: StepAction, row: usize, positions: &[i64]) -> Self {
        let last = self.result.steps().last().expect("trace is empty");
        assert_eq!(last.action(), action);
        assert_eq!(last.row(), row);
        assert_eq!(last.board().to_signed(), positions);
        self
    }

    /// Asserts the final positions are the given complete placement.
    #[track_caller]
    pub(crate) fn assert_final(self, columns: &[usize]) -> Self {
        assert_eq!(
            self.result.final_positions().columns().as_deref(),
            Some(columns)
        );
        self
    }

    #[track_caller]
    pub(crate) fn assert_backtracks(self, count: usize) -> Self {
        let actual = self
            .result
            .steps()
            .iter()
            .filter(|s| s.action().is_backtrack())
            .count();
        assert_eq!(actual, count, "backtrack count differs");
        assert_eq!(self.result.stats().backtracks(), count);
        self
    }

    /// Asserts the trace passes [`replay_trace`] and ends on the final positions.
    #[track_caller]
    pub(crate) fn assert_replayable(self) -> Self {
        let board = match replay_trace(self.result.size(), self.result.steps()) {
            Ok(board) => board,
            Err(e) => panic!("trace does not replay: {e}"),
        };
        if self.result.solution_found() {
            assert_eq!(Some(&board), self.result.solution());
        } else {
            assert_eq!(board.placed_count(), 0, "exhausted search must end empty");
        }
        self
    }
}
