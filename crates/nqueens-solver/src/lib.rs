//! Backtracking N-Queens search with a replayable step trace.
//!
//! The solver explores placements row by row, scanning columns in ascending
//! order, and stops at the first solution. Every placement, retreat, and the
//! final success are reported as [`StepRecord`]s, each holding an independent
//! snapshot of the board, so a consumer can step forward and backward through
//! the whole search.
//!
//! # Examples
//!
//! ```
//! use nqueens_solver::{StepAction, solve};
//!
//! let result = solve(4)?;
//! assert!(result.solution_found());
//! assert_eq!(result.final_positions().columns(), Some(vec![1, 3, 0, 2]));
//!
//! let last = result.steps().last().unwrap();
//! assert_eq!(last.action(), StepAction::SolutionFound);
//! # Ok::<(), nqueens_solver::SolverError>(())
//! ```
//!
//! Sizes 2 and 3 have no solution; the trace still documents the exhaustive
//! attempt:
//!
//! ```
//! use nqueens_solver::{StepAction, solve};
//!
//! let result = solve(2)?;
//! assert!(!result.solution_found());
//! let last = result.steps().last().unwrap();
//! assert_eq!(last.action(), StepAction::Backtrack);
//! assert_eq!(last.row(), 0);
//! assert_eq!(last.board().placed_count(), 0);
//! # Ok::<(), nqueens_solver::SolverError>(())
//! ```

pub use self::{backtrack_solver::*, error::*, limit::*, replay::*, sink::*, step::*};

mod backtrack_solver;
mod error;
mod limit;
mod replay;
mod sink;
mod step;

#[cfg(test)]
mod testing;

/// Runs an unlimited search for an `n`×`n` board.
///
/// This is shorthand for [`BacktrackSolver::new().solve(n)`](BacktrackSolver::solve).
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if `n` is zero.
pub fn solve(n: usize) -> Result<SearchResult, SolverError> {
    BacktrackSolver::new().solve(n)
}
