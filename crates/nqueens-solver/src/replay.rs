use nqueens_core::{Board, BoardSize};

use crate::{StepAction, StepRecord};

/// Errors detected while replaying a trace.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReplayError {
    /// A record belongs to a board of a different size.
    #[display("step {index}: board size {found} does not match {expected}")]
    SizeMismatch {
        /// Position of the record in the trace.
        index: usize,
        /// Size the replay was started with.
        expected: BoardSize,
        /// Size found in the record.
        found: BoardSize,
    },
    /// A placement that is not on the next unplaced row.
    #[display("step {index}: unexpected placement at row {row}")]
    UnexpectedPlacement {
        /// Position of the record in the trace.
        index: usize,
        /// Row of the placement.
        row: usize,
    },
    /// A retreat that does not remove the most recent queen.
    #[display("step {index}: unexpected backtrack at row {row}")]
    UnexpectedBacktrack {
        /// Position of the record in the trace.
        index: usize,
        /// Row of the retreat.
        row: usize,
    },
    /// A success record on an incomplete board.
    #[display("step {index}: solution reported on an incomplete board")]
    PrematureSolution {
        /// Position of the record in the trace.
        index: usize,
    },
    /// A record following a success record.
    #[display("step {index}: record after solution")]
    StepAfterSolution {
        /// Position of the record in the trace.
        index: usize,
    },
    /// The snapshot differs from the replayed board.
    #[display("step {index}: snapshot {found:?} differs from replayed board {expected:?}")]
    SnapshotMismatch {
        /// Position of the record in the trace.
        index: usize,
        /// Replayed positions.
        expected: Vec<i64>,
        /// Snapshot positions.
        found: Vec<i64>,
    },
    /// Two queens attack each other after the record is applied.
    #[display("step {index}: queens at {first:?} and {second:?} conflict")]
    Conflict {
        /// Position of the record in the trace.
        index: usize,
        /// One queen of the conflicting pair.
        first: (usize, usize),
        /// The other queen.
        second: (usize, usize),
    },
}

/// Re-applies each record's action to a fresh board and checks the trace.
///
/// A valid trace places queens only on the next unplaced row, retreats only
/// from the most recent queen, never holds two attacking queens, carries
/// snapshots equal to the replayed board, and ends immediately after a
/// [`StepAction::SolutionFound`] record on a complete board, if it has one.
///
/// Returns the board after the last record.
///
/// # Errors
///
/// Returns the first [`ReplayError`] encountered.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{replay_trace, solve};
///
/// let result = solve(5)?;
/// let board = replay_trace(result.size(), result.steps()).unwrap();
/// assert_eq!(Some(&board), result.solution());
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
pub fn replay_trace<'a, I>(size: BoardSize, steps: I) -> Result<Board, ReplayError>
where
    I: IntoIterator<Item = &'a StepRecord>,
{
    let mut board = Board::new(size);
    let mut solved = false;

    for (index, step) in steps.into_iter().enumerate() {
        if step.size() != size {
            return Err(ReplayError::SizeMismatch {
                index,
                expected: size,
                found: step.size(),
            });
        }
        if solved {
            return Err(ReplayError::StepAfterSolution { index });
        }

        let row = step.row();
        let frontier = board.placed_count();
        match (step.action(), step.col()) {
            (StepAction::Place, Some(col))
                if row == frontier && row < size.get() && col < size.get() =>
            {
                board.set(row, col);
            }
            (StepAction::Place, _) => {
                return Err(ReplayError::UnexpectedPlacement { index, row });
            }
            (StepAction::Backtrack, Some(col))
                if row + 1 == frontier && board.get(row) == Some(col) =>
            {
                board.clear(row);
            }
            (StepAction::Backtrack, _) => {
                return Err(ReplayError::UnexpectedBacktrack { index, row });
            }
            (StepAction::SolutionFound, None) if row == size.get() && board.is_complete() => {
                solved = true;
            }
            (StepAction::SolutionFound, _) => {
                return Err(ReplayError::PrematureSolution { index });
            }
        }

        if step.board() != &board {
            return Err(ReplayError::SnapshotMismatch {
                index,
                expected: board.to_signed(),
                found: step.board().to_signed(),
            });
        }
        if let Some((first, second)) = board.find_conflict() {
            return Err(ReplayError::Conflict {
                index,
                first,
                second,
            });
        }
    }

    Ok(board)
}
