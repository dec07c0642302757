//! Stepwise navigation over a recorded trace.

use std::slice;

use nqueens_solver::StepRecord;

/// A position within a trace, moved one record at a time.
///
/// Moving past either end clamps, so a viewer can bind "previous" and "next"
/// buttons directly to [`step_back`](Self::step_back) and
/// [`step_forward`](Self::step_forward).
///
/// # Examples
///
/// ```
/// use nqueens_app::TraceCursor;
/// use nqueens_solver::{StepAction, solve};
///
/// let result = solve(4)?;
/// let mut cursor = TraceCursor::new(result.steps());
/// assert!(cursor.is_first());
///
/// cursor.seek(usize::MAX);
/// assert!(cursor.is_last());
/// assert_eq!(cursor.current().map(|s| s.action()), Some(StepAction::SolutionFound));
///
/// assert!(!cursor.step_forward());
/// assert!(cursor.step_back());
/// assert_eq!(cursor.index(), result.steps().len() - 2);
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TraceCursor<'a> {
    steps: &'a [StepRecord],
    index: usize,
}

impl<'a> TraceCursor<'a> {
    /// Creates a cursor at the first record.
    #[must_use]
    pub fn new(steps: &'a [StepRecord]) -> Self {
        Self { steps, index: 0 }
    }

    /// Returns the record under the cursor, or `None` for an empty trace.
    #[must_use]
    pub fn current(&self) -> Option<&'a StepRecord> {
        self.steps.get(self.index)
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the trace has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns `true` if the cursor is on the first record.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns `true` if the cursor is on the last record.
    ///
    /// An empty trace is both first and last.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.steps.len()
    }

    /// Moves to the next record. Returns `false` if already on the last one.
    pub fn step_forward(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves to the previous record. Returns `false` if already on the first one.
    pub fn step_back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Moves to `index`, clamped to the last record.
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.steps.len().saturating_sub(1));
    }

    /// Iterates from the current record to the end without moving the cursor.
    pub fn remaining(&self) -> slice::Iter<'a, StepRecord> {
        self.steps.get(self.index..).unwrap_or_default().iter()
    }
}
