use crate::{StepAction, StepEvent, StepRecord};

/// Receives trace events from a running search, in emission order.
pub trait StepSink {
    /// Handles one event.
    fn record(&mut self, event: StepEvent<'_>);
}

impl<S> StepSink for &mut S
where
    S: StepSink + ?Sized,
{
    fn record(&mut self, event: StepEvent<'_>) {
        (**self).record(event);
    }
}

/// Stores every event as an owned [`StepRecord`].
impl StepSink for Vec<StepRecord> {
    fn record(&mut self, event: StepEvent<'_>) {
        self.push(event.to_record());
    }
}

/// Counts events per action without keeping board snapshots.
///
/// Useful for large boards, where a full trace costs memory proportional to
/// the number of steps times `N`.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{BacktrackSolver, StepCounter};
///
/// let mut counter = StepCounter::default();
/// let summary = BacktrackSolver::new().solve_into(4, &mut counter)?;
///
/// assert!(summary.outcome().is_solved());
/// assert_eq!(counter.total(), 13);
/// assert_eq!(counter.backtracks(), 4);
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCounter {
    places: usize,
    backtracks: usize,
    solutions: usize,
}

impl StepCounter {
    /// Returns the number of [`StepAction::Place`] events.
    #[must_use]
    pub fn places(&self) -> usize {
        self.places
    }

    /// Returns the number of [`StepAction::Backtrack`] events.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns the number of [`StepAction::SolutionFound`] events.
    #[must_use]
    pub fn solutions(&self) -> usize {
        self.solutions
    }

    /// Returns the total number of events.
    #[must_use]
    pub fn total(&self) -> usize {
        self.places + self.backtracks + self.solutions
    }
}

impl StepSink for StepCounter {
    fn record(&mut self, event: StepEvent<'_>) {
        match event.action {
            StepAction::Place => self.places += 1,
            StepAction::Backtrack => self.backtracks += 1,
            StepAction::SolutionFound => self.solutions += 1,
        }
    }
}
