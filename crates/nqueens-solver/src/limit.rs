use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Instant,
};

use crate::SearchStats;

/// A cooperative cancellation signal peeked by the solver.
///
/// The solver consults the limit before testing each candidate column, and
/// before emitting a retreat or the final success. When the limit reports
/// `true` the search stops at once and returns
/// [`SearchOutcome::Aborted`](crate::SearchOutcome::Aborted) with the trace
/// emitted so far.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{BacktrackSolver, StepLimit};
///
/// let solver = BacktrackSolver::with_limit(StepLimit::new(5));
/// let result = solver.solve(8)?;
///
/// assert!(result.outcome().is_aborted());
/// assert_eq!(result.steps().len(), 5);
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
pub trait SearchLimit {
    /// Returns `true` if the search must stop.
    fn should_abort(&self, stats: &SearchStats) -> bool;
}

/// A limit that never aborts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unlimited;

impl SearchLimit for Unlimited {
    #[inline]
    fn should_abort(&self, _stats: &SearchStats) -> bool {
        false
    }
}

/// Aborts before the trace would grow past `max_steps` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLimit {
    max_steps: usize,
}

impl StepLimit {
    /// Creates a limit allowing at most `max_steps` emitted records.
    #[must_use]
    pub fn new(max_steps: usize) -> Self {
        Self { max_steps }
    }

    /// Returns the maximum number of records.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

impl SearchLimit for StepLimit {
    #[inline]
    fn should_abort(&self, stats: &SearchStats) -> bool {
        stats.steps() >= self.max_steps
    }
}

/// Aborts once the wall clock passes a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Creates a limit that expires at `at`.
    #[must_use]
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    /// Returns the expiry instant.
    #[must_use]
    pub fn instant(&self) -> Instant {
        self.at
    }
}

impl SearchLimit for Deadline {
    fn should_abort(&self, _stats: &SearchStats) -> bool {
        Instant::now() >= self.at
    }
}

/// Aborts once the flag is set, typically from another thread.
impl SearchLimit for AtomicBool {
    #[inline]
    fn should_abort(&self, _stats: &SearchStats) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<L> SearchLimit for &L
where
    L: SearchLimit + ?Sized,
{
    #[inline]
    fn should_abort(&self, stats: &SearchStats) -> bool {
        (**self).should_abort(stats)
    }
}

/// `None` never aborts.
impl<L> SearchLimit for Option<L>
where
    L: SearchLimit,
{
    #[inline]
    fn should_abort(&self, stats: &SearchStats) -> bool {
        self.as_ref().is_some_and(|limit| limit.should_abort(stats))
    }
}

/// Aborts when either limit does.
impl<A, B> SearchLimit for (A, B)
where
    A: SearchLimit,
    B: SearchLimit,
{
    #[inline]
    fn should_abort(&self, stats: &SearchStats) -> bool {
        self.0.should_abort(stats) || self.1.should_abort(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn stats_with_steps(steps: usize) -> SearchStats {
        SearchStats {
            steps,
            ..SearchStats::default()
        }
    }

    #[test]
    fn test_unlimited_never_aborts() {
        assert!(!Unlimited.should_abort(&stats_with_steps(usize::MAX)));
    }

    #[test]
    fn test_step_limit_threshold() {
        let limit = StepLimit::new(3);
        assert_eq!(limit.max_steps(), 3);
        assert!(!limit.should_abort(&stats_with_steps(2)));
        assert!(limit.should_abort(&stats_with_steps(3)));
        assert!(StepLimit::new(0).should_abort(&stats_with_steps(0)));
    }

    #[test]
    fn test_deadline() {
        let past = Deadline::at(Instant::now());
        assert!(past.should_abort(&SearchStats::default()));

        let future = Deadline::at(Instant::now() + Duration::from_secs(3600));
        assert!(!future.should_abort(&SearchStats::default()));
    }

    #[test]
    fn test_atomic_flag() {
        let flag = AtomicBool::new(false);
        assert!(!(&flag).should_abort(&SearchStats::default()));
        flag.store(true, Ordering::Relaxed);
        assert!(flag.should_abort(&SearchStats::default()));
    }

    #[test]
    fn test_combinators() {
        let stats = stats_with_steps(5);
        assert!(!None::<StepLimit>.should_abort(&stats));
        assert!(Some(StepLimit::new(5)).should_abort(&stats));
        assert!((Unlimited, StepLimit::new(1)).should_abort(&stats));
        assert!(!(Unlimited, None::<StepLimit>).should_abort(&stats));
    }
}
