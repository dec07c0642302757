use nqueens_core::{Board, BoardSize, ConflictTracker};

use crate::{SearchLimit, SolverError, StepAction, StepEvent, StepRecord, StepSink, Unlimited};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub(crate) steps: usize,
    pub(crate) placements: usize,
    pub(crate) backtracks: usize,
    pub(crate) candidates_checked: usize,
    pub(crate) max_depth: usize,
}

impl SearchStats {
    /// Returns the number of emitted trace records.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of queens placed, including ones later removed.
    #[must_use]
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Returns the number of retreats.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns the number of `(row, col)` candidates tested for legality.
    #[must_use]
    pub fn candidates_checked(&self) -> usize {
        self.candidates_checked
    }

    /// Returns the largest number of queens on the board at once.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SearchOutcome {
    /// A complete placement was found.
    #[display("solved")]
    Solved,
    /// Every placement was tried; none exists.
    #[display("no solution")]
    NoSolution,
    /// The [`SearchLimit`] stopped the search early.
    #[display("aborted")]
    Aborted,
}

/// Result of a search whose steps went to a caller-provided [`StepSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    outcome: SearchOutcome,
    board: Board,
    stats: SearchStats,
}

impl SearchSummary {
    /// Returns how the search ended.
    #[must_use]
    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    /// Returns the board as the search left it.
    ///
    /// This is the solution when solved, all-unplaced after exhaustion, and
    /// the partial board at the point of an abort.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the search counters.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Result of [`BacktrackSolver::solve`]: the outcome plus the full trace.
///
/// The result is an independent value; nothing in the solver refers to it
/// after it is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    summary: SearchSummary,
    steps: Vec<StepRecord>,
}

impl SearchResult {
    /// Returns how the search ended.
    #[must_use]
    pub fn outcome(&self) -> SearchOutcome {
        self.summary.outcome
    }

    /// Returns `true` if a complete placement was found.
    #[must_use]
    pub fn solution_found(&self) -> bool {
        self.summary.outcome.is_solved()
    }

    /// Returns the board size searched.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.summary.board.size()
    }

    /// Returns the solution, if one was found.
    #[must_use]
    pub fn solution(&self) -> Option<&Board> {
        self.solution_found().then_some(&self.summary.board)
    }

    /// Returns the final queen positions: the solution when found, otherwise
    /// an all-unplaced board.
    #[must_use]
    pub fn final_positions(&self) -> Board {
        self.solution()
            .cloned()
            .unwrap_or_else(|| Board::new(self.size()))
    }

    /// Returns the ordered trace.
    #[must_use]
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Consumes the result and returns the ordered trace.
    #[must_use]
    pub fn into_steps(self) -> Vec<StepRecord> {
        self.steps
    }

    /// Returns the search counters.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.summary.stats
    }
}

/// Depth-first, row-major search for one N-Queens placement.
///
/// At each row the solver tries columns `0..N` in ascending order. A legal
/// column is placed and the search advances to the next row; when a row runs
/// out of columns the queen in the previous row is removed and that row
/// resumes with its next column. The search stops at the first complete
/// placement, or when row 0 is exhausted.
///
/// The scan order is fixed, so the trace for a given `N` is always identical.
///
/// Each call builds its own board, [`ConflictTracker`], and trace. The solver
/// holds only its limit, so one solver may serve concurrent calls when the
/// limit is `Sync`.
///
/// # Cost
///
/// No upper bound is placed on `N`. Search cost grows super-exponentially in
/// the worst case, and a full trace holds `N` columns per record. Use a
/// [`SearchLimit`] to bound work and [`solve_into`](Self::solve_into) with a
/// [`StepCounter`](crate::StepCounter) to avoid storing snapshots.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{BacktrackSolver, StepAction};
///
/// let solver = BacktrackSolver::new();
/// let result = solver.solve(1)?;
///
/// let actions: Vec<_> = result.steps().iter().map(|s| s.action()).collect();
/// assert_eq!(actions, vec![StepAction::Place, StepAction::SolutionFound]);
/// assert_eq!(result.final_positions().to_signed(), vec![0]);
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackSolver<L = Unlimited> {
    limit: L,
}

impl BacktrackSolver<Unlimited> {
    /// Creates a solver that always runs to completion.
    #[must_use]
    pub fn new() -> Self {
        Self { limit: Unlimited }
    }
}

impl<L> BacktrackSolver<L>
where
    L: SearchLimit,
{
    /// Creates a solver that stops when `limit` says so.
    #[must_use]
    pub fn with_limit(limit: L) -> Self {
        Self { limit }
    }

    /// Returns the configured limit.
    #[must_use]
    pub fn limit(&self) -> &L {
        &self.limit
    }

    /// Searches an `n`×`n` board and records the full trace.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInput`] if `n` is zero. No search work is
    /// done in that case.
    pub fn solve(&self, n: usize) -> Result<SearchResult, SolverError> {
        let size = BoardSize::new(n)?;
        Ok(self.solve_sized(size))
    }

    /// Searches a board of a pre-validated size and records the full trace.
    #[must_use]
    pub fn solve_sized(&self, size: BoardSize) -> SearchResult {
        let mut steps = Vec::new();
        let summary = self.run(size, &mut steps);
        SearchResult { summary, steps }
    }

    /// Searches an `n`×`n` board, sending each step to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInput`] if `n` is zero. Nothing is sent to
    /// `sink` in that case.
    pub fn solve_into<S>(&self, n: usize, sink: &mut S) -> Result<SearchSummary, SolverError>
    where
        S: StepSink + ?Sized,
    {
        let size = BoardSize::new(n)?;
        Ok(self.run(size, sink))
    }

    fn run<S>(&self, size: BoardSize, sink: &mut S) -> SearchSummary
    where
        S: StepSink + ?Sized,
    {
        let n = size.get();
        log::debug!("starting search: n={n}");

        let mut search = Search {
            tracker: ConflictTracker::new(size),
            board: Board::new(size),
            stats: SearchStats::default(),
            sink,
        };
        // next_col[row]: the next column to try in `row`. For rows below the
        // frontier, `next_col[row] - 1` is the column of the placed queen.
        let mut next_col = vec![0; n];
        let mut row = 0;

        let outcome = 'search: loop {
            if row == n {
                if self.limit.should_abort(&search.stats) {
                    break SearchOutcome::Aborted;
                }
                search.emit(StepAction::SolutionFound, n, None);
                break SearchOutcome::Solved;
            }

            let mut placed = false;
            while next_col[row] < n {
                if self.limit.should_abort(&search.stats) {
                    break 'search SearchOutcome::Aborted;
                }
                let col = next_col[row];
                next_col[row] += 1;
                search.stats.candidates_checked += 1;
                if search.tracker.is_legal(row, col) {
                    search.place(row, col);
                    placed = true;
                    break;
                }
            }

            if placed {
                row += 1;
                if row < n {
                    next_col[row] = 0;
                }
                continue;
            }

            if row == 0 {
                break SearchOutcome::NoSolution;
            }
            if self.limit.should_abort(&search.stats) {
                break SearchOutcome::Aborted;
            }
            row -= 1;
            search.retreat(row, next_col[row] - 1);
        };

        let stats = search.stats;
        match outcome {
            SearchOutcome::Aborted => log::warn!(
                "search aborted: n={n}, steps={}, depth={row}",
                stats.steps
            ),
            _ => log::debug!(
                "search finished: n={n}, outcome={outcome}, steps={}, backtracks={}",
                stats.steps,
                stats.backtracks
            ),
        }

        SearchSummary {
            outcome,
            board: search.board,
            stats,
        }
    }
}

/// Per-invocation search state.
struct Search<'s, S>
where
    S: StepSink + ?Sized,
{
    tracker: ConflictTracker,
    board: Board,
    stats: SearchStats,
    sink: &'s mut S,
}

impl<S> Search<'_, S>
where
    S: StepSink + ?Sized,
{
    fn place(&mut self, row: usize, col: usize) {
        self.tracker.place(row, col);
        self.board.set(row, col);
        self.stats.placements += 1;
        self.stats.max_depth = self.stats.max_depth.max(row + 1);
        self.emit(StepAction::Place, row, Some(col));
    }

    fn retreat(&mut self, row: usize, col: usize) {
        self.tracker.remove(row, col);
        let removed = self.board.clear(row);
        debug_assert_eq!(removed, Some(col), "retreat from unexpected cell");
        self.stats.backtracks += 1;
        self.emit(StepAction::Backtrack, row, Some(col));
    }

    fn emit(&mut self, action: StepAction, row: usize, col: Option<usize>) {
        self.stats.steps += 1;
        let event = StepEvent {
            action,
            row,
            col,
            board: &self.board,
        };
        log::trace!("{event}");
        self.sink.record(event);
    }
}
