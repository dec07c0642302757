//! Request handling between the wire DTOs and the solver.

use nqueens_core::InvalidBoardSize;
use nqueens_solver::{BacktrackSolver, SearchResult};

use crate::{
    SolveSettings,
    dto::{SolveRequestDto, SolveResponseDto},
};

/// Errors reported to the caller instead of a trace.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum RequestError {
    /// `N` is not a positive integer.
    #[display("invalid board size: {_0}")]
    InvalidSize(#[from] InvalidBoardSize),
    /// `N` is outside the configured range.
    #[display("N must be between {min} and {max}, got {n}")]
    OutOfRange {
        /// Requested size.
        n: usize,
        /// Smallest accepted size.
        min: usize,
        /// Largest accepted size.
        max: usize,
    },
    /// The step or time budget ran out before the search finished.
    #[display("search aborted after {steps} steps: resource limit exceeded")]
    Aborted {
        /// Records emitted before the abort.
        steps: usize,
    },
}

/// Validates `request`, runs the search under `settings`, and returns the result.
///
/// # Errors
///
/// Returns [`RequestError::InvalidSize`] or [`RequestError::OutOfRange`]
/// before any search work, and [`RequestError::Aborted`] if a limit from
/// `settings` stops the search.
pub fn run_request(
    request: SolveRequestDto,
    settings: &SolveSettings,
) -> Result<SearchResult, RequestError> {
    let size = settings.validate(request.n)?;
    let solver = BacktrackSolver::with_limit(settings.limit());
    let result = solver.solve_sized(size);
    if result.outcome().is_aborted() {
        log::warn!("request for N={size} exceeded its limits");
        return Err(RequestError::Aborted {
            steps: result.steps().len(),
        });
    }
    log::info!(
        "solved N={size}: outcome={}, steps={}",
        result.outcome(),
        result.steps().len()
    );
    Ok(result)
}

/// Like [`run_request`], converting the result to its wire form.
///
/// # Errors
///
/// See [`run_request`].
///
/// # Examples
///
/// ```
/// use nqueens_app::{SolveSettings, dto::SolveRequestDto, solve_request};
///
/// let response = solve_request(SolveRequestDto { n: 4 }, &SolveSettings::default())?;
/// assert!(response.solution_found);
/// assert_eq!(response.final_solution, vec![1, 3, 0, 2]);
/// # Ok::<(), nqueens_app::RequestError>(())
/// ```
pub fn solve_request(
    request: SolveRequestDto,
    settings: &SolveSettings,
) -> Result<SolveResponseDto, RequestError> {
    run_request(request, settings).map(|result| SolveResponseDto::from(&result))
}
