use nqueens_core::InvalidBoardSize;

/// Errors reported by the solver before any search work begins.
///
/// Running out of options is not an error: a search that finds no placement
/// returns a [`SearchResult`](crate::SearchResult) with
/// [`SearchOutcome::NoSolution`](crate::SearchOutcome::NoSolution).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The requested board size is not a positive integer.
    #[display("invalid input: {_0}")]
    InvalidInput(#[from] InvalidBoardSize),
}
