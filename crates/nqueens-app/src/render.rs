//! Plain-text rendering of traces and results.

use std::fmt;

use nqueens_solver::{SearchResult, StepRecord};

/// One trace record shown as a header line followed by the board.
///
/// `index` is zero-based; the header shows it one-based.
#[derive(Debug, Clone, Copy)]
pub struct StepFrame<'a> {
    /// Zero-based position of the record in its trace.
    pub index: usize,
    /// Length of the trace.
    pub total: usize,
    /// The record to show.
    pub step: &'a StepRecord,
}

impl fmt::Display for StepFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.step;
        let number = self.index + 1;
        write!(f, "step {number}/{}: {} row={}", self.total, step.action(), step.row())?;
        if let Some(col) = step.col() {
            write!(f, " col={col}")?;
        }
        write!(f, "\n{}", step.board())
    }
}

/// The outcome, counters, and final board of a search.
#[derive(Debug, Clone, Copy)]
pub struct SummaryView<'a>(pub &'a SearchResult);

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let stats = result.stats();
        writeln!(f, "N: {}", result.size())?;
        writeln!(f, "Outcome: {}", result.outcome())?;
        writeln!(f, "Steps: {}", stats.steps())?;
        writeln!(f, "Placements: {}", stats.placements())?;
        writeln!(f, "Backtracks: {}", stats.backtracks())?;
        writeln!(f, "Candidates checked: {}", stats.candidates_checked())?;
        match result.solution() {
            Some(board) => write!(f, "Solution: {:?}\n{board}", board.to_signed()),
            None => f.write_str("Solution: none"),
        }
    }
}

/// Renders one trace record as a header line followed by the board.
///
/// # Examples
///
/// ```
/// use nqueens_app::render::render_step;
/// use nqueens_solver::solve;
///
/// let result = solve(1)?;
/// assert_eq!(
///     render_step(0, result.steps().len(), &result.steps()[0]),
///     "step 1/2: PLACE row=0 col=0\nQ"
/// );
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[must_use]
pub fn render_step(index: usize, total: usize, step: &StepRecord) -> String {
    StepFrame { index, total, step }.to_string()
}

/// Renders the outcome, counters, and final board of a search.
#[must_use]
pub fn render_summary(result: &SearchResult) -> String {
    SummaryView(result).to_string()
}

#[cfg(test)]
mod tests {
    use nqueens_solver::solve;

    use super::*;

    #[test]
    fn test_render_backtrack_step() {
        let result = solve(2).unwrap();
        assert_eq!(
            render_step(1, 4, &result.steps()[1]),
            "step 2/4: BACKTRACK row=0 col=0\n. .\n. ."
        );
    }

    #[test]
    fn test_render_solution_step() {
        let result = solve(4).unwrap();
        let last = result.steps().last().unwrap();
        assert_eq!(
            render_step(12, 13, last),
            "step 13/13: SOLUTION_FOUND row=4\n. Q . .\n. . . Q\nQ . . .\n. . Q ."
        );
    }

    #[test]
    fn test_render_summary() {
        let solved = render_summary(&solve(4).unwrap());
        assert!(solved.starts_with("N: 4\nOutcome: solved\nSteps: 13\n"));
        assert!(solved.contains("Backtracks: 4\n"));
        assert!(solved.contains("Solution: [1, 3, 0, 2]\n. Q . ."));

        let unsolved = render_summary(&solve(3).unwrap());
        assert!(unsolved.contains("Outcome: no solution"));
        assert!(unsolved.ends_with("Solution: none"));
    }

    #[test]
    fn test_frames_write_into_formatter() {
        let result = solve(1).unwrap();
        let frames: Vec<_> = result
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}", StepFrame { index, total: 2, step }))
            .collect();
        assert_eq!(
            frames,
            ["step 1/2: PLACE row=0 col=0\nQ", "step 2/2: SOLUTION_FOUND row=1\nQ"]
        );
        assert_eq!(SummaryView(&result).to_string(), render_summary(&result));
    }
}
