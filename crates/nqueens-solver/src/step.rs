use std::fmt;

use nqueens_core::{Board, BoardSize};

/// The kind of decision a [`StepRecord`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum StepAction {
    /// A queen was placed on a legal cell.
    #[display("PLACE")]
    Place,
    /// The most recent queen was removed after all of its branches failed.
    #[display("BACKTRACK")]
    Backtrack,
    /// Every row holds a queen; the search stops.
    #[display("SOLUTION_FOUND")]
    SolutionFound,
}

/// A borrowed view of a decision, handed to a [`StepSink`](crate::StepSink)
/// while the search is running.
///
/// `board` refers to the live board. Sinks that keep history must copy it,
/// typically via [`to_record`](Self::to_record).
#[derive(Debug, Clone, Copy)]
pub struct StepEvent<'a> {
    /// What happened.
    pub action: StepAction,
    /// Row of the queen placed or removed, or `N` for [`StepAction::SolutionFound`].
    pub row: usize,
    /// Column of the queen placed or removed; `None` for [`StepAction::SolutionFound`].
    pub col: Option<usize>,
    /// The live board after the decision.
    pub board: &'a Board,
}

impl StepEvent<'_> {
    /// Copies the event into an owned record.
    #[must_use]
    pub fn to_record(&self) -> StepRecord {
        StepRecord {
            action: self.action,
            row: self.row,
            col: self.col,
            board: self.board.clone(),
        }
    }
}

impl fmt::Display for StepEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} row={}", self.action, self.row)?;
        if let Some(col) = self.col {
            write!(f, " col={col}")?;
        }
        write!(f, " positions={:?}", self.board.to_signed())
    }
}

/// One immutable entry of a search trace.
///
/// The record owns a snapshot of the board taken at the moment of the
/// decision:
///
/// - [`StepAction::Place`]: after the queen at (`row`, `col`) was placed.
/// - [`StepAction::Backtrack`]: after the queen at (`row`, `col`) was removed.
/// - [`StepAction::SolutionFound`]: the complete board; `row` is `N` and `col`
///   is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepRecord {
    action: StepAction,
    row: usize,
    col: Option<usize>,
    board: Board,
}

impl StepRecord {
    /// Returns the kind of decision.
    #[inline]
    #[must_use]
    pub fn action(&self) -> StepAction {
        self.action
    }

    /// Returns the row of the decision.
    #[inline]
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of the decision, if it concerns a single cell.
    #[inline]
    #[must_use]
    pub fn col(&self) -> Option<usize> {
        self.col
    }

    /// Returns the board snapshot.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board size.
    #[inline]
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = StepEvent {
            action: self.action,
            row: self.row,
            col: self.col,
            board: &self.board,
        };
        fmt::Display::fmt(&event, f)
    }
}
