//! Constant-time legality checks for queen placement.
//!
//! [`ConflictTracker`] records which columns and diagonals are attacked by the
//! queens currently on the board. A cell `(row, col)` lies on
//!
//! - column `col`,
//! - "sum" diagonal `row + col`,
//! - "difference" diagonal `row - col + (N - 1)` (offset to stay non-negative).
//!
//! A placement is legal iff none of the three lines is occupied. Since the
//! solver places at most one queen per row, rows need no tracking.

use crate::{BoardSize, LineSet};

/// Occupied columns and diagonals for the queens on a board.
///
/// The tracker only ever mirrors the live board: every [`place`] is paired with
/// a matching [`remove`] when the search retreats.
///
/// [`place`]: ConflictTracker::place
/// [`remove`]: ConflictTracker::remove
///
/// # Examples
///
/// ```
/// use nqueens_core::{BoardSize, ConflictTracker};
///
/// let mut tracker = ConflictTracker::new(BoardSize::new(4)?);
/// tracker.place(1, 1);
///
/// assert!(!tracker.is_legal(3, 1)); // column
/// assert!(!tracker.is_legal(0, 2)); // sum diagonal
/// assert!(!tracker.is_legal(3, 3)); // difference diagonal
/// assert!(tracker.is_legal(3, 2));
///
/// tracker.remove(1, 1);
/// assert!(tracker.is_empty());
/// # Ok::<(), nqueens_core::InvalidBoardSize>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictTracker {
    size: BoardSize,
    columns: LineSet,
    sum_diagonals: LineSet,
    diff_diagonals: LineSet,
}

impl ConflictTracker {
    /// Creates a tracker with no occupied lines.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            columns: LineSet::new(size.get()),
            sum_diagonals: LineSet::new(size.diagonal_count()),
            diff_diagonals: LineSet::new(size.diagonal_count()),
        }
    }

    /// Returns the board size this tracker was created for.
    #[inline]
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns `true` if a queen at `(row, col)` would not share a column or
    /// diagonal with any tracked queen.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board.
    #[inline]
    #[must_use]
    pub fn is_legal(&self, row: usize, col: usize) -> bool {
        let (sum, diff) = self.diagonals(row, col);
        !self.columns.contains(col)
            && !self.sum_diagonals.contains(sum)
            && !self.diff_diagonals.contains(diff)
    }

    /// Marks the column and both diagonals through `(row, col)` as occupied.
    ///
    /// The caller must only place on a legal cell; debug builds assert this.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board, and in debug builds if
    /// the cell is not legal.
    #[inline]
    pub fn place(&mut self, row: usize, col: usize) {
        debug_assert!(
            self.is_legal(row, col),
            "placing on attacked cell ({row}, {col})"
        );
        let (sum, diff) = self.diagonals(row, col);
        self.columns.insert(col);
        self.sum_diagonals.insert(sum);
        self.diff_diagonals.insert(diff);
    }

    /// Releases the column and both diagonals through `(row, col)`.
    ///
    /// This exactly reverses a previous [`place`](Self::place) of the same cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board, and in debug builds if
    /// the cell was not placed.
    #[inline]
    pub fn remove(&mut self, row: usize, col: usize) {
        let (sum, diff) = self.diagonals(row, col);
        let column_was_set = self.columns.remove(col);
        let sum_was_set = self.sum_diagonals.remove(sum);
        let diff_was_set = self.diff_diagonals.remove(diff);
        debug_assert!(
            column_was_set && sum_was_set && diff_was_set,
            "removing queen that was never placed at ({row}, {col})"
        );
    }

    /// Returns the number of tracked queens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no queen is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[inline]
    fn diagonals(&self, row: usize, col: usize) -> (usize, usize) {
        let n = self.size.get();
        assert!(
            row < n && col < n,
            "Cell ({row}, {col}) is outside a {n}x{n} board"
        );
        (row + col, row + (n - 1) - col)
    }
}
