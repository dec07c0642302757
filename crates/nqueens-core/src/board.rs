//! Row-indexed queen positions.

use std::fmt::{self, Display, Write as _};

use crate::{BoardSize, InvalidBoardSize};

/// Queen positions on an N×N board, at most one queen per row.
///
/// `positions[row]` is the column of the queen in `row`, or `None` when the row
/// is unplaced. Cloning a board produces an independent snapshot; later
/// mutation of the original never affects the clone.
///
/// # Examples
///
/// ```
/// use nqueens_core::{Board, BoardSize};
///
/// let mut board = Board::new(BoardSize::new(4)?);
/// board.set(0, 1);
/// board.set(1, 3);
///
/// assert_eq!(board.get(0), Some(1));
/// assert_eq!(board.get(2), None);
/// assert_eq!(board.to_signed(), vec![1, 3, -1, -1]);
/// assert!(!board.has_conflict());
///
/// assert_eq!(
///     board.to_string(),
///     ". Q . .\n. . . Q\n. . . .\n. . . ."
/// );
/// # Ok::<(), nqueens_core::InvalidBoardSize>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: BoardSize,
    positions: Vec<Option<usize>>,
}

impl Board {
    /// Wire value for an unplaced row.
    pub const UNPLACED: i64 = -1;

    /// Creates a board with every row unplaced.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            positions: vec![None; size.get()],
        }
    }

    /// Builds a board from per-row columns.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardSize::Zero`] if `positions` is empty.
    ///
    /// # Panics
    ///
    /// Panics if any column is outside the board.
    pub fn from_positions(positions: Vec<Option<usize>>) -> Result<Self, InvalidBoardSize> {
        let size = BoardSize::new(positions.len())?;
        for col in positions.iter().flatten() {
            assert!(
                *col < size.get(),
                "Column must be less than {size}, got {col}"
            );
        }
        Ok(Self { size, positions })
    }

    /// Returns the board size.
    #[inline]
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the column of the queen in `row`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the board.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize) -> Option<usize> {
        self.positions[row]
    }

    /// Places a queen at `(row, col)`, replacing any queen already in `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize) {
        assert!(
            col < self.size.get(),
            "Column must be less than {}, got {col}",
            self.size
        );
        self.positions[row] = Some(col);
    }

    /// Removes the queen from `row`, returning its column.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the board.
    #[inline]
    pub fn clear(&mut self, row: usize) -> Option<usize> {
        self.positions[row].take()
    }

    /// Returns the per-row columns.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Option<usize>] {
        &self.positions
    }

    /// Iterates over placed queens as `(row, col)` pairs in row order.
    pub fn placed(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|col| (row, col)))
    }

    /// Returns the number of placed queens.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.positions.iter().flatten().count()
    }

    /// Returns `true` if every row holds a queen.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.positions.iter().all(Option::is_some)
    }

    /// Returns the columns of a complete board, or `None` if any row is unplaced.
    #[must_use]
    pub fn columns(&self) -> Option<Vec<usize>> {
        self.positions.iter().copied().collect()
    }

    /// Returns the wire form of the positions, with [`Board::UNPLACED`] for empty rows.
    #[must_use]
    pub fn to_signed(&self) -> Vec<i64> {
        self.positions
            .iter()
            .map(|col| {
                col.and_then(|col| i64::try_from(col).ok())
                    .unwrap_or(Self::UNPLACED)
            })
            .collect()
    }

    /// Returns the first pair of queens that attack each other, if any.
    ///
    /// This performs a pairwise scan and does not rely on any incremental
    /// bookkeeping, so it can be used to cross-check a search.
    #[must_use]
    pub fn find_conflict(&self) -> Option<((usize, usize), (usize, usize))> {
        let placed: Vec<_> = self.placed().collect();
        for (i, &(r1, c1)) in placed.iter().enumerate() {
            for &(r2, c2) in &placed[i + 1..] {
                if c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2) {
                    return Some(((r1, c1), (r2, c2)));
                }
            }
        }
        None
    }

    /// Returns `true` if any two placed queens attack each other.
    #[must_use]
    pub fn has_conflict(&self) -> bool {
        self.find_conflict().is_some()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, queen) in self.positions.iter().enumerate() {
            if row > 0 {
                f.write_char('\n')?;
            }
            for col in 0..self.size.get() {
                if col > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(if *queen == Some(col) { 'Q' } else { '.' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(n: usize) -> Board {
        Board::new(BoardSize::new(n).unwrap())
    }

    #[test]
    fn test_new_is_unplaced() {
        let board = board(5);
        assert_eq!(board.positions(), &[None; 5]);
        assert_eq!(board.placed_count(), 0);
        assert!(!board.is_complete());
        assert_eq!(board.to_signed(), vec![-1; 5]);
        assert_eq!(board.columns(), None);
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = board(4);
        board.set(2, 3);
        assert_eq!(board.get(2), Some(3));
        assert_eq!(board.placed().collect::<Vec<_>>(), vec![(2, 3)]);

        assert_eq!(board.clear(2), Some(3));
        assert_eq!(board.clear(2), None);
        assert_eq!(board.placed_count(), 0);
    }

    #[test]
    fn test_clone_is_independent_snapshot() {
        let mut live = board(4);
        live.set(0, 1);
        let snapshot = live.clone();
        live.set(1, 3);
        live.clear(0);
        assert_eq!(snapshot.to_signed(), vec![1, -1, -1, -1]);
    }

    #[test]
    fn test_complete_columns() {
        let board = Board::from_positions(vec![Some(1), Some(3), Some(0), Some(2)]).unwrap();
        assert!(board.is_complete());
        assert_eq!(board.columns(), Some(vec![1, 3, 0, 2]));
        assert!(!board.has_conflict());
    }

    #[test]
    fn test_find_conflict_column() {
        let board = Board::from_positions(vec![Some(1), None, Some(1)]).unwrap();
        assert_eq!(board.find_conflict(), Some(((0, 1), (2, 1))));
    }

    #[test]
    fn test_find_conflict_diagonals() {
        let falling = Board::from_positions(vec![Some(0), Some(1), None]).unwrap();
        assert!(falling.has_conflict());

        let rising = Board::from_positions(vec![None, Some(2), None, Some(0)]).unwrap();
        assert!(rising.has_conflict());
    }

    #[test]
    fn test_from_positions_rejects_empty() {
        assert_eq!(
            Board::from_positions(Vec::new()),
            Err(InvalidBoardSize::Zero)
        );
    }

    #[test]
    #[should_panic(expected = "Column must be less than 3")]
    fn test_set_rejects_out_of_range_column() {
        board(3).set(0, 3);
    }

    #[test]
    fn test_display_single_cell() {
        let mut board = board(1);
        assert_eq!(board.to_string(), ".");
        board.set(0, 0);
        assert_eq!(board.to_string(), "Q");
    }
}
