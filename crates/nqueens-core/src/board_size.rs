//! Validated board dimension.

use std::{fmt, num::NonZero};

/// The side length `N` of an N×N board.
///
/// Any positive size is accepted. The solver places no upper bound on `N`, but
/// search cost grows super-exponentially with the size; callers that need
/// bounded latency should pair large sizes with a search limit.
///
/// # Examples
///
/// ```
/// use nqueens_core::{BoardSize, InvalidBoardSize};
///
/// let size = BoardSize::new(8)?;
/// assert_eq!(size.get(), 8);
/// assert_eq!(size.diagonal_count(), 15);
///
/// assert_eq!(BoardSize::new(0), Err(InvalidBoardSize::Zero));
/// assert_eq!(BoardSize::try_from_i64(-3), Err(InvalidBoardSize::Negative { value: -3 }));
/// # Ok::<(), InvalidBoardSize>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(NonZero<usize>);

/// Errors returned when a board size is not a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidBoardSize {
    /// The size was zero.
    #[display("board size must be positive, got 0")]
    Zero,
    /// The size was negative.
    #[display("board size must be positive, got {value}")]
    Negative {
        /// The rejected value.
        value: i64,
    },
    /// The size does not fit in the platform's address space.
    #[display("board size {value} is too large for this platform")]
    Overflow {
        /// The rejected value.
        value: i64,
    },
}

impl BoardSize {
    /// Creates a board size.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardSize::Zero`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self, InvalidBoardSize> {
        NonZero::new(n).map(Self).ok_or(InvalidBoardSize::Zero)
    }

    /// Creates a board size from a signed wire value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardSize::Negative`] for negative input,
    /// [`InvalidBoardSize::Zero`] for zero, and [`InvalidBoardSize::Overflow`]
    /// if the value does not fit in `usize`.
    pub fn try_from_i64(value: i64) -> Result<Self, InvalidBoardSize> {
        if value < 0 {
            return Err(InvalidBoardSize::Negative { value });
        }
        let n = usize::try_from(value).map_err(|_| InvalidBoardSize::Overflow { value })?;
        Self::new(n)
    }

    /// Returns `N`.
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the number of diagonals in one direction (`2N - 1`).
    #[inline]
    #[must_use]
    pub const fn diagonal_count(self) -> usize {
        2 * self.0.get() - 1
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = InvalidBoardSize;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> usize {
        size.get()
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}
