//! Request validation and search limits for the boundary layer.

use std::{
    ops::RangeInclusive,
    time::{Duration, Instant},
};

use nqueens_core::BoardSize;
use nqueens_solver::{Deadline, StepLimit};

use crate::RequestError;

/// Settings applied to every solve request.
///
/// The solver itself accepts any positive size; `size_range` is a display
/// constraint of the boundary, defaulting to the 4–12 range the board viewer
/// supports.
///
/// # Examples
///
/// ```
/// use nqueens_app::{RequestError, SolveSettings};
///
/// let settings = SolveSettings::default();
/// assert_eq!(settings.validate(8)?.get(), 8);
/// assert!(matches!(settings.validate(3), Err(RequestError::OutOfRange { .. })));
/// assert!(matches!(settings.validate(-1), Err(RequestError::InvalidSize(_))));
/// # Ok::<(), RequestError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveSettings {
    /// Accepted board sizes.
    pub size_range: RangeInclusive<usize>,
    /// Maximum number of trace records before the search is aborted.
    pub max_steps: Option<usize>,
    /// Wall-clock budget for one search.
    pub timeout: Option<Duration>,
}

impl Default for SolveSettings {
    fn default() -> Self {
        Self {
            size_range: 4..=12,
            max_steps: None,
            timeout: None,
        }
    }
}

impl SolveSettings {
    /// Checks a wire size against the positivity rule and `size_range`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidSize`] if `n` is not positive, and
    /// [`RequestError::OutOfRange`] if it lies outside `size_range`.
    pub fn validate(&self, n: i64) -> Result<BoardSize, RequestError> {
        let size = BoardSize::try_from_i64(n)?;
        if !self.size_range.contains(&size.get()) {
            return Err(RequestError::OutOfRange {
                n: size.get(),
                min: *self.size_range.start(),
                max: *self.size_range.end(),
            });
        }
        Ok(size)
    }

    /// Builds the search limit for a request starting now.
    ///
    /// A timeout too large to represent as an [`Instant`] is treated as no
    /// timeout.
    #[must_use]
    pub fn limit(&self) -> (Option<StepLimit>, Option<Deadline>) {
        let steps = self.max_steps.map(StepLimit::new);
        let deadline = self
            .timeout
            .and_then(|timeout| Instant::now().checked_add(timeout))
            .map(Deadline::at);
        (steps, deadline)
    }
}
