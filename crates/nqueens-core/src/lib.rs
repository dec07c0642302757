//! Core data structures for N-Queens search.
//!
//! This crate provides the board representation and the constant-time conflict
//! bookkeeping used by the backtracking solver.
//!
//! # Overview
//!
//! - [`board_size`]: Validated board dimension ([`BoardSize`])
//! - [`board`]: Row-indexed queen positions ([`Board`])
//! - [`line_set`]: Fixed-capacity bitset over line indices ([`LineSet`])
//! - [`conflict_tracker`]: Occupied columns and diagonals ([`ConflictTracker`])
//!
//! # Examples
//!
//! ```
//! use nqueens_core::{Board, BoardSize, ConflictTracker};
//!
//! let size = BoardSize::new(4)?;
//! let mut board = Board::new(size);
//! let mut tracker = ConflictTracker::new(size);
//!
//! assert!(tracker.is_legal(0, 1));
//! tracker.place(0, 1);
//! board.set(0, 1);
//!
//! // Same column, and both diagonals through (0, 1), are now blocked.
//! assert!(!tracker.is_legal(1, 1));
//! assert!(!tracker.is_legal(1, 0));
//! assert!(!tracker.is_legal(1, 2));
//! assert!(tracker.is_legal(1, 3));
//! # Ok::<(), nqueens_core::InvalidBoardSize>(())
//! ```

pub mod board;
pub mod board_size;
pub mod conflict_tracker;
pub mod line_set;

pub use self::{
    board::Board,
    board_size::{BoardSize, InvalidBoardSize},
    conflict_tracker::ConflictTracker,
    line_set::LineSet,
};
