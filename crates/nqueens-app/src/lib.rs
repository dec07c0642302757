//! External boundary for the N-Queens trace solver.
//!
//! This crate wraps [`nqueens_solver`] with the pieces a presentation layer
//! needs: wire DTOs ([`dto`]), request validation and limits ([`settings`],
//! [`service`]), stepwise trace navigation ([`trace_cursor`]), and text
//! rendering ([`render`]). The `nqueens` binary ties them together.

pub mod dto;
pub mod render;
pub mod service;
pub mod settings;
pub mod trace_cursor;

pub use self::{
    service::{RequestError, solve_request},
    settings::SolveSettings,
    trace_cursor::TraceCursor,
};
