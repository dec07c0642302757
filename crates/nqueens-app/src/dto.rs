//! Serializable request and response shapes.
//!
//! Field and action names follow the wire contract consumed by the board
//! viewer: actions are `COLOCAR`, `RETROCEDER`, and `SOLUCION_ENCONTRADA`,
//! and unplaced rows are `-1`.

use nqueens_solver::{SearchResult, StepAction, StepRecord};
use serde::{Deserialize, Serialize};

/// A request to solve an `N`×`N` board.
///
/// `N` is signed on the wire so that negative input can be rejected with a
/// proper error instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequestDto {
    /// Requested board size.
    #[serde(rename = "N")]
    pub n: i64,
}

/// Wire name of a trace action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionDto {
    /// A queen was placed.
    #[serde(rename = "COLOCAR")]
    Place,
    /// A queen was removed.
    #[serde(rename = "RETROCEDER")]
    Backtrack,
    /// The board is complete.
    #[serde(rename = "SOLUCION_ENCONTRADA")]
    SolutionFound,
}

impl From<StepAction> for ActionDto {
    fn from(action: StepAction) -> Self {
        match action {
            StepAction::Place => Self::Place,
            StepAction::Backtrack => Self::Backtrack,
            StepAction::SolutionFound => Self::SolutionFound,
        }
    }
}

/// One trace record on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecordDto {
    /// What happened.
    pub action: ActionDto,
    /// Row of the decision.
    pub current_row: Option<usize>,
    /// Column of the decision; `null` for a solution record.
    pub current_col: Option<usize>,
    /// Board size.
    #[serde(rename = "N")]
    pub n: usize,
    /// Column per row, `-1` when unplaced.
    pub queens_positions: Vec<i64>,
}

impl From<&StepRecord> for StepRecordDto {
    fn from(step: &StepRecord) -> Self {
        Self {
            action: step.action().into(),
            current_row: Some(step.row()),
            current_col: step.col(),
            n: step.size().get(),
            queens_positions: step.board().to_signed(),
        }
    }
}

/// A completed search on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponseDto {
    /// Board size.
    #[serde(rename = "N")]
    pub n: usize,
    /// Whether a complete placement was found.
    pub solution_found: bool,
    /// Column per row of the solution; empty when none was found.
    pub final_solution: Vec<usize>,
    /// The ordered trace.
    pub steps: Vec<StepRecordDto>,
}

impl From<&SearchResult> for SolveResponseDto {
    fn from(result: &SearchResult) -> Self {
        Self {
            n: result.size().get(),
            solution_found: result.solution_found(),
            final_solution: result
                .solution()
                .and_then(nqueens_core::Board::columns)
                .unwrap_or_default(),
            steps: result.steps().iter().map(StepRecordDto::from).collect(),
        }
    }
}

/// An error on the wire, distinguishable from a trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    /// Human-readable description.
    pub detail: String,
}

impl ErrorDto {
    /// Creates an error DTO from any displayable error.
    #[must_use]
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self {
            detail: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use nqueens_solver::solve;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_wire_name() {
        let request: SolveRequestDto = serde_json::from_value(json!({ "N": 8 })).unwrap();
        assert_eq!(request, SolveRequestDto { n: 8 });

        let negative: SolveRequestDto = serde_json::from_str(r#"{"N": -2}"#).unwrap();
        assert_eq!(negative.n, -2);
    }

    #[test]
    fn test_one_queen_response() {
        let result = solve(1).unwrap();
        let value = serde_json::to_value(SolveResponseDto::from(&result)).unwrap();
        assert_eq!(
            value,
            json!({
                "N": 1,
                "solution_found": true,
                "final_solution": [0],
                "steps": [
                    {
                        "action": "COLOCAR",
                        "current_row": 0,
                        "current_col": 0,
                        "N": 1,
                        "queens_positions": [0],
                    },
                    {
                        "action": "SOLUCION_ENCONTRADA",
                        "current_row": 1,
                        "current_col": null,
                        "N": 1,
                        "queens_positions": [0],
                    },
                ],
            })
        );
    }

    #[test]
    fn test_no_solution_response() {
        let result = solve(2).unwrap();
        let response = SolveResponseDto::from(&result);
        assert!(!response.solution_found);
        assert!(response.final_solution.is_empty());

        let last = response.steps.last().unwrap();
        assert_eq!(last.action, ActionDto::Backtrack);
        assert_eq!(last.current_row, Some(0));
        assert_eq!(last.queens_positions, vec![-1, -1]);
    }

    #[test]
    fn test_action_names() {
        assert_eq!(
            serde_json::to_string(&ActionDto::Backtrack).unwrap(),
            r#""RETROCEDER""#
        );
        let parsed: ActionDto = serde_json::from_str(r#""SOLUCION_ENCONTRADA""#).unwrap();
        assert_eq!(parsed, ActionDto::SolutionFound);
    }

    #[test]
    fn test_error_dto() {
        let error = nqueens_core::InvalidBoardSize::Zero;
        let value = serde_json::to_value(ErrorDto::from_error(&error)).unwrap();
        assert_eq!(value, json!({ "detail": "board size must be positive, got 0" }));
    }
}
