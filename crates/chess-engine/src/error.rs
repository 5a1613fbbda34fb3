//! Error types for engine operations.

use chess_core::Square;
use thiserror::Error;

/// Errors returned by engine operations.
///
/// Every condition is local and recoverable: an interactive client rejects
/// the offending input and re-prompts without losing session state. Nothing
/// here is retried internally and nothing panics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A square was selected that does not hold a piece.
    #[error("no piece to select at {0}")]
    InvalidSelection(Square),

    /// The destination is not reachable from the source, or the source does
    /// not hold a piece of the side to move.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// A state-mutating call arrived after the game had already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}
