//! Pseudo-legal chess engine with an 8x8 array board.
//!
//! This crate provides:
//! - [`Board`] - 8x8 grid of optional pieces with the standard setup
//! - Movement rules: [`legal_destinations`], [`all_moves`], [`has_any_move`]
//! - [`GameSession`] - turn, selection, and terminal-state tracking
//! - [`is_king_in_check`] - a display-only check predicate
//!
//! # Architecture
//!
//! The engine is pseudo-legal: destinations obey piece movement and
//! occupancy rules but are not filtered for king safety, and a game ends
//! exactly when the side to move has no destination anywhere (checkmate and
//! stalemate are not distinguished). Capturing a king is never generated.
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_engine::GameSession;
//!
//! let mut session = GameSession::new();
//! let from = Square::new(6, 4).unwrap();
//! let to = Square::new(4, 4).unwrap();
//! assert!(session.legal_destinations(from).contains(&to));
//! session.execute(from, to).unwrap();
//! ```

mod board;
mod error;
pub mod movegen;
mod session;

pub use board::Board;
pub use error::EngineError;
pub use movegen::{all_moves, has_any_move, is_king_in_check, legal_destinations};
pub use session::{GameSession, GameStatus};
