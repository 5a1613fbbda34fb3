//! Game session management.
//!
//! [`GameSession`] owns the board and tracks whose turn it is, which square
//! is selected, and whether play has ended. Every mutation of game state
//! goes through it; there is no ambient or global state.

use crate::movegen::{destinations_of, has_any_move};
use crate::{Board, EngineError};
use chess_core::{PieceKind, Side, Square};

/// Status of a session, evaluated for the side to move.
///
/// The terminal conditions deliberately do not distinguish checkmate from
/// stalemate: a side with no pseudo-legal move is simply stuck. Callers
/// wanting "check" in their display text can layer
/// [`is_king_in_check`](crate::is_king_in_check) on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Play continues.
    InProgress,
    /// The named side has no pseudo-legal move left.
    NoMoves(Side),
    /// The named side has no king on the board and has lost.
    MissingKing(Side),
}

impl GameStatus {
    /// Returns true if play can no longer continue.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A single game in progress.
///
/// Exactly one live session exists per play. It is created fresh by
/// [`GameSession::new`] and replaced wholesale by [`GameSession::reset`];
/// nothing persists across resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    active_side: Side,
    selected_square: Option<Square>,
    status: GameStatus,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with the standard starting position, White to
    /// move, nothing selected.
    pub fn new() -> Self {
        GameSession {
            board: Board::standard(),
            active_side: Side::White,
            selected_square: None,
            status: GameStatus::InProgress,
        }
    }

    /// Creates a session from a custom board with `active_side` to move.
    ///
    /// The status is evaluated immediately, so a position that leaves
    /// `active_side` without a move (or without a king) starts terminal.
    pub fn from_board(board: Board, active_side: Side) -> Self {
        let mut session = GameSession {
            board,
            active_side,
            selected_square: None,
            status: GameStatus::InProgress,
        };
        session.refresh_status();
        session
    }

    /// Restores the standard starting position, discarding all state.
    pub fn reset(&mut self) {
        *self = GameSession::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side whose turn it is.
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the currently selected square, if any.
    pub fn selected_square(&self) -> Option<Square> {
        self.selected_square
    }

    /// Returns the destinations for the piece at `square`.
    ///
    /// Unlike [`legal_destinations`](crate::legal_destinations) this never
    /// errors: an empty square yields an empty set, as does a piece with
    /// nowhere to go.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        match self.board.get(square) {
            Some(piece) => destinations_of(&self.board, square, piece),
            None => Vec::new(),
        }
    }

    /// Records `square` as the selection if it holds a piece of the active
    /// side and returns that piece's destinations; any other square clears
    /// the selection and returns `None`.
    pub fn select(&mut self, square: Square) -> Option<Vec<Square>> {
        match self.board.get(square) {
            Some(piece) if piece.side == self.active_side => {
                self.selected_square = Some(square);
                Some(destinations_of(&self.board, square, piece))
            }
            _ => {
                self.selected_square = None;
                None
            }
        }
    }

    /// Executes the move `from` → `to` for the active side.
    ///
    /// On success the piece leaves `from` with `has_moved` set, any piece
    /// on `to` is captured, a pawn reaching its promotion rank becomes a
    /// queen, the selection is cleared, the turn passes to the other side,
    /// and the status is re-evaluated for that side. All checks happen
    /// before any mutation, so a failed call leaves the session untouched.
    pub fn execute(&mut self, from: Square, to: Square) -> Result<(), EngineError> {
        if self.is_terminal() {
            return Err(EngineError::GameAlreadyOver);
        }
        let piece = match self.board.get(from) {
            Some(piece) if piece.side == self.active_side => piece,
            _ => return Err(EngineError::IllegalMove { from, to }),
        };
        if !destinations_of(&self.board, from, piece).contains(&to) {
            return Err(EngineError::IllegalMove { from, to });
        }

        let mut moved = piece;
        moved.has_moved = true;
        if moved.kind == PieceKind::Pawn && to.row() == moved.side.promotion_rank() {
            moved.kind = PieceKind::Queen;
        }
        self.board.set(from, None);
        self.board.set(to, Some(moved));

        self.selected_square = None;
        self.active_side = self.active_side.opposite();
        self.refresh_status();
        Ok(())
    }

    /// Re-evaluates the status for the current active side.
    fn refresh_status(&mut self) {
        self.status = if self.board.king_square(self.active_side).is_none() {
            GameStatus::MissingKing(self.active_side)
        } else if !has_any_move(&self.board, self.active_side) {
            GameStatus::NoMoves(self.active_side)
        } else {
            GameStatus::InProgress
        };
    }
}
