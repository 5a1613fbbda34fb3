//! Pseudo-legal move generation.
//!
//! Destinations obey piece movement and occupancy rules but are not
//! filtered for whether the mover's own king ends up attacked. Two
//! occupancy rules apply everywhere: a same-side piece blocks a
//! destination, and the opposing king is never a legal destination.

use crate::{Board, EngineError};
use chess_core::{Move, Piece, PieceKind, Side, Square};

/// Knight jump offsets.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King step offsets, also the queen's ray directions.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Computes the pseudo-legal destinations for the piece at `origin`.
///
/// Returns [`EngineError::InvalidSelection`] if `origin` is empty; an
/// immobile piece yields an empty, non-error set. The result holds no
/// duplicates and every square is on the board.
pub fn legal_destinations(board: &Board, origin: Square) -> Result<Vec<Square>, EngineError> {
    match board.get(origin) {
        Some(piece) => Ok(destinations_of(board, origin, piece)),
        None => Err(EngineError::InvalidSelection(origin)),
    }
}

/// Destination set for a piece already known to sit at `origin`.
pub(crate) fn destinations_of(board: &Board, origin: Square, piece: Piece) -> Vec<Square> {
    let mut destinations = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, origin, piece, &mut destinations),
        PieceKind::Knight => {
            step_destinations(board, origin, piece.side, &KNIGHT_OFFSETS, &mut destinations)
        }
        PieceKind::King => {
            step_destinations(board, origin, piece.side, &KING_OFFSETS, &mut destinations)
        }
        PieceKind::Rook => {
            slide_destinations(board, origin, piece.side, &ROOK_DIRECTIONS, &mut destinations)
        }
        PieceKind::Bishop => slide_destinations(
            board,
            origin,
            piece.side,
            &BISHOP_DIRECTIONS,
            &mut destinations,
        ),
        PieceKind::Queen => {
            slide_destinations(board, origin, piece.side, &KING_OFFSETS, &mut destinations)
        }
    }
    destinations
}

/// True if a piece of `side` may land on `square`: it is empty or holds an
/// opposing piece other than the king.
fn can_land(board: &Board, side: Side, square: Square) -> bool {
    match board.get(square) {
        None => true,
        Some(occupant) => occupant.side != side && occupant.kind != PieceKind::King,
    }
}

fn pawn_destinations(board: &Board, origin: Square, piece: Piece, out: &mut Vec<Square>) {
    let dir = piece.side.pawn_direction();

    // Straight pushes never capture.
    if let Some(ahead) = origin.offset(dir, 0) {
        if board.get(ahead).is_none() {
            out.push(ahead);
            if !piece.has_moved {
                if let Some(two_ahead) = ahead.offset(dir, 0) {
                    if board.get(two_ahead).is_none() {
                        out.push(two_ahead);
                    }
                }
            }
        }
    }

    // Diagonal steps only onto an opposing non-king piece.
    for d_col in [-1, 1] {
        if let Some(target) = origin.offset(dir, d_col) {
            if let Some(occupant) = board.get(target) {
                if occupant.side != piece.side && occupant.kind != PieceKind::King {
                    out.push(target);
                }
            }
        }
    }
}

fn step_destinations(
    board: &Board,
    origin: Square,
    side: Side,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = origin.offset(d_row, d_col) {
            if can_land(board, side, target) {
                out.push(target);
            }
        }
    }
}

/// Walks each direction one step at a time: an empty square is added and
/// the walk continues; an opposing non-king piece is added and the walk
/// stops; a same-side piece or the opposing king stops the walk without
/// being added.
fn slide_destinations(
    board: &Board,
    origin: Square,
    side: Side,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = origin;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.get(next) {
                None => {
                    out.push(next);
                    current = next;
                }
                Some(occupant) => {
                    if occupant.side != side && occupant.kind != PieceKind::King {
                        out.push(next);
                    }
                    break;
                }
            }
        }
    }
}

/// Enumerates every pseudo-legal move for `side`.
pub fn all_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces(side) {
        moves.extend(
            destinations_of(board, from, piece)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

/// Returns true if `side` has at least one pseudo-legal move, stopping at
/// the first piece that can move.
pub fn has_any_move(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .any(|(square, piece)| !destinations_of(board, square, piece).is_empty())
}

/// Returns true if an opposing piece attacks `side`'s king square.
///
/// This exists for display text only ("check"); it never gates move
/// legality or game termination. A missing king is simply not in check.
pub fn is_king_in_check(board: &Board, side: Side) -> bool {
    let Some(king) = board.king_square(side) else {
        return false;
    };
    board
        .pieces(side.opposite())
        .any(|(square, piece)| attacks_square(board, square, piece, king))
}

/// True if the piece at `origin` attacks `target`, ignoring the rule that
/// kings cannot be captured (a king square must be attackable for the
/// check predicate to mean anything).
fn attacks_square(board: &Board, origin: Square, piece: Piece, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => {
            let dir = piece.side.pawn_direction();
            [-1, 1]
                .into_iter()
                .any(|d_col| origin.offset(dir, d_col) == Some(target))
        }
        PieceKind::Knight => KNIGHT_OFFSETS
            .iter()
            .any(|&(d_row, d_col)| origin.offset(d_row, d_col) == Some(target)),
        PieceKind::King => KING_OFFSETS
            .iter()
            .any(|&(d_row, d_col)| origin.offset(d_row, d_col) == Some(target)),
        PieceKind::Rook => attacks_along(board, origin, &ROOK_DIRECTIONS, target),
        PieceKind::Bishop => attacks_along(board, origin, &BISHOP_DIRECTIONS, target),
        PieceKind::Queen => attacks_along(board, origin, &KING_OFFSETS, target),
    }
}

fn attacks_along(
    board: &Board,
    origin: Square,
    directions: &[(i8, i8)],
    target: Square,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut current = origin;
        while let Some(next) = current.offset(d_row, d_col) {
            if next == target {
                return true;
            }
            if board.get(next).is_some() {
                break;
            }
            current = next;
        }
    }
    false
}
