//! Chess piece representation.

use crate::Side;

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the index of this piece kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true if this kind slides along rays (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns the Unicode symbol for this kind in the given side's color,
    /// used when rendering a board as text.
    pub const fn symbol(self, side: Side) -> char {
        match side {
            Side::White => match self {
                PieceKind::Pawn => '♙',
                PieceKind::Knight => '♘',
                PieceKind::Bishop => '♗',
                PieceKind::Rook => '♖',
                PieceKind::Queen => '♕',
                PieceKind::King => '♔',
            },
            Side::Black => match self {
                PieceKind::Pawn => '♟',
                PieceKind::Knight => '♞',
                PieceKind::Bishop => '♝',
                PieceKind::Rook => '♜',
                PieceKind::Queen => '♛',
                PieceKind::King => '♚',
            },
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: its kind, its owner, and whether it has moved.
///
/// `has_moved` becomes true the first time the piece is relocated and gates
/// the pawn's two-square opening move. Promotion rewrites `kind` to
/// [`PieceKind::Queen`] in place; a piece otherwise keeps its identity as it
/// moves between squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub has_moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece {
            kind,
            side,
            has_moved: false,
        }
    }

    /// Returns the rendering symbol for this piece.
    #[inline]
    pub const fn symbol(self) -> char {
        self.kind.symbol(self.side)
    }
}
