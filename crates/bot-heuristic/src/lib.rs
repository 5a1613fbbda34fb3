//! Difficulty-biased opponent policy.
//!
//! Enumerates every pseudo-legal move for a side and picks one, preferring
//! captures in proportion to the configured difficulty. There is no
//! look-ahead: a candidate is scored only by whether its destination is
//! occupied, plus a random perturbation, so repeated calls on the same
//! board may pick different moves. The random source is injected so tests
//! and replays can fix the seed.

use chess_core::{Move, Side};
use chess_engine::{all_moves, Board, GameSession};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Errors returned by policy configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BotError {
    /// Difficulty outside the recognized 1-5 range.
    #[error("difficulty out of range 1-5: {0}")]
    InvalidConfig(i32),
}

/// How strongly the policy prefers capturing moves: 1 plays uniformly at
/// random, 5 takes a capture whenever the dice allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(1);
    pub const MAX: Difficulty = Difficulty(5);

    /// Validates a raw difficulty value from the UI.
    pub const fn new(value: i32) -> Result<Self, BotError> {
        if value >= 1 && value <= 5 {
            Ok(Difficulty(value as u8))
        } else {
            Err(BotError::InvalidConfig(value))
        }
    }

    /// Returns the raw value (1-5).
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty(3)
    }
}

/// Score bonus per difficulty step for a capturing move, relative to the
/// 0..1 noise term every candidate draws. Kept below 1/4 so that even at
/// maximum difficulty a quiet move occasionally outscores a capture.
const CAPTURE_WEIGHT: f64 = 0.2;

/// Picks a move for `side`, or `None` if it has no pseudo-legal move.
///
/// Every candidate draws a uniform noise score; candidates landing on an
/// occupied square additionally receive `CAPTURE_WEIGHT * (difficulty - 1)`.
/// The highest score wins, so difficulty 1 is uniform random selection.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let capture_bonus = CAPTURE_WEIGHT * f64::from(difficulty.get() - 1);
    all_moves(board, side)
        .into_iter()
        .map(|candidate| {
            let mut score = rng.random_range(0.0..1.0);
            if board.get(candidate.to()).is_some() {
                score += capture_bonus;
            }
            (candidate, score)
        })
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(candidate, _)| candidate)
}

/// A move-selection policy for one side.
///
/// The UI client can hold the opponent as a trait object and swap policies
/// without touching the game loop.
pub trait MoveSelector {
    /// Picks a move for `side` on `board`, or `None` when no move exists.
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<Move>;
}

/// The default opponent: [`choose_move`] bundled with a difficulty and an
/// owned random generator.
#[derive(Debug, Clone)]
pub struct HeuristicBot {
    difficulty: Difficulty,
    rng: StdRng,
}

impl HeuristicBot {
    /// Creates a bot seeded from the operating system.
    pub fn new(difficulty: Difficulty) -> Self {
        HeuristicBot {
            difficulty,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a bot with a fixed seed, for reproducible games and tests.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        HeuristicBot {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Picks a reply for the session's active side.
    ///
    /// Returns `None` once the session is terminal or the active side has
    /// no move; the caller is expected to pass the result to
    /// [`GameSession::execute`].
    pub fn respond(&mut self, session: &GameSession) -> Option<Move> {
        if session.is_terminal() {
            return None;
        }
        choose_move(
            session.board(),
            session.active_side(),
            self.difficulty,
            &mut self.rng,
        )
    }
}

impl MoveSelector for HeuristicBot {
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        choose_move(board, side, self.difficulty, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn difficulty_range_is_enforced() {
        assert!(Difficulty::new(1).is_ok());
        assert!(Difficulty::new(5).is_ok());
        assert_eq!(Difficulty::new(0), Err(BotError::InvalidConfig(0)));
        assert_eq!(Difficulty::new(6), Err(BotError::InvalidConfig(6)));
        assert_eq!(Difficulty::new(-3), Err(BotError::InvalidConfig(-3)));
        assert_eq!(Difficulty::default().get(), 3);
    }

    #[test]
    fn no_pieces_means_no_move() {
        let board = Board::empty();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            choose_move(&board, Side::Black, Difficulty::default(), &mut rng),
            None
        );
    }

    #[test]
    fn chosen_move_is_always_enumerated() {
        let board = Board::standard();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mv = choose_move(&board, Side::Black, Difficulty::MAX, &mut rng).unwrap();
            assert!(all_moves(&board, Side::Black).contains(&mv));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::standard();
        let mut first = HeuristicBot::with_seed(Difficulty::default(), 99);
        let mut second = HeuristicBot::with_seed(Difficulty::default(), 99);
        for _ in 0..20 {
            assert_eq!(
                first.choose_move(&board, Side::White),
                second.choose_move(&board, Side::White)
            );
        }
    }

    #[test]
    fn low_difficulty_varies_its_choices() {
        let board = Board::standard();
        let mut bot = HeuristicBot::with_seed(Difficulty::MIN, 3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            seen.insert(bot.choose_move(&board, Side::White).unwrap());
        }
        // 20 equally likely openings; 50 uniform draws cannot keep hitting
        // one of them.
        assert!(seen.len() > 1);
    }

    #[test]
    fn respond_is_none_once_terminal() {
        let mut board = Board::empty();
        board.set(sq(7, 4), Some(Piece::new(PieceKind::King, Side::White)));
        board.set(sq(0, 0), Some(Piece::new(PieceKind::Rook, Side::Black)));
        let session = GameSession::from_board(board, Side::Black);
        assert!(session.is_terminal());

        let mut bot = HeuristicBot::with_seed(Difficulty::default(), 1);
        assert_eq!(bot.respond(&session), None);
    }
}
