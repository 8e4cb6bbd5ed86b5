//! Canonical rule constants and the tunable rule set.
//!
//! Holds the starting layout, pawn ranks, and the proven upper bound on the
//! number of destinations a single piece can be offered.

use crate::game_state::chess_types::PieceType;

/// Most destinations any one piece can reach in a single query.
///
/// A queen on d4/e4/d5/e5 of an empty board sees 7 squares along its file,
/// 7 along its rank and 13 along its two diagonals. No other piece or square
/// does better, and occupancy only shortens rays.
pub const MAX_POSSIBLE_MOVES: usize = 7 + 7 + 13;

/// Back-rank layout from column 0 to column 7, shared by both sides.
pub const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

pub const BLACK_BACK_ROW: u8 = 0;
pub const BLACK_PAWN_ROW: u8 = 1;
pub const WHITE_PAWN_ROW: u8 = 6;
pub const WHITE_BACK_ROW: u8 = 7;

/// Rule switches that are a matter of policy rather than geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleConfig {
    /// When set, a pawn's double step also requires the square it passes over
    /// to be empty. Clearing it lets a pawn jump an occupied square, which is
    /// how the first networked builds behaved.
    pub pawn_double_step_checks_path: bool,
}

impl RuleConfig {
    pub const fn standard() -> Self {
        Self {
            pawn_double_step_checks_path: true,
        }
    }

    pub const fn legacy_pawn_jump() -> Self {
        Self {
            pawn_double_step_checks_path: false,
        }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::standard()
    }
}
