//! Random-move player.
//!
//! Picks uniformly among every destination offered to every piece of one
//! side. Used by the autoplay mode and for long self-play checks.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_rules::RuleConfig;
use crate::game_state::chess_types::*;
use crate::move_generation::move_apply::ChessMove;
use crate::move_generation::move_generator::get_available_moves;

#[derive(Debug, Default)]
pub struct RandomMover {
    pool: CoordPool,
    candidates: Vec<ChessMove>,
}

impl RandomMover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every (origin, destination) pair currently offered to `side`.
    pub fn offered_moves(
        &mut self,
        board: &BoardState,
        side: Side,
        rules: &RuleConfig,
    ) -> &[ChessMove] {
        self.candidates.clear();
        for (origin, piece) in board.squares_of(side) {
            get_available_moves(piece, board, &mut self.pool, origin.column, origin.row, rules);
            self.candidates.extend(
                self.pool
                    .iter()
                    .map(|to| ChessMove::new(origin, *to, piece.side, piece.piece_type)),
            );
        }
        &self.candidates
    }

    /// `None` when `side` has nothing to play.
    pub fn choose_move<R: Rng + ?Sized>(
        &mut self,
        board: &BoardState,
        side: Side,
        rules: &RuleConfig,
        rng: &mut R,
    ) -> Option<ChessMove> {
        self.offered_moves(board, side, rules).choose(rng).copied()
    }
}
