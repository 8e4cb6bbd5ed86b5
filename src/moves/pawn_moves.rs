//! Pawn destinations: single and double advance plus diagonal captures.
//!
//! White advances toward row 0 and Black toward row 7. There is no en passant
//! and no promotion; a pawn on the far row simply has nowhere to go.

use crate::game_state::chess_rules::{RuleConfig, BLACK_PAWN_ROW, WHITE_PAWN_ROW};
use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::enemy_piece_on;

#[inline]
pub const fn pawn_start_row(side: Side) -> u8 {
    match side {
        Side::White => WHITE_PAWN_ROW,
        Side::Black => BLACK_PAWN_ROW,
    }
}

pub fn pawn_moves(
    side: Side,
    board: &BoardState,
    pool: &mut CoordPool,
    origin: Coordinate,
    rules: &RuleConfig,
) {
    let forward = side.forward();

    let Some(one_step) = origin.offset(0, forward) else {
        return;
    };
    let one_step_empty = board.piece_at_coord(one_step).is_empty();
    if one_step_empty {
        pool.push(one_step);
    }

    if origin.row == pawn_start_row(side) {
        let path_clear = one_step_empty || !rules.pawn_double_step_checks_path;
        if let Some(two_step) = origin.offset(0, forward * 2) {
            if path_clear && board.piece_at_coord(two_step).is_empty() {
                pool.push(two_step);
            }
        }
    }

    for d_column in [1, -1] {
        if let Some(target) = origin.offset(d_column, forward) {
            if enemy_piece_on(board, side, target) {
                pool.push(target);
            }
        }
    }
}
