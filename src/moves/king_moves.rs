//! King destinations: the eight neighbouring squares.
//!
//! Squares attacked by the opponent are still offered; nothing in the rules
//! tracks check, so keeping the king safe is left to the players.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::step_to_offsets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn king_moves(side: Side, board: &BoardState, pool: &mut CoordPool, origin: Coordinate) {
    step_to_offsets(side, board, pool, origin, &KING_OFFSETS);
}
