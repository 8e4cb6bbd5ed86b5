use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::step_to_offsets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (2, -1),
    (1, -2),
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (-1, 2),
];

pub fn knight_moves(side: Side, board: &BoardState, pool: &mut CoordPool, origin: Coordinate) {
    step_to_offsets(side, board, pool, origin, &KNIGHT_OFFSETS);
}
