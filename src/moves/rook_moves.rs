use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{trace_ray, ROOK_DIRECTIONS};

pub fn rook_moves(side: Side, board: &BoardState, pool: &mut CoordPool, origin: Coordinate) {
    for (d_column, d_row) in ROOK_DIRECTIONS {
        trace_ray(side, board, pool, origin, d_column, d_row);
    }
}
