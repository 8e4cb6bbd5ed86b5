use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

/// Rook destinations followed by bishop destinations, without resetting the
/// pool in between. The two sets never overlap.
pub fn queen_moves(side: Side, board: &BoardState, pool: &mut CoordPool, origin: Coordinate) {
    rook_moves(side, board, pool, origin);
    bishop_moves(side, board, pool, origin);
}
