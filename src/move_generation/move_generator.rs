//! Entry point for "where can this piece go?" queries.

use crate::game_state::chess_rules::RuleConfig;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Reset `pool` and fill it with every destination offered to `piece`
/// standing on `(column, row)`. An empty slot offers nothing.
pub fn get_available_moves(
    piece: Piece,
    board: &BoardState,
    pool: &mut CoordPool,
    column: u8,
    row: u8,
    rules: &RuleConfig,
) {
    pool.reset();

    let origin = Coordinate::new(column, row);
    let side = piece.side;
    match piece.piece_type {
        PieceType::None => {}
        PieceType::Pawn => pawn_moves(side, board, pool, origin, rules),
        PieceType::Knight => knight_moves(side, board, pool, origin),
        PieceType::Rook => rook_moves(side, board, pool, origin),
        PieceType::Bishop => bishop_moves(side, board, pool, origin),
        PieceType::Queen => queen_moves(side, board, pool, origin),
        PieceType::King => king_moves(side, board, pool, origin),
    }
}

/// Same query for whatever stands on `coord`.
pub fn get_available_moves_at(
    board: &BoardState,
    pool: &mut CoordPool,
    coord: Coordinate,
    rules: &RuleConfig,
) {
    let piece = board.piece_at_coord(coord);
    get_available_moves(piece, board, pool, coord.column, coord.row, rules);
}
