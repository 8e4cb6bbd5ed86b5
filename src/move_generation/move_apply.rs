//! Applying a single ply to the board.

use crate::game_state::chess_types::*;

/// One ply: where a piece came from, where it went, and what stands on the
/// destination afterwards. Self-contained so it can cross the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Coordinate,
    pub to: Coordinate,
    pub side: Side,
    pub piece_type: PieceType,
}

impl ChessMove {
    pub fn new(from: Coordinate, to: Coordinate, side: Side, piece_type: PieceType) -> Self {
        Self {
            from,
            to,
            side,
            piece_type,
        }
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        Piece::new(self.side, self.piece_type)
    }
}

/// Overwrite the board with `mv`: the origin is emptied and the destination
/// takes the moving piece. Whatever stood on the destination is dropped.
///
/// No legality check happens here; callers validate against the pool first
/// (or trust the peer that did).
pub fn apply_move(board: &mut BoardState, mv: &ChessMove) {
    board.clear(mv.from.column, mv.from.row);
    board.set_type(mv.to.column, mv.to.row, mv.piece_type);
    board.set_side(mv.to.column, mv.to.row, mv.side);
}
