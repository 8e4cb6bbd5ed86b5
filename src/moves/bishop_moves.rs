//! Bishop destinations along the four diagonals.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{trace_ray, BISHOP_DIRECTIONS};

pub fn bishop_moves(side: Side, board: &BoardState, pool: &mut CoordPool, origin: Coordinate) {
    for (d_column, d_row) in BISHOP_DIRECTIONS {
        trace_ray(side, board, pool, origin, d_column, d_row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        let board = BoardState::new_empty();
        let mut pool = CoordPool::new();
        bishop_moves(Side::White, &board, &mut pool, Coordinate::new(3, 4));
        assert_eq!(pool.len(), 13);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let mut board = BoardState::new_empty();
        board.set_piece(4, 2, Piece::new(Side::Black, PieceType::Pawn));
        let mut pool = CoordPool::new();
        bishop_moves(Side::White, &board, &mut pool, Coordinate::new(2, 0));

        assert!(pool.contains(Coordinate::new(3, 1)));
        assert!(pool.contains(Coordinate::new(4, 2)));
        assert!(!pool.contains(Coordinate::new(5, 3)));
        assert_eq!(pool.len(), 2 + 2);
    }

    #[test]
    fn every_target_shares_a_diagonal() {
        let board = BoardState::new_empty();
        let mut pool = CoordPool::new();
        let origin = Coordinate::new(5, 2);
        bishop_moves(Side::Black, &board, &mut pool, origin);
        for target in &pool {
            let d_column = (target.column as i8 - origin.column as i8).abs();
            let d_row = (target.row as i8 - origin.row as i8).abs();
            assert_eq!(d_column, d_row);
            assert_ne!(d_column, 0);
        }
    }
}
