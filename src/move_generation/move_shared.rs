//! Walking helpers shared by the per-piece movement rules.

use crate::game_state::chess_types::*;

/// Orthogonal directions as `(d_column, d_row)`.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal directions as `(d_column, d_row)`.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Walk from `origin` one square at a time along `(d_column, d_row)`.
///
/// Empty squares are offered and the walk continues. The first occupied
/// square ends the walk and is offered only when it holds an enemy piece.
pub fn trace_ray(
    side: Side,
    board: &BoardState,
    pool: &mut CoordPool,
    origin: Coordinate,
    d_column: i8,
    d_row: i8,
) {
    let mut cursor = origin.offset(d_column, d_row);
    while let Some(target) = cursor {
        let occupant = board.piece_at_coord(target);
        if occupant.is_empty() {
            pool.push(target);
        } else {
            if occupant.side != side {
                pool.push(target);
            }
            break;
        }
        cursor = target.offset(d_column, d_row);
    }
}

/// Offer each on-board target of `offsets` that is not held by `side`.
pub fn step_to_offsets(
    side: Side,
    board: &BoardState,
    pool: &mut CoordPool,
    origin: Coordinate,
    offsets: &[(i8, i8)],
) {
    for &(d_column, d_row) in offsets {
        let Some(target) = origin.offset(d_column, d_row) else {
            continue;
        };
        if board.piece_at_coord(target).is_occupied_by(side) {
            continue;
        }
        pool.push(target);
    }
}

#[inline]
pub fn enemy_piece_on(board: &BoardState, side: Side, coord: Coordinate) -> bool {
    board.piece_at_coord(coord).is_occupied_by(side.opposite())
}
