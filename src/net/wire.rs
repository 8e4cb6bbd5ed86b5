//! Byte layout of a move frame.
//!
//! Six bytes, one per field, in this order: from column, from row, to column,
//! to row, side code, piece type code. Single bytes carry no byte order, so
//! both ends agree regardless of platform.

use crate::errors::WireError;
use crate::game_state::chess_types::*;
use crate::move_generation::move_apply::ChessMove;

pub const MOVE_FRAME_LEN: usize = 6;

pub const SIDE_WHITE_CODE: u8 = 0;
pub const SIDE_BLACK_CODE: u8 = 1;

#[inline]
pub fn side_to_code(side: Side) -> u8 {
    match side {
        Side::White => SIDE_WHITE_CODE,
        Side::Black => SIDE_BLACK_CODE,
    }
}

#[inline]
pub fn side_from_code(code: u8) -> Result<Side, WireError> {
    match code {
        SIDE_WHITE_CODE => Ok(Side::White),
        SIDE_BLACK_CODE => Ok(Side::Black),
        other => Err(WireError::UnknownSide(other)),
    }
}

#[inline]
pub fn piece_type_to_code(piece_type: PieceType) -> u8 {
    match piece_type {
        PieceType::None => 0,
        PieceType::Pawn => 1,
        PieceType::Knight => 2,
        PieceType::Rook => 3,
        PieceType::Bishop => 4,
        PieceType::Queen => 5,
        PieceType::King => 6,
    }
}

#[inline]
pub fn piece_type_from_code(code: u8) -> Result<PieceType, WireError> {
    match code {
        0 => Ok(PieceType::None),
        1 => Ok(PieceType::Pawn),
        2 => Ok(PieceType::Knight),
        3 => Ok(PieceType::Rook),
        4 => Ok(PieceType::Bishop),
        5 => Ok(PieceType::Queen),
        6 => Ok(PieceType::King),
        other => Err(WireError::UnknownPieceType(other)),
    }
}

pub fn encode_move(mv: &ChessMove) -> [u8; MOVE_FRAME_LEN] {
    [
        mv.from.column,
        mv.from.row,
        mv.to.column,
        mv.to.row,
        side_to_code(mv.side),
        piece_type_to_code(mv.piece_type),
    ]
}

pub fn decode_move(bytes: &[u8]) -> Result<ChessMove, WireError> {
    let frame: &[u8; MOVE_FRAME_LEN] =
        bytes.try_into().map_err(|_| WireError::FrameLength {
            expected: MOVE_FRAME_LEN,
            actual: bytes.len(),
        })?;

    let from = decode_coordinate(frame[0], "from column", frame[1], "from row")?;
    let to = decode_coordinate(frame[2], "to column", frame[3], "to row")?;
    let side = side_from_code(frame[4])?;
    let piece_type = piece_type_from_code(frame[5])?;

    Ok(ChessMove::new(from, to, side, piece_type))
}

fn decode_coordinate(
    column: u8,
    column_field: &'static str,
    row: u8,
    row_field: &'static str,
) -> Result<Coordinate, WireError> {
    for (value, field) in [(column, column_field), (row, row_field)] {
        if value >= BOARD_WIDTH {
            return Err(WireError::CoordinateOutOfRange { field, value });
        }
    }
    Ok(Coordinate::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_every_field() {
        let sides = [Side::White, Side::Black];
        let piece_types = [
            PieceType::None,
            PieceType::Pawn,
            PieceType::Knight,
            PieceType::Rook,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
        ];
        let squares: Vec<Coordinate> = (0..BOARD_WIDTH)
            .flat_map(|row| (0..BOARD_WIDTH).map(move |column| Coordinate::new(column, row)))
            .collect();

        let mut checked = 0usize;
        for &from in &squares {
            for &to in &squares {
                for side in sides {
                    for piece_type in piece_types {
                        let mv = ChessMove::new(from, to, side, piece_type);
                        assert_eq!(decode_move(&encode_move(&mv)), Ok(mv));
                        checked += 1;
                    }
                }
            }
        }
        assert_eq!(checked, 64 * 64 * 2 * 7);
    }

    #[test]
    fn layout_matches_field_order() {
        let mv = ChessMove::new(
            Coordinate::new(1, 0),
            Coordinate::new(2, 2),
            Side::Black,
            PieceType::Knight,
        );
        assert_eq!(encode_move(&mv), [1, 0, 2, 2, 1, 2]);
    }

    #[test]
    fn short_frame_is_rejected() {
        assert_eq!(
            decode_move(&[0, 0, 0]),
            Err(WireError::FrameLength {
                expected: 6,
                actual: 3
            })
        );
    }

    #[test]
    fn bad_codes_are_rejected() {
        assert_eq!(decode_move(&[0, 0, 0, 1, 2, 1]), Err(WireError::UnknownSide(2)));
        assert_eq!(
            decode_move(&[0, 0, 0, 1, 0, 7]),
            Err(WireError::UnknownPieceType(7))
        );
        assert_eq!(
            decode_move(&[0, 0, 8, 1, 0, 1]),
            Err(WireError::CoordinateOutOfRange {
                field: "to column",
                value: 8
            })
        );
        assert_eq!(
            decode_move(&[0, 9, 0, 1, 0, 1]),
            Err(WireError::CoordinateOutOfRange {
                field: "from row",
                value: 9
            })
        );
    }
}
