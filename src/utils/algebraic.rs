//! Square names such as `e2` for the text front-end.
//!
//! Files `a`..`h` map to columns 0..7. Rank 1 is White's back row, which is
//! row 7 on the board, so rank `r` maps to row `8 - r`.

use crate::errors::NotationError;
use crate::game_state::chess_types::{Coordinate, BOARD_WIDTH};

/// Parse a square name (for example: "e4"). Surrounding whitespace is ignored.
#[inline]
pub fn algebraic_to_coordinate(square: &str) -> Result<Coordinate, NotationError> {
    let trimmed = square.trim();
    let mut chars = trimmed.chars();
    let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(NotationError::WrongLength(trimmed.to_owned()));
    };

    let file = file_char.to_ascii_lowercase();
    if !('a'..='h').contains(&file) {
        return Err(NotationError::InvalidFile(file_char));
    }
    if !('1'..='8').contains(&rank_char) {
        return Err(NotationError::InvalidRank(rank_char));
    }

    let column = file as u8 - b'a';
    let row = BOARD_WIDTH - 1 - (rank_char as u8 - b'1');
    Ok(Coordinate::new(column, row))
}

#[inline]
pub fn coordinate_to_algebraic(coord: Coordinate) -> String {
    let file_char = char::from(b'a' + coord.column);
    let rank_char = char::from(b'1' + (BOARD_WIDTH - 1 - coord.row));
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares() {
        assert_eq!(algebraic_to_coordinate("a1").unwrap(), Coordinate::new(0, 7));
        assert_eq!(algebraic_to_coordinate("h8").unwrap(), Coordinate::new(7, 0));
        assert_eq!(coordinate_to_algebraic(Coordinate::new(0, 7)), "a1");
        assert_eq!(coordinate_to_algebraic(Coordinate::new(7, 0)), "h8");
    }

    #[test]
    fn white_king_pawn_is_on_e2() {
        assert_eq!(algebraic_to_coordinate(" E2\n").unwrap(), Coordinate::new(4, 6));
        assert_eq!(coordinate_to_algebraic(Coordinate::new(4, 4)), "e4");
    }

    #[test]
    fn rejects_malformed_names() {
        assert_eq!(
            algebraic_to_coordinate("e10"),
            Err(NotationError::WrongLength("e10".to_owned()))
        );
        assert_eq!(algebraic_to_coordinate("i1"), Err(NotationError::InvalidFile('i')));
        assert_eq!(algebraic_to_coordinate("a9"), Err(NotationError::InvalidRank('9')));
    }

    #[test]
    fn non_ascii_input_is_reported_by_character() {
        assert_eq!(
            algebraic_to_coordinate("é"),
            Err(NotationError::WrongLength("é".to_owned()))
        );
        assert_eq!(algebraic_to_coordinate("é4"), Err(NotationError::InvalidFile('é')));
        assert_eq!(algebraic_to_coordinate("e٣"), Err(NotationError::InvalidRank('٣')));
    }
}
