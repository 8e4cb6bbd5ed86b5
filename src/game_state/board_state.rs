//! The 64-slot board.
//!
//! `BoardState` is the single source of truth for where every piece stands.
//! Slots are mutated in place by move application and never reallocated.

use crate::game_state::chess_rules::{
    BACK_RANK, BLACK_BACK_ROW, BLACK_PAWN_ROW, WHITE_BACK_ROW, WHITE_PAWN_ROW,
};
use crate::game_state::chess_types::*;

/// Where and how large the board is drawn. Not consulted by any rule.
///
/// The text renderer honours the origin as a margin (`x` columns, `y` blank
/// lines). `width` and `height` are carried for graphical front-ends outside
/// this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub layout: BoardLayout,
    squares: [Piece; BOARD_SQUARES],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl BoardState {
    /// Board with no pieces. Empty slots in the lower half are tagged White and
    /// the upper half Black so a later `set_type` lands on a sensible side.
    pub fn new_empty() -> Self {
        let mut squares = [Piece::new(Side::Black, PieceType::None); BOARD_SQUARES];
        for (index, slot) in squares.iter_mut().enumerate() {
            if index >= BOARD_SQUARES / 2 {
                slot.side = Side::White;
            }
        }
        Self {
            layout: BoardLayout::default(),
            squares,
        }
    }

    /// Standard starting position: Black on rows 0-1, White on rows 6-7.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        board.setup_pieces();
        board
    }

    fn setup_pieces(&mut self) {
        for (column, piece_type) in BACK_RANK.iter().enumerate() {
            let column = column as u8;
            self.set_piece(column, BLACK_BACK_ROW, Piece::new(Side::Black, *piece_type));
            self.set_piece(column, BLACK_PAWN_ROW, Piece::new(Side::Black, PieceType::Pawn));
            self.set_piece(column, WHITE_PAWN_ROW, Piece::new(Side::White, PieceType::Pawn));
            self.set_piece(column, WHITE_BACK_ROW, Piece::new(Side::White, *piece_type));
        }
    }

    #[inline]
    pub fn piece_at(&self, column: u8, row: u8) -> Piece {
        self.squares[index_of(column, row)]
    }

    #[inline]
    pub fn piece_at_coord(&self, coord: Coordinate) -> Piece {
        self.squares[coord.index()]
    }

    #[inline]
    pub fn piece_at_index(&self, index: usize) -> Piece {
        self.squares[index]
    }

    #[inline]
    pub fn set_type(&mut self, column: u8, row: u8, piece_type: PieceType) {
        self.squares[index_of(column, row)].piece_type = piece_type;
    }

    #[inline]
    pub fn set_side(&mut self, column: u8, row: u8, side: Side) {
        self.squares[index_of(column, row)].side = side;
    }

    #[inline]
    pub fn set_piece(&mut self, column: u8, row: u8, piece: Piece) {
        self.squares[index_of(column, row)] = piece;
    }

    #[inline]
    pub fn clear(&mut self, column: u8, row: u8) {
        self.set_type(column, row, PieceType::None);
    }

    /// Every occupied square of `side`, in index order.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(move |(_, piece)| piece.is_occupied_by(side))
            .map(|(index, piece)| {
                let width = BOARD_WIDTH as usize;
                (
                    Coordinate::new((index % width) as u8, (index / width) as u8),
                    *piece,
                )
            })
    }

    pub fn count_pieces(&self) -> usize {
        self.squares.iter().filter(|piece| !piece.is_empty()).count()
    }
}
