//! Value types shared by the board, the movement rules, and the wire codec.

pub use crate::game_state::board_state::BoardState;
pub use crate::game_state::coord_pool::CoordPool;

/// Number of files (and ranks) on the board.
pub const BOARD_WIDTH: u8 = 8;

/// Total number of slots on the board.
pub const BOARD_SQUARES: usize = (BOARD_WIDTH as usize) * (BOARD_WIDTH as usize);

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row step a pawn of this side takes when advancing.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }
}

/// Free-function form of [`Side::opposite`], used when toggling turns.
#[inline]
pub const fn opposite_side(side: Side) -> Side {
    side.opposite()
}

/// Piece kind. `None` marks an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    None,
    Pawn,
    Knight,
    Rook,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, PieceType::None)
    }
}

/// Contents of one board slot. When `piece_type` is `None` the side carries no
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub piece_type: PieceType,
}

impl Piece {
    #[inline]
    pub const fn new(side: Side, piece_type: PieceType) -> Self {
        Self { side, piece_type }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.piece_type.is_none()
    }

    /// True when the slot holds a piece belonging to `side`.
    #[inline]
    pub fn is_occupied_by(self, side: Side) -> bool {
        !self.is_empty() && self.side == side
    }
}

/// A `(column, row)` pair, both in `0..8`. Row 0 is Black's back rank and row 7
/// is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub column: u8,
    pub row: u8,
}

impl Coordinate {
    /// Panics when either component is off the board.
    #[inline]
    pub fn new(column: u8, row: u8) -> Self {
        assert!(
            column < BOARD_WIDTH && row < BOARD_WIDTH,
            "coordinate ({column}, {row}) is off the board"
        );
        Self { column, row }
    }

    /// Checked constructor for signed intermediate values produced by offsets.
    #[inline]
    pub fn try_new(column: i8, row: i8) -> Option<Self> {
        let width = BOARD_WIDTH as i8;
        if (0..width).contains(&column) && (0..width).contains(&row) {
            Some(Self {
                column: column as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// The square `(d_column, d_row)` away, or `None` past the edge.
    #[inline]
    pub fn offset(self, d_column: i8, d_row: i8) -> Option<Self> {
        Self::try_new(self.column as i8 + d_column, self.row as i8 + d_row)
    }

    #[inline]
    pub fn index(self) -> usize {
        index_of(self.column, self.row)
    }
}

/// Slot index for a column/row pair: `column + row * 8`.
///
/// Panics on off-board input; callers are expected to pass validated values.
#[inline]
pub fn index_of(column: u8, row: u8) -> usize {
    assert!(
        column < BOARD_WIDTH && row < BOARD_WIDTH,
        "coordinate ({column}, {row}) is off the board"
    );
    column as usize + row as usize * BOARD_WIDTH as usize
}
