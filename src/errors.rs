//! Recoverable error types.
//!
//! Broken invariants (off-board coordinates, pool overflow) panic where they
//! are detected and never show up here. These enums cover input that can
//! legitimately be wrong: a player pressing the wrong square, a garbled
//! network frame, a dropped connection, or a mistyped square name.

use std::io;

use thiserror::Error;

use crate::game_state::chess_types::{Coordinate, Side};

/// Why the session refused a press.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Networked game and it is the remote player's move.
    #[error("waiting for the opponent to move")]
    NotYourTurn,

    #[error("no piece on ({}, {})", .0.column, .0.row)]
    EmptySquare(Coordinate),

    /// The selected piece belongs to the side that is not on move.
    #[error("it is {active:?}'s turn, the selected piece is {selected:?}")]
    WrongSide { active: Side, selected: Side },

    #[error("({}, {}) is not an available destination", .0.column, .0.row)]
    NotAvailable(Coordinate),
}

/// A frame that does not decode to a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("expected a {expected}-byte frame, got {actual} bytes")]
    FrameLength { expected: usize, actual: usize },

    #[error("unknown side code {0}")]
    UnknownSide(u8),

    #[error("unknown piece type code {0}")]
    UnknownPieceType(u8),

    #[error("{field} value {value} is off the board")]
    CoordinateOutOfRange { field: &'static str, value: u8 },
}

#[derive(Debug, Error)]
pub enum NetError {
    #[error("network i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("peer closed the connection")]
    Disconnected,

    #[error("malformed move frame: {0}")]
    Wire(#[from] WireError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("square name must be two characters, got {0:?}")]
    WrongLength(String),

    #[error("invalid file character {0:?}")]
    InvalidFile(char),

    #[error("invalid rank character {0:?}")]
    InvalidRank(char),
}
