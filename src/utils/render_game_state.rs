//! Terminal-oriented Unicode board renderer.
//!
//! Draws the board with White at the bottom, marks the destinations of the
//! current selection, and brackets the selected piece.

use crate::game_state::chess_types::*;
use crate::session::game_session::{GameSession, Selection};

const FILE_LABELS: &str = "   a  b  c  d  e  f  g  h";

/// Render a bare board.
pub fn render_board(board: &BoardState) -> String {
    render_with_marks(board, &[], None)
}

/// Render the session's board plus its selection and a status line.
pub fn render_game_state(session: &GameSession) -> String {
    let selected = match session.selection() {
        Selection::Idle => None,
        Selection::Selected { origin, .. } => Some(origin),
    };
    let mut out = render_with_marks(session.board(), session.available_moves(), selected);

    out.push('\n');
    out.push_str(&format!("{:?} to move", session.active_side()));
    if let Some(local) = session.local_side() {
        out.push_str(&format!(" (you play {local:?})"));
    }
    out
}

fn render_with_marks(
    board: &BoardState,
    destinations: &[Coordinate],
    selected: Option<Coordinate>,
) -> String {
    let margin = " ".repeat(usize::from(board.layout.x));
    let mut out = "\n".repeat(usize::from(board.layout.y));
    out.push_str(&margin);
    out.push_str(FILE_LABELS);
    out.push('\n');

    for row in 0..BOARD_WIDTH {
        let rank_label = char::from(b'1' + (BOARD_WIDTH - 1 - row));
        out.push_str(&margin);
        out.push(rank_label);
        out.push(' ');

        for column in 0..BOARD_WIDTH {
            let coord = Coordinate::new(column, row);
            let piece = board.piece_at_coord(coord);
            let glyph = if piece.is_empty() {
                if destinations.contains(&coord) {
                    '*'
                } else {
                    '·'
                }
            } else {
                piece_to_unicode(piece)
            };

            let (open, close) = if selected == Some(coord) {
                ('[', ']')
            } else if destinations.contains(&coord) && !piece.is_empty() {
                ('(', ')')
            } else {
                (' ', ' ')
            };
            out.push(open);
            out.push(glyph);
            out.push(close);
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str(&margin);
    out.push_str(FILE_LABELS);
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.side, piece.piece_type) {
        (_, PieceType::None) => '·',
        (Side::White, PieceType::Pawn) => '♙',
        (Side::White, PieceType::Knight) => '♘',
        (Side::White, PieceType::Bishop) => '♗',
        (Side::White, PieceType::Rook) => '♖',
        (Side::White, PieceType::Queen) => '♕',
        (Side::White, PieceType::King) => '♔',
        (Side::Black, PieceType::Pawn) => '♟',
        (Side::Black, PieceType::Knight) => '♞',
        (Side::Black, PieceType::Bishop) => '♝',
        (Side::Black, PieceType::Rook) => '♜',
        (Side::Black, PieceType::Queen) => '♛',
        (Side::Black, PieceType::King) => '♚',
    }
}
