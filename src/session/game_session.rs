//! One game in progress.
//!
//! `GameSession` owns the board, the destination pool for the current
//! selection, and whose turn it is. Front-ends drive it through [`press`],
//! which mirrors the single confirm key of the terminal UI, and feed moves
//! received from the peer through [`apply_remote_move`].
//!
//! [`press`]: GameSession::press
//! [`apply_remote_move`]: GameSession::apply_remote_move

use log::{debug, info, warn};

use crate::errors::SessionError;
use crate::game_state::chess_rules::RuleConfig;
use crate::game_state::chess_types::*;
use crate::move_generation::move_apply::{apply_move, ChessMove};
use crate::move_generation::move_generator::get_available_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Idle,
    Selected { origin: Coordinate, piece: Piece },
}

/// What a successful press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Selected {
        origin: Coordinate,
        piece: Piece,
        destinations: usize,
    },
    Cancelled,
    Moved(ChessMove),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: BoardState,
    pool: CoordPool,
    active_side: Side,
    selection: Selection,
    local_side: Option<Side>,
    rules: RuleConfig,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl GameSession {
    /// Hot-seat game from the standard position, White to move.
    pub fn new(rules: RuleConfig) -> Self {
        Self::from_board(BoardState::new_game(), Side::White, rules)
    }

    /// Networked game where this end only ever moves `local_side`.
    pub fn networked(rules: RuleConfig, local_side: Side) -> Self {
        let mut session = Self::new(rules);
        session.local_side = Some(local_side);
        session
    }

    pub fn from_board(board: BoardState, active_side: Side, rules: RuleConfig) -> Self {
        Self {
            board,
            pool: CoordPool::new(),
            active_side,
            selection: Selection::Idle,
            local_side: None,
            rules,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn local_side(&self) -> Option<Side> {
        self.local_side
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Destinations for the current selection; empty while idle.
    pub fn available_moves(&self) -> &[Coordinate] {
        match self.selection {
            Selection::Idle => &[],
            Selection::Selected { .. } => self.pool.as_slice(),
        }
    }

    pub fn is_local_turn(&self) -> bool {
        self.local_side.is_none_or(|side| side == self.active_side)
    }

    /// Press confirm on `coord`.
    ///
    /// While idle this selects the piece there (either side's piece may be
    /// inspected). While a piece is selected, pressing its own square cancels
    /// and pressing an offered destination moves it, provided it belongs to
    /// the side on move.
    pub fn press(&mut self, coord: Coordinate) -> Result<SessionEvent, SessionError> {
        if !self.is_local_turn() {
            warn!("ignoring press at {coord:?}: remote side to move");
            return Err(SessionError::NotYourTurn);
        }

        match self.selection {
            Selection::Idle => self.select(coord),
            Selection::Selected { origin, .. } if origin == coord => {
                self.cancel();
                Ok(SessionEvent::Cancelled)
            }
            Selection::Selected { origin, piece } => self.confirm(origin, piece, coord),
        }
    }

    fn select(&mut self, coord: Coordinate) -> Result<SessionEvent, SessionError> {
        let piece = self.board.piece_at_coord(coord);
        if piece.is_empty() {
            return Err(SessionError::EmptySquare(coord));
        }

        get_available_moves(
            piece,
            &self.board,
            &mut self.pool,
            coord.column,
            coord.row,
            &self.rules,
        );
        self.selection = Selection::Selected {
            origin: coord,
            piece,
        };
        debug!(
            "selected {:?} {:?} at {coord:?}: {} destinations",
            piece.side,
            piece.piece_type,
            self.pool.len()
        );

        Ok(SessionEvent::Selected {
            origin: coord,
            piece,
            destinations: self.pool.len(),
        })
    }

    pub fn cancel(&mut self) {
        self.selection = Selection::Idle;
        self.pool.reset();
    }

    fn confirm(
        &mut self,
        origin: Coordinate,
        piece: Piece,
        destination: Coordinate,
    ) -> Result<SessionEvent, SessionError> {
        if piece.side != self.active_side {
            return Err(SessionError::WrongSide {
                active: self.active_side,
                selected: piece.side,
            });
        }
        if !self.pool.contains(destination) {
            return Err(SessionError::NotAvailable(destination));
        }

        let mv = ChessMove::new(origin, destination, piece.side, piece.piece_type);
        self.commit(&mv);
        info!(
            "{:?} {:?} ({}, {}) -> ({}, {})",
            mv.side, mv.piece_type, origin.column, origin.row, destination.column, destination.row
        );
        Ok(SessionEvent::Moved(mv))
    }

    /// Apply a move decided by the peer. It is trusted as-is and not checked
    /// against a freshly computed pool.
    pub fn apply_remote_move(&mut self, mv: &ChessMove) {
        info!(
            "remote {:?} {:?} ({}, {}) -> ({}, {})",
            mv.side, mv.piece_type, mv.from.column, mv.from.row, mv.to.column, mv.to.row
        );
        self.commit(mv);
    }

    fn commit(&mut self, mv: &ChessMove) {
        apply_move(&mut self.board, mv);
        self.cancel();
        self.active_side = opposite_side(self.active_side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(column: u8, row: u8) -> Coordinate {
        Coordinate::new(column, row)
    }

    #[test]
    fn select_then_move_toggles_turn() {
        let mut session = GameSession::default();

        let event = session.press(c(4, 6)).unwrap();
        assert_eq!(
            event,
            SessionEvent::Selected {
                origin: c(4, 6),
                piece: Piece::new(Side::White, PieceType::Pawn),
                destinations: 2,
            }
        );
        assert_eq!(session.available_moves(), &[c(4, 5), c(4, 4)]);

        let event = session.press(c(4, 4)).unwrap();
        assert_eq!(
            event,
            SessionEvent::Moved(ChessMove::new(c(4, 6), c(4, 4), Side::White, PieceType::Pawn))
        );
        assert_eq!(session.active_side(), Side::Black);
        assert_eq!(session.selection(), Selection::Idle);
        assert!(session.available_moves().is_empty());
        assert!(session.board().piece_at(4, 6).is_empty());
    }

    #[test]
    fn pressing_the_selected_square_cancels() {
        let mut session = GameSession::default();
        session.press(c(1, 7)).unwrap();
        assert_eq!(session.press(c(1, 7)).unwrap(), SessionEvent::Cancelled);
        assert_eq!(session.selection(), Selection::Idle);
        assert_eq!(session.active_side(), Side::White);
        assert_eq!(session.board(), &BoardState::new_game());
    }

    #[test]
    fn empty_square_cannot_be_selected() {
        let mut session = GameSession::default();
        assert_eq!(session.press(c(3, 3)), Err(SessionError::EmptySquare(c(3, 3))));
        assert_eq!(session.selection(), Selection::Idle);
    }

    #[test]
    fn opponent_piece_can_be_inspected_but_not_moved() {
        let mut session = GameSession::default();
        let event = session.press(c(3, 1)).unwrap();
        assert!(matches!(event, SessionEvent::Selected { destinations: 2, .. }));

        assert_eq!(
            session.press(c(3, 3)),
            Err(SessionError::WrongSide {
                active: Side::White,
                selected: Side::Black,
            })
        );
        assert!(matches!(session.selection(), Selection::Selected { .. }));
        assert!(session.board().piece_at(3, 3).is_empty());
    }

    #[test]
    fn destination_outside_pool_is_rejected_and_selection_kept() {
        let mut session = GameSession::default();
        session.press(c(6, 7)).unwrap();
        assert_eq!(session.press(c(6, 5)), Err(SessionError::NotAvailable(c(6, 5))));
        assert_eq!(
            session.selection(),
            Selection::Selected {
                origin: c(6, 7),
                piece: Piece::new(Side::White, PieceType::Knight),
            }
        );
        assert!(matches!(session.press(c(5, 5)), Ok(SessionEvent::Moved(_))));
    }

    #[test]
    fn capture_replaces_the_target() {
        let mut board = BoardState::new_empty();
        board.set_piece(0, 7, Piece::new(Side::White, PieceType::Rook));
        board.set_piece(0, 2, Piece::new(Side::Black, PieceType::Knight));
        let mut session = GameSession::from_board(board, Side::White, RuleConfig::default());

        session.press(c(0, 7)).unwrap();
        session.press(c(0, 2)).unwrap();

        assert!(session.board().piece_at(0, 7).is_empty());
        assert_eq!(
            session.board().piece_at(0, 2),
            Piece::new(Side::White, PieceType::Rook)
        );
        assert_eq!(session.board().count_pieces(), 1);
    }

    #[test]
    fn networked_session_waits_for_remote_turn() {
        let mut session = GameSession::networked(RuleConfig::default(), Side::Black);
        assert!(!session.is_local_turn());
        assert_eq!(session.press(c(4, 1)), Err(SessionError::NotYourTurn));

        let remote = ChessMove::new(c(4, 6), c(4, 4), Side::White, PieceType::Pawn);
        session.apply_remote_move(&remote);
        assert_eq!(session.active_side(), Side::Black);
        assert!(session.is_local_turn());
        assert!(matches!(session.press(c(4, 1)), Ok(SessionEvent::Selected { .. })));
    }

    #[test]
    fn board_change_under_a_selection_drops_the_stale_pool() {
        let mut session = GameSession::default();
        session.press(c(1, 7)).unwrap();
        assert!(session.available_moves().contains(&c(2, 5)));

        // Knight leaves b1 and a White pawn lands on c3 while the knight is
        // still selected.
        session.apply_remote_move(&ChessMove::new(c(1, 7), c(1, 4), Side::White, PieceType::Pawn));
        session.apply_remote_move(&ChessMove::new(c(2, 6), c(2, 5), Side::White, PieceType::Pawn));
        assert_eq!(session.selection(), Selection::Idle);

        let event = session.press(c(2, 5)).unwrap();
        assert!(matches!(
            event,
            SessionEvent::Selected {
                piece: Piece {
                    piece_type: PieceType::Pawn,
                    ..
                },
                ..
            }
        ));
        assert!(session.board().piece_at(1, 7).is_empty());
        assert_eq!(
            session.board().piece_at(2, 5),
            Piece::new(Side::White, PieceType::Pawn)
        );
    }

    #[test]
    fn remote_move_clears_local_selection() {
        let mut session = GameSession::default();
        session.press(c(0, 6)).unwrap();
        let remote = ChessMove::new(c(0, 6), c(0, 5), Side::White, PieceType::Pawn);
        session.apply_remote_move(&remote);
        assert_eq!(session.selection(), Selection::Idle);
        assert!(session.available_moves().is_empty());
        assert_eq!(session.active_side(), Side::Black);
    }

    #[test]
    fn legacy_rules_let_pawn_jump_through_the_session() {
        let mut board = BoardState::new_game();
        board.set_piece(2, 5, Piece::new(Side::Black, PieceType::Knight));
        let mut session = GameSession::from_board(board, Side::White, RuleConfig::legacy_pawn_jump());
        session.press(c(2, 6)).unwrap();
        assert_eq!(session.available_moves(), &[c(2, 4)]);
    }
}
