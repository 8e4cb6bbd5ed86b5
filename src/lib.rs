//! Crate root module declarations for the duel chess project.
//!
//! Exposes the board model, the per-piece movement rules, move application,
//! the game session that ties them together, and the network and text glue
//! used by the binary.

pub mod errors;

pub mod game_state {
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod coord_pool;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod move_shared;
}

pub mod session {
    pub mod game_session;
}

pub mod net {
    pub mod peer;
    pub mod wire;
}

pub mod engines {
    pub mod random_mover;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
