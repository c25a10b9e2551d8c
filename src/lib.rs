//! Crate root module declarations for the Damson Chess engine.
//!
//! The core is a mailbox board (`[i8; 64]`) with legal move generation,
//! make/unmake, a tapered evaluator and a fixed-depth alpha-beta search.
//! FEN, move text, the opening book and the UCI loop sit on top of it.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod sliding_rays;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod move_ordering;
    pub mod piece_square_tables;
}
pub mod tables {
    pub mod opening_book;
}
pub mod uci {
    pub mod uci_top;
}
pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
