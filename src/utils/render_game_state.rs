//! Terminal-oriented ASCII board renderer.
//!
//! Used for debug logging and test diagnostics.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::fen_generator::piece_to_fen_char;

/// Render the board with White at the bottom, FEN letters for pieces and
/// `.` for empty squares.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match cell_piece(board[make_square(file, rank) as usize]) {
                Some((color, piece)) => out.push(piece_to_fen_char(color, piece)),
                None => out.push('.'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn render_game_state(game_state: &GameState) -> String {
    format!("{}\n{}", render_board(&game_state.board), game_state.get_fen())
}
