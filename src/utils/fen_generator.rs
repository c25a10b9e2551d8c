//! FEN export.

use std::fmt::Write;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

const CASTLING_LETTERS: [(CastlingRights, char); 4] = [
    (CASTLE_LIGHT_KINGSIDE, 'K'),
    (CASTLE_LIGHT_QUEENSIDE, 'Q'),
    (CASTLE_DARK_KINGSIDE, 'k'),
    (CASTLE_DARK_QUEENSIDE, 'q'),
];

pub fn generate_fen(game_state: &GameState) -> String {
    let mut fen = placement_field(&game_state.board);

    fen.push(' ');
    fen.push(match game_state.side_to_move {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    fen.push(' ');
    let before = fen.len();
    fen.extend(
        CASTLING_LETTERS
            .iter()
            .filter(|&&(bit, _)| game_state.castling_rights & bit != 0)
            .map(|&(_, letter)| letter),
    );
    if fen.len() == before {
        fen.push('-');
    }

    fen.push(' ');
    match game_state.en_passant_square {
        Some(square) => fen.push_str(&square_to_algebraic(square)),
        None => fen.push('-'),
    }

    // Writing into a String cannot fail.
    let _ = write!(fen, " {} {}", game_state.halfmove_clock, game_state.fullmove_number);
    fen
}

/// Ranks 8 down to 1, runs of empty squares collapsed to a digit.
fn placement_field(board: &Board) -> String {
    let ranks: Vec<String> = board
        .chunks(8)
        .rev()
        .map(|rank| {
            let mut text = String::new();
            let mut gap = 0u8;
            for &cell in rank {
                match cell_piece(cell) {
                    Some((color, piece)) => {
                        if gap > 0 {
                            text.push(char::from(b'0' + gap));
                            gap = 0;
                        }
                        text.push(piece_to_fen_char(color, piece));
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                text.push(char::from(b'0' + gap));
            }
            text
        })
        .collect();
    ranks.join("/")
}

pub(crate) fn piece_to_fen_char(color: Color, piece: PieceKind) -> char {
    let letter = match piece {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    if color == Color::Light {
        letter.to_ascii_uppercase()
    } else {
        letter
    }
}
