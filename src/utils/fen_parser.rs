//! FEN-to-GameState parser.
//!
//! Builds a fresh `GameState` from a Forsyth-Edwards Notation string. Nothing
//! is written anywhere until every field has been validated, so a rejected
//! string never disturbs an existing game.

use crate::chess_errors::{ChessResult, FenError};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("piece placement"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("active color"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en passant"))?;
    let halfmove_part = parts.next().ok_or(FenError::MissingField("halfmove clock"))?;
    let fullmove_part = parts.next().ok_or(FenError::MissingField("fullmove number"))?;

    if parts.next().is_some() {
        return Err(FenError::ExtraFields.into());
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_square = parse_en_passant_square(en_passant_part, side_to_move)?;
    let halfmove_clock = parse_counter("halfmove clock", halfmove_part)?;
    let fullmove_number = parse_counter("fullmove number", fullmove_part)?;

    Ok(GameState {
        board,
        side_to_move,
        castling_rights,
        en_passant_square,
        halfmove_clock,
        fullmove_number,
        undo_stack: Vec::new(),
    })
}

/// The first four FEN fields: everything that decides which moves are legal.
/// Used as the opening-book key.
pub fn position_key(fen: &str) -> String {
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

fn parse_board(board_part: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board: Board = [EMPTY; 64];
    let mut kings = [0u8; 2];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::RankWidth { rank: board_rank + 1 });
                }
                file += empty_count as usize;
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;

            if file >= 8 {
                return Err(FenError::RankWidth { rank: board_rank + 1 });
            }

            if piece == PieceKind::King {
                kings[color.index()] += 1;
                if kings[color.index()] > 1 {
                    return Err(FenError::TooManyKings(color));
                }
            }

            board[board_rank * 8 + file] = make_cell(color, piece);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::RankWidth { rank: board_rank + 1 });
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(FenError::InvalidActiveColor(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        let bit = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(FenError::InvalidCastling(castling_part.to_owned())),
        };
        if rights & bit != 0 {
            return Err(FenError::InvalidCastling(castling_part.to_owned()));
        }
        rights |= bit;
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| FenError::InvalidEnPassant(en_passant_part.to_owned()))?;

    // Light to move means Dark just double-pushed, leaving the target on rank 6.
    let expected_rank = match side_to_move {
        Color::Light => 5,
        Color::Dark => 2,
    };
    if square_rank(square) != expected_rank {
        return Err(FenError::EnPassantColorMismatch {
            square: en_passant_part.to_owned(),
            side: side_to_move,
        });
    }

    Ok(Some(square))
}

fn parse_counter(field: &'static str, value: &str) -> Result<u16, FenError> {
    value.parse::<u16>().map_err(|_| FenError::InvalidClock {
        field,
        value: value.to_owned(),
    })
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}

#[cfg(test)]
mod tests {
    use super::{parse_fen, position_key};
    use crate::chess_errors::{ChessError, FenError};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    fn fen_error(fen: &str) -> FenError {
        match parse_fen(fen) {
            Err(ChessError::MalformedFen(err)) => err,
            other => panic!("expected FEN error for {fen}, got {other:?}"),
        }
    }

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.castling_rights, CASTLE_ALL);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.board[0], make_cell(Color::Light, PieceKind::Rook));
        assert_eq!(game_state.board[4], make_cell(Color::Light, PieceKind::King));
        assert_eq!(game_state.board[59], make_cell(Color::Dark, PieceKind::Queen));
        assert_eq!(game_state.board[36], EMPTY);
    }

    #[test]
    fn rejects_structural_errors() {
        assert_eq!(fen_error(""), FenError::MissingField("piece placement"));
        assert_eq!(
            fen_error("8/8/8/8/8/8/8/8 w - - 0"),
            FenError::MissingField("fullmove number")
        );
        assert_eq!(fen_error("8/8/8/8/8/8/8/8 w - - 0 1 x"), FenError::ExtraFields);
        assert_eq!(fen_error("8/8/8/8/8/8/8 w - - 0 1"), FenError::RankCount(7));
        assert_eq!(fen_error("9/8/8/8/8/8/8/8 w - - 0 1"), FenError::RankWidth { rank: 8 });
        assert_eq!(fen_error("8/8/8/8/8/8/8/7 w - - 0 1"), FenError::RankWidth { rank: 1 });
        assert_eq!(fen_error("8/8/8/8/8/8/8/7x w - - 0 1"), FenError::InvalidPiece('x'));
    }

    #[test]
    fn rejects_bad_state_fields() {
        assert_eq!(
            fen_error("8/8/8/8/8/8/8/8 x - - 0 1"),
            FenError::InvalidActiveColor("x".to_owned())
        );
        assert_eq!(
            fen_error("8/8/8/8/8/8/8/8 w KK - 0 1"),
            FenError::InvalidCastling("KK".to_owned())
        );
        assert_eq!(
            fen_error("8/8/8/8/8/8/8/8 w - z9 0 1"),
            FenError::InvalidEnPassant("z9".to_owned())
        );
        assert_eq!(
            fen_error("8/8/8/8/8/8/8/8 w - - x 1"),
            FenError::InvalidClock {
                field: "halfmove clock",
                value: "x".to_owned()
            }
        );
    }

    #[test]
    fn en_passant_square_must_match_side_to_move() {
        assert!(parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").is_ok());
        assert_eq!(
            fen_error("4k3/8/8/3pP3/8/8/8/4K3 b - d6 0 1"),
            FenError::EnPassantColorMismatch {
                square: "d6".to_owned(),
                side: Color::Dark
            }
        );
    }

    #[test]
    fn second_king_of_a_color_is_rejected() {
        assert_eq!(
            fen_error("k6r/8/8/8/8/8/8/K6K w - - 0 1"),
            FenError::TooManyKings(Color::Light)
        );
        assert_eq!(
            fen_error("kk6/8/8/8/8/8/8/K7 b - - 0 1"),
            FenError::TooManyKings(Color::Dark)
        );
        // A missing king parses; `status()` reports it later.
        assert!(parse_fen("8/8/8/8/8/8/8/K7 w - - 0 1").is_ok());
    }

    #[test]
    fn position_key_drops_clocks() {
        assert_eq!(
            position_key(STARTING_POSITION_FEN),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
        );
    }
}
