//! Long-algebraic move text (`e2e4`, `e7e8q`, `e1g1`).
//!
//! Decoding only checks syntax locally; the move itself is found by matching
//! origin, destination and promotion piece against the legal moves of the
//! position, which also supplies the castling and en-passant tags.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = square_to_algebraic(mv.from);
    out.push_str(&square_to_algebraic(mv.to));
    if let Some(piece) = mv.promotion_piece() {
        out.push(promotion_to_char(piece));
    }
    out
}

pub fn long_algebraic_to_move(long_algebraic: &str, game_state: &GameState) -> ChessResult<Move> {
    let (from, to, promotion) = parse_long_algebraic(long_algebraic)?;

    game_state
        .legal_moves()
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion_piece() == promotion)
        .ok_or_else(|| ChessError::UnmatchedMoveText(long_algebraic.to_owned()))
}

/// Split move text into origin, destination and optional promotion piece.
pub fn parse_long_algebraic(long_algebraic: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let invalid = || ChessError::InvalidMoveText(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| invalid())?;
    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(ch) => Some(char_to_promotion(ch).ok_or_else(invalid)?),
    };

    Ok((from, to, promotion))
}

fn promotion_to_char(piece: PieceKind) -> char {
    match piece {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        _ => 'q',
    }
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}
