//! Full legal move generation pipeline.
//!
//! Piece-wise pseudo-legal generation over the 64 squares, then a
//! simulation filter that drops every move leaving the mover's king attacked.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Every move `side` could make ignoring the safety of its own king.
/// Castling already excludes starting, passing, or landing on an attacked
/// square.
pub fn generate_pseudo_legal_moves(
    board: &Board,
    side: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);

    for from in 0..64u8 {
        let Some((color, kind)) = cell_piece(board[from as usize]) else {
            continue;
        };
        if color != side {
            continue;
        }

        match kind {
            PieceKind::Pawn => generate_pawn_moves(board, from, side, en_passant_square, &mut out),
            PieceKind::Knight => generate_knight_moves(board, from, side, &mut out),
            PieceKind::Bishop => generate_bishop_moves(board, from, side, &mut out),
            PieceKind::Rook => generate_rook_moves(board, from, side, &mut out),
            PieceKind::Queen => generate_queen_moves(board, from, side, &mut out),
            PieceKind::King => generate_king_moves(board, from, side, castling_rights, &mut out),
        }
    }

    out
}

/// Pseudo-legal moves whose result leaves `side`'s king unattacked.
pub fn generate_legal_moves(
    board: &Board,
    side: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
) -> Vec<Move> {
    let mut legal = generate_pseudo_legal_moves(board, side, castling_rights, en_passant_square);
    legal.retain(|&mv| leaves_king_safe(board, side, castling_rights, en_passant_square, mv));
    legal
}

/// Simulate `mv` on a copy of `board` and report whether `side`'s king
/// survives it.
#[inline]
pub fn leaves_king_safe(
    board: &Board,
    side: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
    mv: Move,
) -> bool {
    let mut scratch = *board;
    apply_move(&mut scratch, mv, castling_rights, en_passant_square);
    !is_king_in_check(&scratch, side)
}
