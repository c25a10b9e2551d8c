//! Attack detection over the mailbox board.
//!
//! `is_square_attacked` is the one primitive every legality decision rests
//! on: king safety in the legal filter, castling transit squares, and the
//! checkmate/stalemate split in search.

use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attackers_of;
use crate::moves::sliding_rays::{is_straight, ray, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    let king = make_cell(color, PieceKind::King);
    board
        .iter()
        .position(|&cell| cell == king)
        .map(|idx| idx as Square)
}

/// True when `color`'s king is attacked. A board without that king is
/// reported as not in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True when any piece of `attacker_color` attacks `square`.
///
/// Checks pawns, knights, the eight slider rays, then the enemy king.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let pawn = make_cell(attacker_color, PieceKind::Pawn);
    if squares_in(pawn_attackers_of(attacker_color, square)).any(|sq| board[sq as usize] == pawn) {
        return true;
    }

    let knight = make_cell(attacker_color, PieceKind::Knight);
    if squares_in(knight_attacks(square)).any(|sq| board[sq as usize] == knight) {
        return true;
    }

    let rook = make_cell(attacker_color, PieceKind::Rook);
    let bishop = make_cell(attacker_color, PieceKind::Bishop);
    let queen = make_cell(attacker_color, PieceKind::Queen);
    for direction in ROOK_DIRECTIONS.into_iter().chain(BISHOP_DIRECTIONS) {
        let slider = if is_straight(direction) { rook } else { bishop };
        let first_hit = ray(square, direction).find(|&sq| board[sq as usize] != EMPTY);
        if let Some(hit) = first_hit {
            let cell = board[hit as usize];
            if cell == slider || cell == queen {
                return true;
            }
        }
    }

    let king = make_cell(attacker_color, PieceKind::King);
    squares_in(king_attacks(square)).any(|sq| board[sq as usize] == king)
}
