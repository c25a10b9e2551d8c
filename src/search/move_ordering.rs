//! Candidate ordering for alpha-beta.
//!
//! Promotions first (by promoted piece), then captures by MVV-LVA, then quiet
//! moves. The sort is stable so equal keys keep generation order, which is
//! what makes root tie-breaking deterministic.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveTag};
use crate::search::board_scoring::piece_value;

const PROMOTION_BASE: i32 = 1_000_000;
const CAPTURE_BASE: i32 = 100_000;

/// Ordering key for `mv` on `board`; larger searches earlier.
pub fn move_order_score(board: &Board, mv: Move) -> i32 {
    if let MoveTag::Promotion(piece) = mv.tag {
        return PROMOTION_BASE + piece_value(piece);
    }

    let victim = match mv.tag {
        MoveTag::EnPassant => Some(PieceKind::Pawn),
        _ => cell_kind(board[mv.to as usize]),
    };
    let Some(victim) = victim else {
        return 0;
    };
    let attacker = cell_kind(board[mv.from as usize]).map_or(0, piece_value);

    CAPTURE_BASE + piece_value(victim) - attacker
}

pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| -move_order_score(board, mv));
}
