//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! Every scorer answers from White's point of view: positive favors Light.

use crate::game_state::chess_types::*;
use crate::search::piece_square_tables::{table_index, tables_for};

/// Finite stand-in for a forced mate; larger than any material balance.
pub const MATE_SCORE: i32 = 30000;

/// Non-pawn, non-king material of the full starting army, both sides:
/// `2 * (2*320 + 2*330 + 2*500 + 900)`.
pub const PHASE_MATERIAL_MAX: i32 = 6200;

pub trait BoardScorer: Send + Sync {
    /// Static score, White-positive.
    fn score(&self, board: &Board) -> i32;
}

#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// 1.0 with every officer on the board, 0.0 with none.
pub fn game_phase(board: &Board) -> f32 {
    let officers: i32 = board
        .iter()
        .filter_map(|&cell| cell_kind(cell))
        .filter(|&kind| !matches!(kind, PieceKind::Pawn | PieceKind::King))
        .map(piece_value)
        .sum();

    (officers as f32 / PHASE_MATERIAL_MAX as f32).clamp(0.0, 1.0)
}

/// Flat piece values only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .iter()
            .filter_map(|&cell| cell_piece(cell))
            .map(|(color, kind)| match color {
                Color::Light => piece_value(kind),
                Color::Dark => -piece_value(kind),
            })
            .sum()
    }
}

/// Material plus piece-square bonuses tapered between opening and endgame
/// tables by `game_phase`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl BoardScorer for PieceSquareScorer {
    fn score(&self, board: &Board) -> i32 {
        let phase = game_phase(board);
        let mut score = 0i32;

        for (square, &cell) in board.iter().enumerate() {
            let Some((color, kind)) = cell_piece(cell) else {
                continue;
            };
            let (opening, endgame) = tables_for(kind);
            let idx = table_index(color, square as Square);
            let positional =
                (opening[idx] as f32 * phase + endgame[idx] as f32 * (1.0 - phase)).round() as i32;
            let value = piece_value(kind) + positional;

            match color {
                Color::Light => score += value,
                Color::Dark => score -= value,
            }
        }

        score
    }
}

/// Default static evaluation used by the search.
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    PieceSquareScorer.score(board)
}
