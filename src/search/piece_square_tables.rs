//! Positional bonus tables in centipawns.
//!
//! Each table is 64 entries in square order (`a1` first, `h8` last) from
//! White's side of the board. Dark pieces read the vertically mirrored
//! square (`square ^ 56`).

use crate::game_state::chess_types::{Color, PieceKind, Square};

pub type PieceSquareTable = [i32; 64];

#[rustfmt::skip]
pub const PAWN_OPENING: PieceSquareTable = [
      0,   0,   0,   0,   0,   0,   0,   0,
     78,  83,  44,  10,  26,  53, -32,   1,
     56,  51,  24,  -5,  -6,  13,  -4, -11,
     52,  35,   1, -10, -19,   0,  10,  -8,
     46,  21,  -8, -17, -17,  -8,  19,  46,
     48,  22,  -8, -16, -16,  -9,  21,  48,
     43,  17,  -9, -18, -18,  -9,  17,  43,
      0,   0,   0,   0,   0,   0,   0,   0,
];

/// Advancement only; file does not matter once the board empties.
#[rustfmt::skip]
pub const PAWN_ENDGAME: PieceSquareTable = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,   5,   5,   5,   5,   5,   5,   5,
     10,  10,  10,  10,  10,  10,  10,  10,
     20,  20,  20,  20,  20,  20,  20,  20,
     35,  35,  35,  35,  35,  35,  35,  35,
     55,  55,  55,  55,  55,  55,  55,  55,
     80,  80,  80,  80,  80,  80,  80,  80,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
pub const KNIGHT: PieceSquareTable = [
   -167, -89, -34, -49,  61, -97, -15, -107,
    -73, -41,  72,  36,  23,  62,   7,  -17,
    -80, -18,  51,  33,  56,  31,  -4,  -53,
    -55, -25,  12,  24,  24,  12, -25,  -55,
    -55, -25,  12,  24,  24,  12, -25,  -55,
    -80, -18,  51,  33,  56,  31,  -4,  -53,
    -73, -41,  72,  36,  23,  62,   7,  -17,
   -167, -89, -34, -49,  61, -97, -15, -107,
];

#[rustfmt::skip]
pub const BISHOP: PieceSquareTable = [
    -29,  -8, -25, -38, -27, -44,  12,  -9,
    -43, -14, -42, -29, -11, -22,  -9, -32,
    -25, -12, -20, -16, -17,  18,  -4, -14,
    -13,  -3, -14, -15, -14,  -5,  -1, -13,
    -13,  -3, -14, -15, -14,  -5,  -1, -13,
    -25, -12, -20, -16, -17,  18,  -4, -14,
    -43, -14, -42, -29, -11, -22,  -9, -32,
    -29,  -8, -25, -38, -27, -44,  12,  -9,
];

#[rustfmt::skip]
pub const ROOK: PieceSquareTable = [
     35,  29,  33,   4,  37,  33,  56,  50,
     55,  29,  56,  55,  55,  62,  56,  55,
     -2,   4,  16,  51,  47,  12,  26,  28,
     -3,  -9,  -2,  12,  14,  -1,  -3,  -4,
     -3,  -9,  -2,  12,  14,  -1,  -3,  -4,
     -2,   4,  16,  51,  47,  12,  26,  28,
     55,  29,  56,  55,  55,  62,  56,  55,
     35,  29,  33,   4,  37,  33,  56,  50,
];

#[rustfmt::skip]
pub const QUEEN: PieceSquareTable = [
     -9,  22,  22,  27,  27,  22,  22,  -9,
    -16, -16, -16,  -7,  -7, -16, -16, -16,
    -16, -16, -17,  13,  14, -17, -16, -16,
     -3, -14,  -2,  -5,  -5,  -2, -14,  -3,
     -3, -14,  -2,  -5,  -5,  -2, -14,  -3,
    -16, -16, -17,  13,  14, -17, -16, -16,
    -16, -16, -16,  -7,  -7, -16, -16, -16,
     -9,  22,  22,  27,  27,  22,  22,  -9,
];

#[rustfmt::skip]
pub const KING_OPENING: PieceSquareTable = [
    -65, -23, -15, -15, -15, -15, -23, -65,
    -44, -15, -13, -12, -12, -13, -15, -44,
    -28,  -8,  -6,  -7,  -7,  -6,  -8, -28,
    -15,  -4,   2,  -8,  -8,   2,  -4, -15,
    -15,  -4,   2,  -8,  -8,   2,  -4, -15,
    -28,  -8,  -6,  -7,  -7,  -6,  -8, -28,
    -44, -15, -13, -12, -12, -13, -15, -44,
    -65, -23, -15, -15, -15, -15, -23, -65,
];

#[rustfmt::skip]
pub const KING_ENDGAME: PieceSquareTable = [
    -50, -30, -10, -10, -10, -10, -30, -50,
    -30, -10,  10,  20,  20,  10, -10, -30,
    -10,  10,  20,  30,  30,  20,  10, -10,
    -10,  10,  30,  40,  40,  30,  10, -10,
    -10,  10,  30,  40,  40,  30,  10, -10,
    -10,  10,  20,  30,  30,  20,  10, -10,
    -30, -10,  10,  20,  20,  10, -10, -30,
    -50, -30, -10, -10, -10, -10, -30, -50,
];

/// Opening and endgame tables for `piece`. Minor and major pieces use one
/// table for both phases.
pub const fn tables_for(piece: PieceKind) -> (&'static PieceSquareTable, &'static PieceSquareTable) {
    match piece {
        PieceKind::Pawn => (&PAWN_OPENING, &PAWN_ENDGAME),
        PieceKind::Knight => (&KNIGHT, &KNIGHT),
        PieceKind::Bishop => (&BISHOP, &BISHOP),
        PieceKind::Rook => (&ROOK, &ROOK),
        PieceKind::Queen => (&QUEEN, &QUEEN),
        PieceKind::King => (&KING_OPENING, &KING_ENDGAME),
    }
}

/// Table index for a piece of `color` standing on `square`.
#[inline]
pub const fn table_index(color: Color, square: Square) -> usize {
    match color {
        Color::Light => square as usize,
        Color::Dark => (square ^ 56) as usize,
    }
}
