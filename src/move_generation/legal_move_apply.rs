//! Position mutator.
//!
//! `apply_move` edits a board in place and returns the state deltas the
//! move produced; it never reads or writes anything outside its arguments.
//! Search uses it on value copies. `revert_move` is its exact inverse and is
//! only used by the top-level game record.

use crate::game_state::chess_rules::{castle_geometry, color_castling_rights, king_home, rook_home_right, CastleSide};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveTag};

/// What `apply_move` changed besides the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// Cell removed from the board by the move (`EMPTY` for quiet moves).
    /// For en passant this is the pawn behind the destination.
    pub captured: Cell,
    /// Castling rights after the move.
    pub castling_rights: CastlingRights,
    /// En-passant target after the move.
    pub en_passant_square: Option<Square>,
}

impl AppliedMove {
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured != EMPTY
    }
}

/// Apply `mv` to `board`, returning the captured cell and the next castling
/// rights / en-passant target. Clocks and side to move are the caller's.
pub fn apply_move(
    board: &mut Board,
    mv: Move,
    castling_rights: CastlingRights,
    _en_passant_square: Option<Square>,
) -> AppliedMove {
    let from = mv.from as usize;
    let to = mv.to as usize;
    let moving = board[from];
    let moving_color = cell_color(moving);

    let mut captured = board[to];
    board[to] = moving;
    board[from] = EMPTY;

    match mv.tag {
        MoveTag::Standard => {}
        MoveTag::EnPassant => {
            if let Some(capture_sq) = en_passant_victim_square(mv) {
                captured = board[capture_sq as usize];
                board[capture_sq as usize] = EMPTY;
            }
        }
        MoveTag::Promotion(kind) => {
            if let Some(color) = moving_color {
                board[to] = make_cell(color, kind);
            }
        }
        MoveTag::CastleKingside | MoveTag::CastleQueenside => {
            if let Some(color) = moving_color {
                let geometry = castle_geometry(color, castle_side(mv.tag));
                board[geometry.rook_to as usize] = board[geometry.rook_from as usize];
                board[geometry.rook_from as usize] = EMPTY;
            }
        }
    }

    let next_rights = next_castling_rights(castling_rights, mv, moving);

    let is_double_push = cell_kind(moving) == Some(PieceKind::Pawn)
        && square_rank(mv.from).abs_diff(square_rank(mv.to)) == 2;
    let en_passant_square = is_double_push.then(|| (mv.from + mv.to) / 2);

    AppliedMove {
        captured,
        castling_rights: next_rights,
        en_passant_square,
    }
}

/// Undo `mv` on `board` given the deltas `apply_move` returned for it.
pub fn revert_move(board: &mut Board, mv: Move, applied: &AppliedMove) {
    let from = mv.from as usize;
    let to = mv.to as usize;
    let landed = board[to];

    board[from] = match mv.tag {
        MoveTag::Promotion(_) => match cell_color(landed) {
            Some(color) => make_cell(color, PieceKind::Pawn),
            None => EMPTY,
        },
        _ => landed,
    };

    match mv.tag {
        MoveTag::EnPassant => {
            board[to] = EMPTY;
            if let Some(capture_sq) = en_passant_victim_square(mv) {
                board[capture_sq as usize] = applied.captured;
            }
        }
        MoveTag::CastleKingside | MoveTag::CastleQueenside => {
            board[to] = EMPTY;
            if let Some(color) = cell_color(landed) {
                let geometry = castle_geometry(color, castle_side(mv.tag));
                board[geometry.rook_from as usize] = board[geometry.rook_to as usize];
                board[geometry.rook_to as usize] = EMPTY;
            }
        }
        MoveTag::Standard | MoveTag::Promotion(_) => {
            board[to] = applied.captured;
        }
    }
}

/// Square of the pawn an en-passant capture removes: same file as the
/// destination, same rank as the origin.
#[inline]
pub fn en_passant_victim_square(mv: Move) -> Option<Square> {
    let square = make_square(square_file(mv.to), square_rank(mv.from));
    (square < 64).then_some(square)
}

#[inline]
fn castle_side(tag: MoveTag) -> CastleSide {
    match tag {
        MoveTag::CastleQueenside => CastleSide::Queenside,
        _ => CastleSide::Kingside,
    }
}

fn next_castling_rights(rights: CastlingRights, mv: Move, moving: Cell) -> CastlingRights {
    let mut next = rights;

    match cell_piece(moving) {
        Some((color, PieceKind::King)) if mv.from == king_home(color) => {
            next &= !color_castling_rights(color);
        }
        Some((_, PieceKind::Rook)) => {
            if let Some(right) = rook_home_right(mv.from) {
                next &= !right;
            }
        }
        _ => {}
    }

    // Anything landing on a rook home square removes that wing's right; if
    // the rook had already left, the right was gone anyway.
    if let Some(right) = rook_home_right(mv.to) {
        next &= !right;
    }

    next
}
