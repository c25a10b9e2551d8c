use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::AppliedMove;
use crate::moves::move_descriptions::Move;

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub applied: AppliedMove,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
