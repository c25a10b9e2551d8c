use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_leaper_moves;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(board: &Board, from: Square, side: Color, out: &mut Vec<Move>) {
    push_leaper_moves(board, from, side, knight_attacks(from), out);
}
