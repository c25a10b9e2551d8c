use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_rays::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(board: &Board, from: Square, side: Color, out: &mut Vec<Move>) {
    push_slider_moves(board, from, side, &BISHOP_DIRECTIONS, out);
}
