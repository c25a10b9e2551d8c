use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Queen moves are the rook set followed by the bishop set from the same square.
pub fn generate_queen_moves(board: &Board, from: Square, side: Color, out: &mut Vec<Move>) {
    generate_rook_moves(board, from, side, out);
    generate_bishop_moves(board, from, side, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn queen_in_centre_of_empty_board_has_27_moves() {
        let game = GameState::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("FEN");
        let mut out = Vec::new();
        generate_queen_moves(&game.board, 27, game.side_to_move, &mut out);
        // Neither king sits on a line through d4.
        assert_eq!(out.len(), 27);
    }
}
