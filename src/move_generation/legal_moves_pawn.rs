use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::holds_enemy;
use crate::moves::move_descriptions::{Move, MoveTag};
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    side: Color,
    en_passant_square: Option<Square>,
    out: &mut Vec<Move>,
) {
    let rank = square_rank(from);
    let promotion_rank = side.promotion_rank();

    // pushes
    if let Some(to) = offset_square(from, 0, side.forward()) {
        if board[to as usize] == EMPTY {
            push_pawn_move(from, to, promotion_rank, out);

            if rank == side.pawn_start_rank() {
                if let Some(two_step) = offset_square(to, 0, side.forward()) {
                    if board[two_step as usize] == EMPTY {
                        out.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for to in squares_in(pawn_attacks(side, from)) {
        if holds_enemy(board, side, to) {
            push_pawn_move(from, to, promotion_rank, out);
        } else if en_passant_square == Some(to) && rank == en_passant_capture_rank(side) {
            out.push(Move::with_tag(from, to, MoveTag::EnPassant));
        }
    }
}

/// Rank (0-based) a pawn must stand on to capture en passant.
#[inline]
pub const fn en_passant_capture_rank(side: Color) -> u8 {
    match side {
        Color::Light => 4,
        Color::Dark => 3,
    }
}

fn push_pawn_move(from: Square, to: Square, promotion_rank: u8, out: &mut Vec<Move>) {
    if square_rank(to) == promotion_rank {
        for promo in PROMOTION_KINDS {
            out.push(Move::with_tag(from, to, MoveTag::Promotion(promo)));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::{Move, MoveTag};
    use crate::utils::algebraic::algebraic_to_square as sq;

    fn pawn_moves(fen: &str, from: &str) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        let from = sq(from).expect("square should parse");
        generate_pawn_moves(&game.board, from, game.side_to_move, game.en_passant_square, &mut out);
        out
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", "e2");
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn blocked_pawn_cannot_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2");
        assert!(moves.is_empty());

        let moves = pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2");
        assert_eq!(moves, vec![Move::new(12, 20)]);
    }

    #[test]
    fn promotion_emits_four_variants_per_target() {
        let moves = pawn_moves("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7");
        // a8 push and b8 capture, four pieces each
        assert_eq!(moves.len(), 8);
        assert!(moves
            .iter()
            .all(|m| matches!(m.tag, MoveTag::Promotion(_))));
    }

    #[test]
    fn en_passant_requires_adjacent_rank() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5");
        assert!(moves.contains(&Move::with_tag(36, 43, MoveTag::EnPassant)));

        let black = pawn_moves("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1", "e4");
        assert!(black.contains(&Move::with_tag(28, 19, MoveTag::EnPassant)));
    }

    #[test]
    fn dark_pawns_move_down_the_board() {
        let moves = pawn_moves("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1", "d7");
        assert_eq!(moves, vec![Move::new(51, 43), Move::new(51, 35)]);
    }
}
