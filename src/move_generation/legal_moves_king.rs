use crate::game_state::chess_rules::{castle_geometry, king_home, CastleSide};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_leaper_moves;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{Move, MoveTag};

pub fn generate_king_moves(
    board: &Board,
    from: Square,
    side: Color,
    castling_rights: CastlingRights,
    out: &mut Vec<Move>,
) {
    push_leaper_moves(board, from, side, king_attacks(from), out);
    generate_castling_moves(board, from, side, castling_rights, out);
}

fn generate_castling_moves(
    board: &Board,
    king_from: Square,
    side: Color,
    castling_rights: CastlingRights,
    out: &mut Vec<Move>,
) {
    if king_from != king_home(side) {
        return;
    }

    let enemy = side.opposite();
    let rook = make_cell(side, PieceKind::Rook);

    for (wing, tag) in [
        (CastleSide::Kingside, MoveTag::CastleKingside),
        (CastleSide::Queenside, MoveTag::CastleQueenside),
    ] {
        let geometry = castle_geometry(side, wing);
        if castling_rights & geometry.right == 0 {
            continue;
        }
        if board[geometry.rook_from as usize] != rook {
            continue;
        }
        if geometry
            .must_be_empty
            .iter()
            .any(|&sq| board[sq as usize] != EMPTY)
        {
            continue;
        }
        // King may not start, pass through, or land in check.
        if geometry
            .must_be_safe
            .iter()
            .any(|&sq| is_square_attacked(board, sq, enemy))
        {
            continue;
        }

        out.push(Move::with_tag(geometry.king_from, geometry.king_to, tag));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::{Move, MoveTag};

    fn king_moves(fen: &str) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let from = crate::move_generation::legal_move_checks::king_square(
            &game.board,
            game.side_to_move,
        )
        .expect("king should exist");
        let mut out = Vec::new();
        generate_king_moves(&game.board, from, game.side_to_move, game.castling_rights, &mut out);
        out
    }

    fn castles(moves: &[Move]) -> Vec<MoveTag> {
        moves.iter().filter(|m| m.is_castle()).map(|m| m.tag).collect()
    }

    #[test]
    fn both_castles_available_on_clear_back_rank() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(
            castles(&moves),
            vec![MoveTag::CastleKingside, MoveTag::CastleQueenside]
        );
        assert!(moves.contains(&Move::with_tag(4, 6, MoveTag::CastleKingside)));
        assert!(moves.contains(&Move::with_tag(4, 2, MoveTag::CastleQueenside)));
    }

    #[test]
    fn castling_requires_the_right() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1");
        assert_eq!(castles(&moves), vec![MoveTag::CastleQueenside]);
    }

    #[test]
    fn castling_requires_rook_on_home_square() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K1R1 w KQkq - 0 1");
        assert_eq!(castles(&moves), vec![MoveTag::CastleQueenside]);
    }

    #[test]
    fn castling_blocked_by_piece_between() {
        // b1 knight blocks the queenside even though the king never crosses b1.
        let moves = king_moves("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
        assert_eq!(castles(&moves), vec![MoveTag::CastleKingside]);
    }

    #[test]
    fn no_castling_out_of_through_or_into_check() {
        // Rook on e8 checks the king.
        assert!(castles(&king_moves("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1")).is_empty());
        // Rook on f8 covers f1 (transit square of O-O).
        assert_eq!(
            castles(&king_moves("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1")),
            vec![MoveTag::CastleQueenside]
        );
        // Rook on c8 covers c1 (destination of O-O-O).
        assert_eq!(
            castles(&king_moves("2r3k1/8/8/8/8/8/8/R3K2R w KQ - 0 1")),
            vec![MoveTag::CastleKingside]
        );
        // Rook on b8 only covers b1, which the king never touches.
        assert_eq!(
            castles(&king_moves("1r4k1/8/8/8/8/8/8/R3K2R w KQ - 0 1")).len(),
            2
        );
    }

    #[test]
    fn dark_castles_from_e8() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1");
        assert!(moves.contains(&Move::with_tag(60, 62, MoveTag::CastleKingside)));
        assert!(moves.contains(&Move::with_tag(60, 58, MoveTag::CastleQueenside)));
    }
}
