use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    pub fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Snapshot of the state one ply needs: board plus the threaded flags.
#[derive(Clone, Copy)]
struct Node {
    board: Board,
    side: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
}

impl Node {
    fn moves(&self) -> Vec<Move> {
        generate_legal_moves(&self.board, self.side, self.castling_rights, self.en_passant_square)
    }
}

/// Count leaf nodes `depth` plies below `game_state`, classifying the move
/// that reached each leaf.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let root = Node {
        board: game_state.board,
        side: game_state.side_to_move,
        castling_rights: game_state.castling_rights,
        en_passant_square: game_state.en_passant_square,
    };

    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    perft_recurse(&root, depth, &mut total);
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    game_state
        .legal_moves()
        .into_iter()
        .map(|mv| (mv, perft(&game_state.after_move(mv), depth - 1).nodes))
        .collect()
}

fn perft_recurse(node: &Node, depth: u8, counts: &mut PerftCounts) {
    for mv in node.moves() {
        let mut board = node.board;
        let applied = apply_move(&mut board, mv, node.castling_rights, node.en_passant_square);
        let child = Node {
            board,
            side: node.side.opposite(),
            castling_rights: applied.castling_rights,
            en_passant_square: applied.en_passant_square,
        };

        if depth > 1 {
            perft_recurse(&child, depth - 1, counts);
            continue;
        }

        counts.nodes += 1;
        if applied.is_capture() {
            counts.captures += 1;
        }
        if mv.is_en_passant() {
            counts.en_passant += 1;
        }
        if mv.is_castle() {
            counts.castles += 1;
        }
        if mv.promotion_piece().is_some() {
            counts.promotions += 1;
        }
        if is_king_in_check(&child.board, child.side) {
            counts.checks += 1;
            if child.moves().is_empty() {
                counts.checkmates += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();
        assert_eq!(
            perft(&game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_depth_two() {
        assert_eq!(perft(&GameState::new_game(), 2).nodes, 400);
    }

    #[test]
    fn start_position_depth_three_counters() {
        let counts = perft(&GameState::new_game(), 3);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn kiwipete_depth_two_counters() {
        let game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");

        let depth_one = perft(&game, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&game, 2);
        assert_eq!(depth_two.nodes, 2039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
        assert_eq!(depth_two.checks, 3);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divided = perft_divide(&game, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|&(_, nodes)| nodes == 20));
        assert_eq!(divided.iter().map(|&(_, n)| n).sum::<u64>(), 400);
    }
}
