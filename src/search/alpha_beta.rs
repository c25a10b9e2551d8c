//! Depth-limited alpha-beta minimax.
//!
//! Every node owns a value copy of the board; castling rights and the
//! en-passant target are threaded through as arguments. Scores are always
//! from White's point of view: Light maximizes, Dark minimizes.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer, MATE_SCORE};
use crate::search::move_ordering::order_moves;

/// Window bound strictly outside every reachable score.
const SCORE_BOUND: i32 = MATE_SCORE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Shuffle root candidates with this seed before ordering.
    pub shuffle_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            shuffle_seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Search with the default evaluator and no root shuffle.
pub fn find_best_move(
    board: &Board,
    depth: u8,
    side: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
) -> SearchResult {
    let config = SearchConfig {
        depth,
        shuffle_seed: None,
    };
    find_best_move_with(&PieceSquareScorer, board, side, castling_rights, en_passant_square, &config)
}

pub fn find_best_move_with<S: BoardScorer>(
    scorer: &S,
    board: &Board,
    side: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
    config: &SearchConfig,
) -> SearchResult {
    let mut nodes = 1u64;
    let mut moves = generate_legal_moves(board, side, castling_rights, en_passant_square);

    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            best_score: terminal_score(board, side, 0),
            nodes,
        };
    }

    if let Some(seed) = config.shuffle_seed {
        moves.shuffle(&mut StdRng::seed_from_u64(seed));
    }
    order_moves(board, &mut moves);

    let mut alpha = -SCORE_BOUND;
    let mut beta = SCORE_BOUND;
    let mut best_move = None;
    let mut best_score = worst_for(side);
    let child_depth = config.depth.saturating_sub(1);

    for mv in moves {
        let mut child = *board;
        let applied = apply_move(&mut child, mv, castling_rights, en_passant_square);
        let score = alpha_beta(
            scorer,
            &child,
            child_depth,
            alpha,
            beta,
            side.opposite(),
            applied.castling_rights,
            applied.en_passant_square,
            1,
            &mut nodes,
        );

        if improves(side, score, best_score) || best_move.is_none() {
            best_score = score;
            best_move = Some(mv);
        }
        match side {
            Color::Light => alpha = alpha.max(best_score),
            Color::Dark => beta = beta.min(best_score),
        }
    }

    debug!(
        "root search done: depth {} nodes {} score {} move {:?}",
        config.depth, nodes, best_score, best_move
    );
    SearchResult {
        best_move,
        best_score,
        nodes,
    }
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta<S: BoardScorer>(
    scorer: &S,
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    side: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
    ply: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return scorer.score(board);
    }

    let mut moves = generate_legal_moves(board, side, castling_rights, en_passant_square);
    if moves.is_empty() {
        return terminal_score(board, side, ply);
    }
    order_moves(board, &mut moves);

    let mut best = worst_for(side);

    for mv in moves {
        let mut child = *board;
        let applied = apply_move(&mut child, mv, castling_rights, en_passant_square);
        let score = alpha_beta(
            scorer,
            &child,
            depth - 1,
            alpha,
            beta,
            side.opposite(),
            applied.castling_rights,
            applied.en_passant_square,
            ply.saturating_add(1),
            nodes,
        );

        match side {
            Color::Light => {
                best = best.max(score);
                alpha = alpha.max(best);
            }
            Color::Dark => {
                best = best.min(score);
                beta = beta.min(best);
            }
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Score of a node with no legal moves. A mated side loses by `MATE_SCORE`
/// less the distance from the root, so nearer mates score further out.
fn terminal_score(board: &Board, side: Color, ply: u8) -> i32 {
    if !is_king_in_check(board, side) {
        return 0;
    }
    let mate = MATE_SCORE - i32::from(ply);
    match side {
        Color::Light => -mate,
        Color::Dark => mate,
    }
}

#[inline]
const fn worst_for(side: Color) -> i32 {
    match side {
        Color::Light => -SCORE_BOUND,
        Color::Dark => SCORE_BOUND,
    }
}

#[inline]
const fn improves(side: Color, score: i32, best: i32) -> bool {
    match side {
        Color::Light => score > best,
        Color::Dark => score < best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;
    use crate::search::board_scoring::MaterialScorer;
    use crate::utils::long_algebraic::move_to_long_algebraic;

    fn search(fen: &str, depth: u8) -> SearchResult {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        find_best_move(
            &game.board,
            depth,
            game.side_to_move,
            game.castling_rights,
            game.en_passant_square,
        )
    }

    fn best_text(result: &SearchResult) -> String {
        move_to_long_algebraic(result.best_move.expect("a best move should exist"))
    }

    #[test]
    fn mated_and_stalemated_roots_have_no_move() {
        let mated = search("k7/1Q6/2K5/8/8/8/8/8 b - - 0 1", 3);
        assert_eq!(mated.best_move, None);
        assert_eq!(mated.best_score, MATE_SCORE);

        let white_mated = search("4k3/8/8/8/8/8/3q4/3qK3 w - - 0 1", 3);
        assert_eq!(white_mated.best_move, None);
        assert_eq!(white_mated.best_score, -MATE_SCORE);

        let stalemate = search("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1", 3);
        assert_eq!(stalemate.best_move, None);
        assert_eq!(stalemate.best_score, 0);
    }

    #[test]
    fn depth_zero_scores_each_root_move_statically() {
        let game = GameState::new_game();
        let result = find_best_move(&game.board, 0, Color::Light, CASTLE_ALL, None);
        assert!(result.best_move.is_some());
        assert_eq!(result.nodes, 21);
    }

    #[test]
    fn takes_the_hanging_queen() {
        let result = search("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1", 1);
        assert_eq!(best_text(&result), "d1d5");
    }

    #[test]
    fn black_minimizes() {
        let result = search("4k2K/8/8/8/8/8/2Q5/3q4 b - - 0 1", 1);
        assert_eq!(best_text(&result), "d1c2");
        assert!(result.best_score < 0);
    }

    #[test]
    fn finds_mate_in_one() {
        let result = search("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 2);
        assert_eq!(best_text(&result), "a1a8");
        assert_eq!(result.best_score, MATE_SCORE - 1);
    }

    #[test]
    fn dark_finds_mate_in_one() {
        let result = search("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1", 2);
        assert_eq!(best_text(&result), "a8a1");
        assert_eq!(result.best_score, -(MATE_SCORE - 1));
    }

    #[test]
    fn pruning_matches_plain_minimax_score() {
        // Alpha-beta must return the exact minimax value at the root.
        fn minimax(board: &Board, depth: u8, side: Color, rights: CastlingRights, ep: Option<Square>, ply: u8) -> i32 {
            if depth == 0 {
                return MaterialScorer.score(board);
            }
            let moves = generate_legal_moves(board, side, rights, ep);
            if moves.is_empty() {
                return terminal_score(board, side, ply);
            }
            let scores = moves.into_iter().map(|mv| {
                let mut child = *board;
                let applied = apply_move(&mut child, mv, rights, ep);
                minimax(&child, depth - 1, side.opposite(), applied.castling_rights, applied.en_passant_square, ply + 1)
            });
            match side {
                Color::Light => scores.max().unwrap_or(0),
                Color::Dark => scores.min().unwrap_or(0),
            }
        }

        let game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let config = SearchConfig {
            depth: 2,
            shuffle_seed: None,
        };
        let pruned = find_best_move_with(
            &MaterialScorer,
            &game.board,
            game.side_to_move,
            game.castling_rights,
            game.en_passant_square,
            &config,
        );
        let exact = minimax(&game.board, 2, game.side_to_move, game.castling_rights, game.en_passant_square, 0);
        assert_eq!(pruned.best_score, exact);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let game = GameState::new_game();
        let config = SearchConfig {
            depth: 1,
            shuffle_seed: Some(42),
        };
        let run = || {
            find_best_move_with(
                &MaterialScorer,
                &game.board,
                game.side_to_move,
                game.castling_rights,
                game.en_passant_square,
                &config,
            )
        };
        assert_eq!(run(), run());
    }
}
