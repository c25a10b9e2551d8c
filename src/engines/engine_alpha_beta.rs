//! Fixed-depth alpha-beta engine with an optional opening book.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::search::alpha_beta::{find_best_move_with, SearchConfig};
use crate::search::board_scoring::{PieceSquareScorer, MATE_SCORE};
use crate::tables::opening_book::OpeningBook;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Deepest search `setoption name Depth` accepts.
pub const MAX_DEPTH: u8 = 12;

pub struct AlphaBetaEngine {
    config: SearchConfig,
    book: OpeningBook,
    own_book: bool,
}

impl AlphaBetaEngine {
    pub fn new(config: SearchConfig, book: OpeningBook, own_book: bool) -> Self {
        Self {
            config,
            book,
            own_book,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn own_book(&self) -> bool {
        self.own_book
    }

    fn book_move(&self, game_state: &GameState) -> Option<Move> {
        if !self.own_book {
            return None;
        }
        match self.config.shuffle_seed {
            Some(seed) => self
                .book
                .pick_weighted(game_state, &mut StdRng::seed_from_u64(seed)),
            None => self.book.pick_heaviest(game_state),
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default(), OpeningBook::minimal(), false)
    }
}

impl Engine for AlphaBetaEngine {
    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        if name.eq_ignore_ascii_case("Depth") {
            let depth = value.parse::<u8>().map_err(|_| invalid())?;
            if depth == 0 || depth > MAX_DEPTH {
                return Err(invalid());
            }
            self.config.depth = depth;
        } else if name.eq_ignore_ascii_case("Seed") {
            self.config.shuffle_seed = if value.is_empty() || value.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(value.parse::<u64>().map_err(|_| invalid())?)
            };
        } else if name.eq_ignore_ascii_case("OwnBook") {
            self.own_book = parse_check(value).ok_or_else(invalid)?;
        }

        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput> {
        // Reject a kingless board before searching it.
        game_state.status()?;

        let mut out = EngineOutput::default();

        if let Some(mv) = self.book_move(game_state) {
            info!("book move {}", move_to_long_algebraic(mv));
            out.info_lines.push("info string book move".to_owned());
            out.best_move = Some(mv);
            return Ok(out);
        }

        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth),
            ..self.config
        };
        debug!("searching depth {} seed {:?}", config.depth, config.shuffle_seed);

        let result = find_best_move_with(
            &PieceSquareScorer,
            &game_state.board,
            game_state.side_to_move,
            game_state.castling_rights,
            game_state.en_passant_square,
            &config,
        );

        out.info_lines.push(format!(
            "info depth {} score {} nodes {}",
            config.depth,
            uci_score(result.best_score, game_state.side_to_move),
            result.nodes
        ));
        out.best_move = result.best_move;
        Ok(out)
    }
}

/// Render a White-relative search score the way UCI wants it: from the side
/// to move, as `mate N` (full moves, negative when being mated) once the
/// score is a mate score, otherwise `cp N`.
pub fn uci_score(white_score: i32, side_to_move: Color) -> String {
    let score = match side_to_move {
        Color::Light => white_score,
        Color::Dark => -white_score,
    };
    let ply = MATE_SCORE - score.abs();
    if (0..=i32::from(u8::MAX)).contains(&ply) {
        let moves = (ply + 1) / 2;
        format!("mate {}", if score > 0 { moves } else { -moves })
    } else {
        format!("cp {score}")
    }
}

/// UCI check-box value.
pub fn parse_check(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
