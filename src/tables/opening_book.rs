//! Opening-book support with TSV import compatible with public opening datasets.
//!
//! A book row is a move sequence from the starting position. Every prefix of
//! every row is indexed by its position key (the first four FEN fields), so a
//! transposition into a known line is found no matter how it was reached.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::Rng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_parser::position_key;
use crate::utils::long_algebraic::{move_to_long_algebraic, parse_long_algebraic};

/// Small built-in repertoire used when no TSV is supplied.
const MINIMAL_BOOK_TSV: &str = "\
eco\tname\tmoves\tweight
C50\tItalian Game\te2e4 e7e5 g1f3 b8c6 f1c4 f8c5\t8
C60\tRuy Lopez\te2e4 e7e5 g1f3 b8c6 f1b5 a7a6\t8
B20\tSicilian Defence\te2e4 c7c5 g1f3 d7d6 d2d4 c5d4\t6
C00\tFrench Defence\te2e4 e7e6 d2d4 d7d5\t4
B10\tCaro-Kann Defence\te2e4 c7c6 d2d4 d7d5\t4
D06\tQueen's Gambit\td2d4 d7d5 c2c4 e7e6\t6
E60\tKing's Indian Defence\td2d4 g8f6 c2c4 g7g6 b1c3 f8g7\t4
A10\tEnglish Opening\tc2c4 e7e5 b1c3 g8f6\t3
A04\tReti Opening\tg1f3 d7d5 g2g3 g8f6\t2
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMove {
    /// Move text, resolved against the legal moves when picked.
    pub text: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    by_key: HashMap<String, Vec<BookMove>>,
}

impl OpeningBook {
    /// The embedded repertoire.
    pub fn minimal() -> Self {
        Self::from_tsv_str(MINIMAL_BOOK_TSV).unwrap_or_default()
    }

    pub fn from_tsv_path(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| format!("failed reading {}: {e}", path.display()))?;
        Self::from_tsv_str(&data)
    }

    /// Parse a TSV with a header row. The sequence column is `uci` or `moves`
    /// (space-separated move text); `weight`, `count` or `plays` is optional
    /// and defaults to 1.
    pub fn from_tsv_str(tsv: &str) -> Result<Self, String> {
        let mut lines = tsv.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().ok_or("opening TSV is empty")?;

        let mut sequence_idx = None;
        let mut weight_idx = None;
        for (i, name) in header.split('\t').enumerate() {
            match name.trim().to_ascii_lowercase().as_str() {
                "uci" | "moves" => sequence_idx = sequence_idx.or(Some(i)),
                "weight" | "count" | "plays" => weight_idx = Some(i),
                _ => {}
            }
        }
        let sequence_idx =
            sequence_idx.ok_or("opening TSV must contain either a 'uci' or 'moves' column")?;

        let mut by_key_and_move: HashMap<String, Vec<BookMove>> = HashMap::new();

        for line in lines {
            let fields: Vec<&str> = line.split('\t').collect();
            let sequence = fields
                .get(sequence_idx)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| format!("missing move sequence in opening row '{line}'"))?;

            let row_weight = weight_idx
                .and_then(|idx| fields.get(idx))
                .and_then(|w| w.trim().parse::<u32>().ok())
                .unwrap_or(1)
                .max(1);

            let mut state = GameState::new_game();
            for token in sequence.split_whitespace() {
                let key = position_key(&state.get_fen());
                let mv = state
                    .play_move_text(token)
                    .map_err(|e| format!("failed to play '{token}' in opening row '{line}': {e}"))?;
                let text = move_to_long_algebraic(mv);

                let row = by_key_and_move.entry(key).or_default();
                match row.iter_mut().find(|m| m.text == text) {
                    Some(existing) => existing.weight = existing.weight.saturating_add(row_weight),
                    None => row.push(BookMove {
                        text,
                        weight: row_weight,
                    }),
                }
            }
        }

        Ok(Self {
            by_key: by_key_and_move,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn moves_for(&self, game_state: &GameState) -> Option<&[BookMove]> {
        self.by_key
            .get(&position_key(&game_state.get_fen()))
            .map(|v| v.as_slice())
    }

    /// Heaviest book move that is legal here; the first listed wins ties.
    pub fn pick_heaviest(&self, game_state: &GameState) -> Option<Move> {
        let candidates = self.legal_candidates(game_state);
        let mut best: Option<(Move, u32)> = None;
        for (mv, weight) in candidates {
            match best {
                Some((_, w)) if weight <= w => {}
                _ => best = Some((mv, weight)),
            }
        }
        best.map(|(mv, _)| mv)
    }

    /// Weighted random choice among the legal book moves.
    pub fn pick_weighted<R: Rng + ?Sized>(&self, game_state: &GameState, rng: &mut R) -> Option<Move> {
        let candidates = self.legal_candidates(game_state);
        let total_weight: u64 = candidates.iter().map(|&(_, w)| u64::from(w)).sum();
        if total_weight == 0 {
            return None;
        }

        let mut pick = rng.random_range(0..total_weight);
        for &(mv, weight) in &candidates {
            let w = u64::from(weight);
            if pick < w {
                return Some(mv);
            }
            pick -= w;
        }

        candidates.first().map(|&(mv, _)| mv)
    }

    fn legal_candidates(&self, game_state: &GameState) -> Vec<(Move, u32)> {
        let Some(row) = self.moves_for(game_state) else {
            return Vec::new();
        };
        let legal = game_state.legal_moves();

        row.iter()
            .filter_map(|book_move| {
                let (from, to, promotion) = parse_long_algebraic(&book_move.text).ok()?;
                legal
                    .iter()
                    .find(|mv| mv.from == from && mv.to == to && mv.promotion_piece() == promotion)
                    .map(|&mv| (mv, book_move.weight))
            })
            .collect()
    }
}

/// Load a book from `path` when given, otherwise the embedded repertoire.
pub fn load_book(path: Option<&Path>) -> ChessResult<OpeningBook> {
    match path {
        Some(path) => OpeningBook::from_tsv_path(path).map_err(ChessError::InvalidBook),
        None => Ok(OpeningBook::minimal()),
    }
}
