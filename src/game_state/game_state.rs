//! Game record: the position plus everything the FEN carries.
//!
//! `GameState` is the central model for the engine. Search works on value
//! copies of `board` and threads side to move, castling rights and the
//! en-passant target explicitly; only the top-level record uses the in-place
//! `make_move` / `unmake_move` pair and its undo stack.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_checks::{is_king_in_check, king_square};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::long_algebraic::long_algebraic_to_move;

/// Outcome of a position, derived from legal-move emptiness and check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [EMPTY; 64],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, Light to move, no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut game = Self::default();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            let file = file as u8;
            game.board[make_square(file, 0) as usize] = make_cell(Color::Light, kind);
            game.board[make_square(file, 1) as usize] = make_cell(Color::Light, PieceKind::Pawn);
            game.board[make_square(file, 6) as usize] = make_cell(Color::Dark, PieceKind::Pawn);
            game.board[make_square(file, 7) as usize] = make_cell(Color::Dark, kind);
        }
        game.castling_rights = CASTLE_ALL;
        game
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn is_starting_position(&self) -> bool {
        self.get_fen() == STARTING_POSITION_FEN
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(
            &self.board,
            self.side_to_move,
            self.castling_rights,
            self.en_passant_square,
        )
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_in_check(&self.board, self.side_to_move)
    }

    /// Play `mv` in place. The move is assumed legal; use
    /// `play_move_text` to resolve untrusted input first.
    pub fn make_move(&mut self, mv: Move) {
        let moving = self.board[mv.from as usize];
        let applied = apply_move(
            &mut self.board,
            mv,
            self.castling_rights,
            self.en_passant_square,
        );

        self.undo_stack.push(UndoState {
            mv,
            applied,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
        });

        if cell_kind(moving) == Some(PieceKind::Pawn) || applied.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if self.side_to_move == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.castling_rights = applied.castling_rights;
        self.en_passant_square = applied.en_passant_square;
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Take back the last `make_move`.
    pub fn unmake_move(&mut self) -> ChessResult<Move> {
        let undo = self.undo_stack.pop().ok_or(ChessError::EmptyMoveHistory)?;

        revert_move(&mut self.board, undo.mv, &undo.applied);
        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;
        self.side_to_move = self.side_to_move.opposite();

        Ok(undo.mv)
    }

    /// Value-copy counterpart of `make_move`. The copy starts with an empty
    /// undo stack.
    pub fn after_move(&self, mv: Move) -> GameState {
        let mut next = GameState {
            undo_stack: Vec::new(),
            ..self.clone()
        };
        next.make_move(mv);
        next.undo_stack.clear();
        next
    }

    /// Resolve move text such as `e2e4` or `e7e8q` against the legal moves
    /// and play it.
    pub fn play_move_text(&mut self, text: &str) -> ChessResult<Move> {
        let mv = long_algebraic_to_move(text, self)?;
        self.make_move(mv);
        Ok(mv)
    }

    pub fn status(&self) -> ChessResult<GameStatus> {
        for color in [Color::Light, Color::Dark] {
            if king_square(&self.board, color).is_none() {
                return Err(ChessError::MissingKing(color));
            }
        }

        if !self.legal_moves().is_empty() {
            return Ok(GameStatus::InProgress);
        }

        if self.in_check() {
            Ok(GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            })
        } else {
            Ok(GameStatus::Stalemate)
        }
    }
}
