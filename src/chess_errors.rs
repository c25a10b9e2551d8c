//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by position import, move
//! text decoding and the game-record helpers. Search never returns an error
//! for a reachable position; it reports checkmate and stalemate through its
//! score instead.
//!
//! Usage guidelines:
//! - Parsing failures (`MalformedFen`, `InvalidMoveText`, `InvalidSquare`)
//!   are recoverable and suitable for showing to a user. They are raised
//!   before any state is touched.
//! - `UnmatchedMoveText` means the text was well formed but names no legal
//!   move in the current position.
//! - `MissingKing` is an invariant violation. A legally reached position
//!   always has both kings, so callers should treat it as a bug.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Why a FEN string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("missing {0} field")]
    MissingField(&'static str),

    #[error("unexpected trailing fields")]
    ExtraFields,

    #[error("piece placement must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("more than one {0:?} king")]
    TooManyKings(Color),

    #[error("invalid active color '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling field '{0}'")]
    InvalidCastling(String),

    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),

    /// The target must sit on rank 6 when Light moves and rank 3 when Dark
    /// moves, i.e. behind a pawn the opponent just double-pushed.
    #[error("en-passant square '{square}' is inconsistent with {side:?} to move")]
    EnPassantColorMismatch { square: String, side: Color },

    #[error("invalid {field} '{value}'")]
    InvalidClock { field: &'static str, value: String },
}

/// Unified error type for the chess engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("malformed FEN: {0}")]
    MalformedFen(#[from] FenError),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    /// Move text that is not `<from><to>[promotion]`.
    #[error("invalid move text '{0}'")]
    InvalidMoveText(String),

    /// Well-formed move text that matches no legal move.
    #[error("move '{0}' is not legal in this position")]
    UnmatchedMoveText(String),

    #[error("no {0:?} king on the board")]
    MissingKing(Color),

    #[error("no move to take back")]
    EmptyMoveHistory,

    #[error("opening book: {0}")]
    InvalidBook(String),

    /// A protocol command whose arguments do not fit its grammar.
    #[error("malformed command '{0}'")]
    InvalidCommand(String),

    #[error("invalid value '{value}' for option {name}")]
    InvalidOption { name: String, value: String },
}

pub type ChessResult<T> = Result<T, ChessError>;
