//! Move value type.
//!
//! A move is origin, destination and a tag for the special cases. The
//! captured piece is never stored; the mutator reads it off the board.

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveTag {
    /// Quiet move or ordinary capture.
    #[default]
    Standard,
    Promotion(PieceKind),
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub tag: MoveTag,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            tag: MoveTag::Standard,
        }
    }

    #[inline]
    pub const fn with_tag(from: Square, to: Square, tag: MoveTag) -> Self {
        Self { from, to, tag }
    }

    #[inline]
    pub const fn promotion_piece(&self) -> Option<PieceKind> {
        match self.tag {
            MoveTag::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self.tag, MoveTag::CastleKingside | MoveTag::CastleQueenside)
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.tag, MoveTag::EnPassant)
    }
}
