//! Canonical chess-rule constants.
//!
//! Starting position, king/rook home squares, and the castling geometry the
//! generator and the mutator share.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const LIGHT_KING_HOME: Square = 4;
pub const DARK_KING_HOME: Square = 60;

pub const A1: Square = 0;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const H8: Square = 63;

/// Which wing a castle goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Static description of one castle: right bit, king and rook squares, and
/// the squares that must be empty / unattacked.
#[derive(Debug, Clone, Copy)]
pub struct CastleGeometry {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    pub must_be_empty: &'static [Square],
    /// Start, transit and destination squares of the king.
    pub must_be_safe: [Square; 3],
}

const LIGHT_KINGSIDE: CastleGeometry = CastleGeometry {
    right: CASTLE_LIGHT_KINGSIDE,
    king_from: 4,
    king_to: 6,
    rook_from: H1,
    rook_to: 5,
    must_be_empty: &[5, 6],
    must_be_safe: [4, 5, 6],
};

const LIGHT_QUEENSIDE: CastleGeometry = CastleGeometry {
    right: CASTLE_LIGHT_QUEENSIDE,
    king_from: 4,
    king_to: 2,
    rook_from: A1,
    rook_to: 3,
    must_be_empty: &[1, 2, 3],
    must_be_safe: [4, 3, 2],
};

const DARK_KINGSIDE: CastleGeometry = CastleGeometry {
    right: CASTLE_DARK_KINGSIDE,
    king_from: 60,
    king_to: 62,
    rook_from: H8,
    rook_to: 61,
    must_be_empty: &[61, 62],
    must_be_safe: [60, 61, 62],
};

const DARK_QUEENSIDE: CastleGeometry = CastleGeometry {
    right: CASTLE_DARK_QUEENSIDE,
    king_from: 60,
    king_to: 58,
    rook_from: A8,
    rook_to: 59,
    must_be_empty: &[57, 58, 59],
    must_be_safe: [60, 59, 58],
};

#[inline]
pub const fn castle_geometry(color: Color, side: CastleSide) -> &'static CastleGeometry {
    match (color, side) {
        (Color::Light, CastleSide::Kingside) => &LIGHT_KINGSIDE,
        (Color::Light, CastleSide::Queenside) => &LIGHT_QUEENSIDE,
        (Color::Dark, CastleSide::Kingside) => &DARK_KINGSIDE,
        (Color::Dark, CastleSide::Queenside) => &DARK_QUEENSIDE,
    }
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::Light => LIGHT_KING_HOME,
        Color::Dark => DARK_KING_HOME,
    }
}

/// Both rights of one color.
#[inline]
pub const fn color_castling_rights(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
        Color::Dark => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
    }
}

/// The right tied to a rook home square, if any.
#[inline]
pub const fn rook_home_right(square: Square) -> Option<CastlingRights> {
    match square {
        A1 => Some(CASTLE_LIGHT_QUEENSIDE),
        H1 => Some(CASTLE_LIGHT_KINGSIDE),
        A8 => Some(CASTLE_DARK_QUEENSIDE),
        H8 => Some(CASTLE_DARK_KINGSIDE),
        _ => None,
    }
}
