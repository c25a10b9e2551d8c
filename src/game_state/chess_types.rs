/// Core value types for the mailbox engine.
///
/// A board is 64 signed cells: `0` is empty, the magnitude `1..=6` is the
/// piece kind (pawn..king) and the sign is the color (positive for Light,
/// negative for Dark). Squares are indexed `rank * 8 + file`, so `a1 == 0`,
/// `h1 == 7` and `h8 == 63`.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move. Light moves first (White), Dark second (Black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// `+1` for Light, `-1` for Dark. Multiplying a piece kind code by the
    /// sign yields the board cell for that colored piece.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Rank delta of a forward pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        self.sign()
    }

    /// Rank (0-based) the color's pawns start on.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Rank (0-based) the color's pawns promote on.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Back rank (0-based) holding the color's king and rooks.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

/// Piece kind (color lives in the sign of the board cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Unsigned cell code, `1..=6`.
    #[inline]
    pub const fn code(self) -> i8 {
        self.index() as i8 + 1
    }

    #[inline]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Promotion targets in the order the generator emits them.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// One board cell. See the module docs for the encoding.
pub type Cell = i8;

pub const EMPTY: Cell = 0;

/// The 64-cell mailbox board.
pub type Board = [Cell; 64];

/// Board square index (`0..=63`).
pub type Square = u8;

/// Compact castling rights bitmask, one bit per side and wing.
pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0b1111;
pub type CastlingRights = u8;

#[inline]
pub const fn make_cell(color: Color, piece: PieceKind) -> Cell {
    color.sign() * piece.code()
}

#[inline]
pub const fn cell_color(cell: Cell) -> Option<Color> {
    if cell > 0 {
        Some(Color::Light)
    } else if cell < 0 {
        Some(Color::Dark)
    } else {
        None
    }
}

#[inline]
pub const fn cell_kind(cell: Cell) -> Option<PieceKind> {
    PieceKind::from_code(cell.abs())
}

#[inline]
pub const fn cell_piece(cell: Cell) -> Option<(Color, PieceKind)> {
    match (cell_color(cell), cell_kind(cell)) {
        (Some(color), Some(kind)) => Some((color, kind)),
        _ => None,
    }
}

#[inline]
pub const fn square_file(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_rank(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn make_square(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// One bit per square; used for the precomputed leaper target tables.
pub type SquareMask = u64;

/// Iterate the squares set in `mask`, lowest index first.
#[inline]
pub fn squares_in(mut mask: SquareMask) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let square = mask.trailing_zeros() as Square;
        mask &= mask - 1;
        Some(square)
    })
}

/// Step from `square` by a file/rank delta, `None` when it leaves the board.
#[inline]
pub fn offset_square(square: Square, d_file: i8, d_rank: i8) -> Option<Square> {
    let file = square_file(square) as i8 + d_file;
    let rank = square_rank(square) as i8 + d_rank;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(make_square(file as u8, rank as u8))
    } else {
        None
    }
}
