use crate::game_state::chess_types::{Square, SquareMask};

/// File/rank deltas of the eight knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KNIGHT_ATTACKS: [SquareMask; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> SquareMask {
    KNIGHT_ATTACKS[square as usize]
}

const fn generate_knight_attacks() -> [SquareMask; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < KNIGHT_OFFSETS.len() {
            let (df, dr) = KNIGHT_OFFSETS[i];
            attacks |= set_if_valid(file + df as i32, rank + dr as i32);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

pub(crate) const fn set_if_valid(file: i32, rank: i32) -> SquareMask {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}
