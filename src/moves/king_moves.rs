use crate::game_state::chess_types::{Square, SquareMask};
use crate::moves::knight_moves::set_if_valid;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];

pub const KING_ATTACKS: [SquareMask; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> SquareMask {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [SquareMask; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < KING_OFFSETS.len() {
            let (df, dr) = KING_OFFSETS[i];
            attacks |= set_if_valid(file + df as i32, rank + dr as i32);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
