use crate::game_state::chess_types::{Color, Square, SquareMask};
use crate::moves::knight_moves::set_if_valid;

pub const LIGHT_PAWN_ATTACKS: [SquareMask; 64] = generate_pawn_attacks(1);
pub const DARK_PAWN_ATTACKS: [SquareMask; 64] = generate_pawn_attacks(-1);

/// Squares a pawn of `color` standing on `square` attacks.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> SquareMask {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

/// Squares from which a pawn of `color` would attack `square`.
///
/// This is the reverse direction of the capture, i.e. the attack set of an
/// opposite-colored pawn on `square`.
#[inline]
pub const fn pawn_attackers_of(color: Color, square: Square) -> SquareMask {
    pawn_attacks(color.opposite(), square)
}

const fn generate_pawn_attacks(forward: i32) -> [SquareMask; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        table[sq] = set_if_valid(file - 1, rank + forward) | set_if_valid(file + 1, rank + forward);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{pawn_attackers_of, pawn_attacks};
    use crate::game_state::chess_types::Color;

    #[test]
    fn pawn_attacks_point_forward() {
        // e2 (12) attacks d3 (19) and f3 (21) for Light.
        assert_eq!(pawn_attacks(Color::Light, 12), (1u64 << 19) | (1u64 << 21));
        // e7 (52) attacks d6 (43) and f6 (45) for Dark.
        assert_eq!(pawn_attacks(Color::Dark, 52), (1u64 << 43) | (1u64 << 45));
        // Edge file only has one target.
        assert_eq!(pawn_attacks(Color::Light, 8).count_ones(), 1);
    }

    #[test]
    fn attackers_are_behind_the_target() {
        // A light pawn attacking e4 (28) stands on d3 (19) or f3 (21).
        assert_eq!(pawn_attackers_of(Color::Light, 28), (1u64 << 19) | (1u64 << 21));
    }
}
