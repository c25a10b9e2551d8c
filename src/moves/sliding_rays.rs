use crate::game_state::chess_types::{offset_square, Square};

/// File/rank steps of the four straight rays.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// File/rank steps of the four diagonal rays.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk outward from `origin` (exclusive) in one direction until the edge.
///
/// Callers stop at the first occupied square themselves; the ray does not
/// look at the board.
#[derive(Debug, Clone)]
pub struct Ray {
    current: Square,
    d_file: i8,
    d_rank: i8,
    done: bool,
}

#[inline]
pub fn ray(origin: Square, direction: (i8, i8)) -> Ray {
    Ray {
        current: origin,
        d_file: direction.0,
        d_rank: direction.1,
        done: false,
    }
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.done {
            return None;
        }
        match offset_square(self.current, self.d_file, self.d_rank) {
            Some(next) => {
                self.current = next;
                Some(next)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

#[inline]
pub const fn is_straight(direction: (i8, i8)) -> bool {
    direction.0 == 0 || direction.1 == 0
}
