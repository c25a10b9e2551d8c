use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_rays::ray;

/// True when `square` holds a piece `color` may capture.
#[inline]
pub fn holds_enemy(board: &Board, color: Color, square: Square) -> bool {
    cell_color(board[square as usize]) == Some(color.opposite())
}

/// True when `color` may land on `square`: empty or enemy-occupied.
#[inline]
pub fn is_landing_square(board: &Board, color: Color, square: Square) -> bool {
    cell_color(board[square as usize]) != Some(color)
}

/// Walk each direction from `from`, stopping at the first occupied square
/// and including it only when it holds an enemy piece.
pub fn push_slider_moves(
    board: &Board,
    from: Square,
    side: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        for to in ray(from, direction) {
            let cell = board[to as usize];
            if cell == EMPTY {
                out.push(Move::new(from, to));
                continue;
            }
            if cell_color(cell) == Some(side.opposite()) {
                out.push(Move::new(from, to));
            }
            break;
        }
    }
}

/// Push a move for every target in `targets` that `side` may land on.
pub fn push_leaper_moves(
    board: &Board,
    from: Square,
    side: Color,
    targets: SquareMask,
    out: &mut Vec<Move>,
) {
    out.extend(
        squares_in(targets)
            .filter(|&to| is_landing_square(board, side, to))
            .map(|to| Move::new(from, to)),
    );
}
