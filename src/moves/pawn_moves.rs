use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_descriptions::MoveVector;

/// Single and double forward pushes for a pawn of `color`.
#[inline]
pub const fn pawn_push_vectors(color: Color) -> [MoveVector; 2] {
    let dir = pawn_direction(color);
    [MoveVector::new(0, dir), MoveVector::new(0, 2 * dir)]
}

/// Diagonal capture vectors for a pawn of `color`.
#[inline]
pub const fn pawn_capture_vectors(color: Color) -> [MoveVector; 2] {
    let dir = pawn_direction(color);
    [MoveVector::new(-1, dir), MoveVector::new(1, dir)]
}

/// Squares a pawn of `color` standing on `square` attacks.
#[inline]
pub fn pawn_attack_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    pawn_capture_vectors(color)
        .into_iter()
        .filter_map(move |v| square.offset(v.dx, v.dy))
}

#[cfg(test)]
mod tests {
    use super::{pawn_attack_targets, pawn_push_vectors};
    use crate::game_state::chess_types::{Color, Square};
    use crate::moves::move_descriptions::MoveVector;

    #[test]
    fn black_pawns_push_down_the_board() {
        assert_eq!(
            pawn_push_vectors(Color::Black),
            [MoveVector::new(0, -1), MoveVector::new(0, -2)]
        );
    }

    #[test]
    fn edge_pawn_attacks_one_square() {
        let targets: Vec<Square> = pawn_attack_targets(Color::White, Square::at(0, 1)).collect();
        assert_eq!(targets, vec![Square::at(1, 2)]);
    }
}
