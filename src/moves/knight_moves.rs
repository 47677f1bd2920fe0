use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::MoveVector;

pub const KNIGHT_OFFSETS: [MoveVector; 8] = [
    MoveVector::new(2, 1),
    MoveVector::new(1, 2),
    MoveVector::new(-1, 2),
    MoveVector::new(-2, 1),
    MoveVector::new(-2, -1),
    MoveVector::new(-1, -2),
    MoveVector::new(1, -2),
    MoveVector::new(2, -1),
];

#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |v| square.offset(v.dx, v.dy))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_targets_from_d4_has_eight_targets() {
        assert_eq!(knight_targets(Square::at(3, 3)).count(), 8);
    }

    #[test]
    fn knight_targets_from_corner_has_two_targets() {
        assert_eq!(knight_targets(Square::at(0, 0)).count(), 2);
    }
}
