use crate::game_state::chess_types::{CastleSide, Square};
use crate::moves::move_descriptions::MoveVector;

pub const KING_OFFSETS: [MoveVector; 8] = [
    MoveVector::new(0, 1),
    MoveVector::new(1, 1),
    MoveVector::new(1, 0),
    MoveVector::new(1, -1),
    MoveVector::new(0, -1),
    MoveVector::new(-1, -1),
    MoveVector::new(-1, 0),
    MoveVector::new(-1, 1),
];

pub const CASTLE_KINGSIDE_VECTOR: MoveVector = MoveVector::new(2, 0);
pub const CASTLE_QUEENSIDE_VECTOR: MoveVector = MoveVector::new(-2, 0);

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |v| square.offset(v.dx, v.dy))
}

/// Castling wing for a two-square horizontal king vector.
#[inline]
pub const fn castle_side_for_vector(vector: MoveVector) -> Option<CastleSide> {
    match (vector.dx, vector.dy) {
        (2, 0) => Some(CastleSide::Kingside),
        (-2, 0) => Some(CastleSide::Queenside),
        _ => None,
    }
}
