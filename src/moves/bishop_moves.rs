use crate::moves::move_descriptions::MoveVector;

pub const BISHOP_DIRECTIONS: [MoveVector; 4] = [
    MoveVector::new(1, 1),
    MoveVector::new(1, -1),
    MoveVector::new(-1, 1),
    MoveVector::new(-1, -1),
];
