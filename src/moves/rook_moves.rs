use crate::moves::move_descriptions::MoveVector;

pub const ROOK_DIRECTIONS: [MoveVector; 4] = [
    MoveVector::new(0, 1),
    MoveVector::new(1, 0),
    MoveVector::new(0, -1),
    MoveVector::new(-1, 0),
];
