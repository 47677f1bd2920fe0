use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::move_descriptions::MoveVector;

/// Queens slide along every king direction.
pub const QUEEN_DIRECTIONS: [MoveVector; 8] = KING_OFFSETS;
