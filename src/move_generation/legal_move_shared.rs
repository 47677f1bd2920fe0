use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::MoveVector;
use crate::moves::pawn_moves::pawn_attack_targets;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Ray directions for sliding kinds; empty for step movers.
#[inline]
pub fn sliding_directions(kind: PieceKind) -> &'static [MoveVector] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

/// Squares from `from` outward along `direction` up to the board edge.
#[inline]
pub fn ray(from: Square, direction: MoveVector) -> impl Iterator<Item = Square> {
    (1..8i8).map_while(move |k| from.offset(direction.dx * k, direction.dy * k))
}

/// First occupied square along a ray, if any.
#[inline]
pub fn first_occupied_on_ray(
    game_state: &GameState,
    from: Square,
    direction: MoveVector,
) -> Option<Square> {
    ray(from, direction).find(|sq| !game_state.is_empty(*sq))
}

/// Every square the piece on `from` attacks: rays stop at (and include) the
/// first occupied square.
pub fn attacked_squares(game_state: &GameState, from: Square, piece: Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_attack_targets(piece.color, from).collect(),
        PieceKind::Knight => knight_targets(from).collect(),
        PieceKind::King => king_targets(from).collect(),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            let mut out = Vec::with_capacity(14);
            for direction in sliding_directions(piece.kind) {
                for sq in ray(from, *direction) {
                    out.push(sq);
                    if !game_state.is_empty(sq) {
                        break;
                    }
                }
            }
            out
        }
    }
}
