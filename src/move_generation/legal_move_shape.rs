//! Geometric legality: does a displacement fit a piece's movement pattern,
//! ignoring everything else on the board. Castling vectors are not shapes.

use crate::game_state::chess_rules::{pawn_direction, pawn_home_rank};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveVector;

/// `from` is only consulted for the pawn double-advance home-rank rule.
pub fn is_shape_legal(piece: Piece, from: Square, vector: MoveVector) -> bool {
    if vector.is_zero() {
        return false;
    }

    let MoveVector { dx, dy } = vector;
    match piece.kind {
        PieceKind::King => vector.chebyshev_length() <= 1,
        PieceKind::Rook => vector.is_orthogonal(),
        PieceKind::Bishop => vector.is_diagonal(),
        PieceKind::Queen => vector.is_orthogonal() || vector.is_diagonal(),
        PieceKind::Knight => (i16::from(dx) * i16::from(dy)).abs() == 2,
        PieceKind::Pawn => {
            let dir = pawn_direction(piece.color);
            let single_push = dx == 0 && dy == dir;
            let double_push =
                dx == 0 && dy == 2 * dir && from.rank() == pawn_home_rank(piece.color);
            let diagonal = dy == dir && dx.abs() == 1;
            single_push || double_push || diagonal
        }
    }
}
