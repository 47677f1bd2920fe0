//! Full move legality.
//!
//! Composes the shape and path tiers with turn ownership, capture rules,
//! castling, en passant and the self-check test. Every query works on a
//! borrowed state and leaves it untouched.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_castling::is_castling_legal;
use crate::move_generation::legal_move_checks::no_checks;
use crate::move_generation::legal_move_path::is_path_legal;
use crate::move_generation::legal_move_shape::is_shape_legal;
use crate::moves::king_moves::castle_side_for_vector;
use crate::moves::move_descriptions::ChessMove;

/// Is `mv` playable by the side to move in `game_state`?
pub fn legal(game_state: &GameState, mv: ChessMove) -> bool {
    if !is_pseudo_legal(game_state, mv) {
        return false;
    }

    if is_castling_attempt(game_state, mv) {
        // Castling already proved the king safe on every square it touches.
        return true;
    }

    no_checks(&simulate_move(game_state, mv))
}

/// Every rule except "the mover's own king is not left attacked".
pub fn is_pseudo_legal(game_state: &GameState, mv: ChessMove) -> bool {
    let Some(to) = mv.destination() else {
        return false;
    };
    let Some(piece) = game_state.piece_at(mv.from) else {
        return false;
    };
    if piece.color != game_state.side_to_move {
        return false;
    }

    if piece.kind == PieceKind::King {
        if let Some(side) = castle_side_for_vector(mv.vector) {
            return is_castling_legal(game_state, mv.from, side);
        }
    }

    if !is_shape_legal(piece, mv.from, mv.vector) {
        return false;
    }
    if piece.kind.is_slider() && !is_path_legal(game_state, mv) {
        return false;
    }

    let victim = game_state.piece_at(to);
    if let Some(victim) = victim {
        if victim.color == piece.color || victim.kind == PieceKind::King {
            return false;
        }
    }

    if piece.kind == PieceKind::Pawn {
        let is_push = mv.vector.dx == 0;
        if is_push && victim.is_some() {
            return false;
        }
        if !is_push
            && victim.is_none()
            && game_state.en_passant_target_for(piece.color) != Some(to)
        {
            return false;
        }
    }

    true
}

#[inline]
fn is_castling_attempt(game_state: &GameState, mv: ChessMove) -> bool {
    matches!(
        game_state.piece_at(mv.from),
        Some(Piece { kind: PieceKind::King, .. })
    ) && castle_side_for_vector(mv.vector).is_some()
}
