//! Attack detection.
//!
//! `no_checks` is the primitive that castling legality, self-check filtering
//! and terminal-state detection all reduce to.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{first_occupied_on_ray, sliding_directions};
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_targets;

/// True when the side to move's king is not attacked.
///
/// A side without a king is never in check.
#[inline]
pub fn no_checks(game_state: &GameState) -> bool {
    !is_king_in_check(game_state, game_state.side_to_move)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Walks every `attacker_color` piece and reports whether any of them hits `target`.
pub fn is_square_attacked(game_state: &GameState, target: Square, attacker_color: Color) -> bool {
    game_state
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_attacks(game_state, from, piece, target))
}

fn piece_attacks(game_state: &GameState, from: Square, piece: Piece, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attack_targets(piece.color, from).any(|sq| sq == target),
        PieceKind::Knight => knight_targets(from).any(|sq| sq == target),
        PieceKind::King => king_targets(from).any(|sq| sq == target),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => sliding_directions(piece.kind)
            .iter()
            .any(|direction| first_occupied_on_ray(game_state, from, *direction) == Some(target)),
    }
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked, no_checks};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_has_no_checks() {
        let game = GameState::new_game();
        assert!(no_checks(&game));
        assert!(no_checks(&game.with_side_flipped()));
    }

    #[test]
    fn blocked_queen_does_not_give_check() {
        let open = GameState::from_fen("4k3/8/8/8/8/8/8/q3K3 w - - 0 1").expect("FEN should parse");
        let blocked =
            GameState::from_fen("4k3/8/8/8/8/8/8/q1N1K3 w - - 0 1").expect("FEN should parse");
        assert!(!no_checks(&open));
        assert!(no_checks(&blocked));
    }

    #[test]
    fn pawn_and_knight_attacks_follow_their_tables() {
        let game = GameState::from_fen("4k3/8/8/8/8/3p4/8/4K1n1 w - - 0 1").expect("FEN should parse");
        // d3 pawn hits e2 and c2, g1 knight hits e2, f3 and h3.
        assert!(is_square_attacked(&game, Square::at(4, 1), Color::Black));
        assert!(is_square_attacked(&game, Square::at(2, 1), Color::Black));
        assert!(!is_square_attacked(&game, Square::at(3, 1), Color::Black));
        assert!(!is_king_in_check(&game, Color::White));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/q7 w - - 0 1").expect("FEN should parse");
        assert!(no_checks(&game));
    }
}
