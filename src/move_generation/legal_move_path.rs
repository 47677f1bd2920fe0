//! Sliding-path legality: intermediate squares must be empty and the
//! destination must be empty or hold an opposing piece.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

pub fn is_path_legal(game_state: &GameState, mv: ChessMove) -> bool {
    let vector = mv.vector;
    if vector.is_zero() || !(vector.is_orthogonal() || vector.is_diagonal()) {
        return false;
    }
    let Some(to) = mv.destination() else {
        return false;
    };

    let step = vector.unit_step();
    let mut current = mv.from;
    for _ in 1..vector.chebyshev_length() {
        current = match current.offset(step.dx, step.dy) {
            Some(sq) => sq,
            None => return false,
        };
        if !game_state.is_empty(current) {
            return false;
        }
    }

    is_capturable_or_empty(game_state, mv.from, to)
}

/// Destination holds nothing, or a piece of the other color than the mover on `from`.
#[inline]
pub fn is_capturable_or_empty(game_state: &GameState, from: Square, to: Square) -> bool {
    match (game_state.piece_at(from), game_state.piece_at(to)) {
        (_, None) => true,
        (Some(mover), Some(victim)) => mover.color != victim.color,
        (None, Some(_)) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_path_legal;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::{ChessMove, MoveVector};

    #[test]
    fn blocked_and_open_paths() {
        let game =
            GameState::from_fen("4k3/8/8/8/3p4/8/1P6/R3K3 w - - 0 1").expect("FEN should parse");
        let a1 = Square::at(0, 0);
        // a1-a8 is open, a1-e1 runs into the own king, a1-c3 is blocked by b2.
        assert!(is_path_legal(&game, ChessMove::new(a1, MoveVector::new(0, 7))));
        assert!(!is_path_legal(&game, ChessMove::new(a1, MoveVector::new(4, 0))));
        assert!(is_path_legal(&game, ChessMove::new(a1, MoveVector::new(3, 0))));
        assert!(!is_path_legal(&game, ChessMove::new(a1, MoveVector::new(2, 2))));
    }

    #[test]
    fn destination_may_hold_an_enemy_piece() {
        let game =
            GameState::from_fen("4k3/8/8/8/3p4/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let d1 = Square::at(3, 0);
        assert!(is_path_legal(&game, ChessMove::new(d1, MoveVector::new(0, 3))));
        assert!(!is_path_legal(&game, ChessMove::new(d1, MoveVector::new(0, 4))));
    }

    #[test]
    fn non_line_vectors_are_rejected() {
        let game = GameState::new_game();
        assert!(!is_path_legal(
            &game,
            ChessMove::new(Square::at(1, 0), MoveVector::new(1, 2))
        ));
    }
}
