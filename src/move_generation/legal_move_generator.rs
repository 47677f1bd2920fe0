//! Full legal move generation.
//!
//! Enumerates candidate vectors piece kind by piece kind (pawns, knights,
//! bishops, rooks, queens, kings) and keeps those that pass `legal`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_rules::legal;
use crate::move_generation::legal_move_shared::{ray, sliding_directions};
use crate::moves::king_moves::{CASTLE_KINGSIDE_VECTOR, CASTLE_QUEENSIDE_VECTOR, KING_OFFSETS};
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::move_descriptions::{ChessMove, MoveVector};
use crate::moves::pawn_moves::{pawn_capture_vectors, pawn_push_vectors};

/// Every legal `(source, vector)` pair for the side to move.
pub fn legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut out = Vec::<ChessMove>::with_capacity(48);
    let side = game_state.side_to_move;

    for kind in PieceKind::ALL {
        for from in game_state.squares_of(side, kind) {
            push_candidates(game_state, from, kind, &mut out);
        }
    }

    out
}

fn push_candidates(game_state: &GameState, from: Square, kind: PieceKind, out: &mut Vec<ChessMove>) {
    let mut try_vector = |vector: MoveVector, out: &mut Vec<ChessMove>| {
        let mv = ChessMove::new(from, vector);
        if legal(game_state, mv) {
            out.push(mv);
        }
    };

    match kind {
        PieceKind::Pawn => {
            let color = game_state.side_to_move;
            for vector in pawn_push_vectors(color)
                .into_iter()
                .chain(pawn_capture_vectors(color))
            {
                try_vector(vector, out);
            }
        }
        PieceKind::Knight => {
            for vector in KNIGHT_OFFSETS {
                try_vector(vector, out);
            }
        }
        PieceKind::King => {
            for vector in KING_OFFSETS {
                try_vector(vector, out);
            }
            try_vector(CASTLE_KINGSIDE_VECTOR, out);
            try_vector(CASTLE_QUEENSIDE_VECTOR, out);
        }
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            for direction in sliding_directions(kind) {
                for (distance, sq) in (1i8..).zip(ray(from, *direction)) {
                    try_vector(direction.scaled(distance), out);
                    if !game_state.is_empty(sq) {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::legal_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::play_move;
    use crate::moves::king_moves::castle_side_for_vector;

    #[test]
    fn start_position_has_twenty_moves() {
        let game = GameState::new_game();
        assert_eq!(legal_moves(&game).len(), 20);
        assert_eq!(legal_moves(&game.with_side_flipped()).len(), 20);
    }

    #[test]
    fn castling_vectors_are_generated() {
        let game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castles = legal_moves(&game)
            .into_iter()
            .filter(|mv| castle_side_for_vector(mv.vector).is_some())
            .count();
        assert_eq!(castles, 2);
        // 5 king steps + 2 castles + 10 + 9 rook moves (a1 rook can capture a8, h1 rook h8).
        assert_eq!(legal_moves(&game).len(), 26);
    }

    #[test]
    fn every_generated_move_keeps_one_king_per_side() {
        let mut game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");

        for _ in 0..2 {
            for mv in legal_moves(&game) {
                let next = play_move(&game, mv);
                for color in [Color::White, Color::Black] {
                    assert_eq!(next.squares_of(color, PieceKind::King).count(), 1);
                }
            }
            let first = legal_moves(&game)[0];
            game = play_move(&game, first);
        }
    }

    #[test]
    fn no_moves_when_checkmated() {
        let game = GameState::from_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(legal_moves(&game).is_empty());
    }
}
