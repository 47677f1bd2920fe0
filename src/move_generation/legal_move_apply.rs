//! State transition.
//!
//! `apply_move` executes an already-vetted move in place and updates castling
//! rights, the en-passant marker, the reversible-move clock, the capture
//! buffer and promotion. It never flips `side_to_move`; `play_move` is the
//! apply-then-flip composition search and match play use.

use crate::game_state::chess_rules::{
    back_rank, pawn_direction, promotion_rank, KINGSIDE_ROOK_FILE, KING_START_FILE,
    QUEENSIDE_ROOK_FILE,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::king_moves::castle_side_for_vector;
use crate::moves::move_descriptions::ChessMove;

/// Execute `mv` on `game_state` without validation.
///
/// Moves that did not pass `legal` leave the board in an unspecified but
/// consistent shape; an empty source square or off-board vector is a no-op
/// apart from clearing the capture buffer.
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) {
    game_state.last_captures = [None; 2];

    let Some(moving) = game_state.piece_at(mv.from) else {
        return;
    };
    let Some(to) = mv.destination() else {
        return;
    };
    let mover = moving.color;

    update_castling_rights(game_state, moving, mv.from, to);

    if moving.kind == PieceKind::King {
        if let Some(side) = castle_side_for_vector(mv.vector) {
            perform_castle(game_state, mover, side);
            game_state.reversible_move_count = game_state.reversible_move_count.saturating_add(1);
            game_state.clear_en_passant();
            return;
        }
    }

    let en_passant_target = game_state.en_passant_target_for(mover);
    let captured = game_state.take_piece(to);

    if captured.is_some() || moving.kind == PieceKind::Pawn {
        game_state.reversible_move_count = 0;
    } else {
        game_state.reversible_move_count = game_state.reversible_move_count.saturating_add(1);
    }

    game_state.set_piece(mv.from, None);
    if let Some(victim) = captured {
        game_state.record_capture(victim);
    }

    if moving.kind == PieceKind::Pawn && mv.vector.dx != 0 && Some(to) == en_passant_target {
        // The double-advanced pawn sits directly behind the landing square.
        if let Some(behind) = to.offset(0, -pawn_direction(mover)) {
            if let Some(victim) = game_state.take_piece(behind) {
                game_state.record_capture(victim);
            }
        }
    }

    game_state.clear_en_passant();
    if moving.kind == PieceKind::Pawn && mv.vector.dy.abs() == 2 {
        game_state.en_passant_file[mover.index()] = Some(mv.from.file());
    }

    let landed = if moving.kind == PieceKind::Pawn && to.rank() == promotion_rank(mover) {
        Piece::new(mover, PieceKind::Queen)
    } else {
        moving
    };
    game_state.set_piece(to, Some(landed));
}

/// Copy `game_state`, apply `mv` to the copy and return it. The side to move is unchanged.
#[inline]
pub fn simulate_move(game_state: &GameState, mv: ChessMove) -> GameState {
    let mut next = game_state.clone();
    apply_move(&mut next, mv);
    next
}

/// Successor position with the turn handed to the other side.
#[inline]
pub fn play_move(game_state: &GameState, mv: ChessMove) -> GameState {
    let mut next = simulate_move(game_state, mv);
    next.flip_side_to_move();
    next
}

/// King and rook destinations for a castle: `(king_to, rook_from, rook_to)` files.
#[inline]
pub const fn castle_files(side: CastleSide) -> (u8, u8, u8) {
    match side {
        CastleSide::Kingside => (6, KINGSIDE_ROOK_FILE, 5),
        CastleSide::Queenside => (2, QUEENSIDE_ROOK_FILE, 3),
    }
}

fn perform_castle(game_state: &mut GameState, color: Color, side: CastleSide) {
    let rank = back_rank(color);
    let (king_to, rook_from, rook_to) = castle_files(side);

    game_state.set_piece(Square::at(KING_START_FILE, rank), None);
    game_state.set_piece(Square::at(rook_from, rank), None);
    game_state.set_piece(
        Square::at(king_to, rank),
        Some(Piece::new(color, PieceKind::King)),
    );
    game_state.set_piece(
        Square::at(rook_to, rank),
        Some(Piece::new(color, PieceKind::Rook)),
    );
}

fn update_castling_rights(game_state: &mut GameState, moving: Piece, from: Square, to: Square) {
    let color = moving.color;

    if moving.kind == PieceKind::King {
        game_state.castling_rights &= !(castling_flag(color, CastleSide::Kingside)
            | castling_flag(color, CastleSide::Queenside));
    }

    if moving.kind == PieceKind::Rook {
        if let Some(side) = rook_home_side(color, from) {
            game_state.castling_rights &= !castling_flag(color, side);
        }
    }

    // Capturing a rook on its original square also removes that right.
    let opponent = color.opposite();
    if game_state.piece_at(to) == Some(Piece::new(opponent, PieceKind::Rook)) {
        if let Some(side) = rook_home_side(opponent, to) {
            game_state.castling_rights &= !castling_flag(opponent, side);
        }
    }
}

fn rook_home_side(color: Color, square: Square) -> Option<CastleSide> {
    if square.rank() != back_rank(color) {
        return None;
    }
    match square.file() {
        KINGSIDE_ROOK_FILE => Some(CastleSide::Kingside),
        QUEENSIDE_ROOK_FILE => Some(CastleSide::Queenside),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_move, play_move, simulate_move};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::{ChessMove, MoveVector};
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn mv(text: &str) -> ChessMove {
        long_algebraic_to_move(text).expect("move text should parse")
    }

    #[test]
    fn double_advance_sets_marker_under_mover_slot() {
        let game = GameState::new_game();
        let next = simulate_move(&game, mv("e2e4"));
        assert_eq!(next.en_passant_file[Color::White.index()], Some(4));
        assert_eq!(next.en_passant_file[Color::Black.index()], None);
        assert_eq!(next.side_to_move, Color::White, "apply must not flip the turn");
        assert_eq!(next.reversible_move_count, 0);

        let after_reply = play_move(&next.with_side_flipped(), mv("g8f6"));
        assert_eq!(after_reply.en_passant_file, [None, None]);
        assert_eq!(after_reply.reversible_move_count, 1);
        assert_eq!(after_reply.side_to_move, Color::White);
    }

    #[test]
    fn en_passant_capture_removes_pawn_behind() {
        let game = GameState::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").expect("FEN should parse");
        let next = simulate_move(&game, mv("d5e6"));
        assert_eq!(next.piece_at(Square::at(4, 4)), None);
        assert_eq!(
            next.piece_at(Square::at(4, 5)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            next.last_captures().collect::<Vec<_>>(),
            vec![Piece::new(Color::Black, PieceKind::Pawn)]
        );
    }

    #[test]
    fn kingside_castle_relocates_king_and_rook() {
        let game =
            GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 3 1").expect("FEN should parse");
        let next = simulate_move(&game, ChessMove::new(Square::at(4, 0), MoveVector::new(2, 0)));
        assert_eq!(next.piece_at(Square::at(4, 0)), None);
        assert_eq!(next.piece_at(Square::at(7, 0)), None);
        assert_eq!(
            next.piece_at(Square::at(6, 0)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            next.piece_at(Square::at(5, 0)),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(next.castling_rights, 0);
        assert_eq!(next.reversible_move_count, 4);
        assert_eq!(next.last_captures().count(), 0);
    }

    #[test]
    fn rook_moves_and_rook_captures_forfeit_matching_rights() {
        let game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let next = simulate_move(&game, mv("a1a8"));
        assert_eq!(next.castling_rights, CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_KINGSIDE);
        assert_eq!(
            next.last_captures().collect::<Vec<_>>(),
            vec![Piece::new(Color::Black, PieceKind::Rook)]
        );
        assert_eq!(next.reversible_move_count, 0);
    }

    #[test]
    fn pawn_reaching_last_rank_becomes_queen() {
        let mut game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        apply_move(&mut game, mv("a7a8"));
        assert_eq!(
            game.piece_at(Square::at(0, 7)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }

    #[test]
    fn capture_buffer_is_overwritten_each_call() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/r7/R3K3 w - - 0 1").expect("FEN should parse");
        apply_move(&mut game, mv("a1a2"));
        assert_eq!(game.last_captures().count(), 1);
        game.flip_side_to_move();
        apply_move(&mut game, mv("e8d8"));
        assert_eq!(game.last_captures().count(), 0);
    }
}
