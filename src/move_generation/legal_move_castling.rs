//! Castling legality, handled apart from ordinary king movement.

use crate::game_state::chess_rules::{back_rank, KING_START_FILE};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, castle_files};
use crate::move_generation::legal_move_checks::no_checks;
use crate::moves::move_descriptions::{ChessMove, MoveVector};

/// Whether the side to move may castle toward `side` from `from`.
///
/// Requires the right flag, the rook on its square, empty squares between king
/// and rook, and no attack on the king's start, transit or destination square.
/// Transit safety is probed on a copy with the rook lifted off and the king
/// walked one square at a time.
pub fn is_castling_legal(game_state: &GameState, from: Square, side: CastleSide) -> bool {
    let color = game_state.side_to_move;
    let rank = back_rank(color);

    if from != Square::at(KING_START_FILE, rank) {
        return false;
    }
    if game_state.piece_at(from) != Some(Piece::new(color, PieceKind::King)) {
        return false;
    }
    if !game_state.can_castle(color, side) {
        return false;
    }

    let (_, rook_file, _) = castle_files(side);
    let rook_square = Square::at(rook_file, rank);
    if game_state.piece_at(rook_square) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }

    let (low, high) = if rook_file > KING_START_FILE {
        (KING_START_FILE + 1, rook_file)
    } else {
        (rook_file + 1, KING_START_FILE)
    };
    if (low..high).any(|file| !game_state.is_empty(Square::at(file, rank))) {
        return false;
    }

    if !no_checks(game_state) {
        return false;
    }

    let step = if rook_file > KING_START_FILE { 1 } else { -1 };
    let mut probe = game_state.clone();
    probe.set_piece(rook_square, None);

    let mut king_at = from;
    for _ in 0..2 {
        apply_move(&mut probe, ChessMove::new(king_at, MoveVector::new(step, 0)));
        if !no_checks(&probe) {
            return false;
        }
        king_at = match king_at.offset(step, 0) {
            Some(sq) => sq,
            None => return false,
        };
    }

    true
}
