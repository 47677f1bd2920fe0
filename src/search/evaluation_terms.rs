//! Raw one-sided evaluation terms.
//!
//! Every term is measured for the side to move of the state handed in.
//! Weighting happens in `board_scoring`; keeping the counts separate lets a
//! tuning loop inspect exactly what the scorer saw.

use std::collections::BTreeMap;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::is_in_check;
use crate::move_generation::legal_move_castling::is_castling_legal;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::legal_move_shared::{attacked_squares, ray};
use crate::moves::king_moves::{castle_side_for_vector, KING_OFFSETS};
use crate::moves::move_descriptions::ChessMove;

/// Opponent's situation as seen from the scoring side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    None,
    Check,
    Checkmate,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvaluationFeatures {
    /// Own pieces per `PieceKind::index`.
    pub piece_counts: [u32; 6],
    /// Sum over non-pawn, non-king pieces of `sqrt(legal destinations)`.
    pub mobility: f64,
    /// Own knights, bishops and rooks standing on a square another own piece attacks.
    pub minor_major_defenses: u32,
    pub queen_defenses: u32,
    pub king_defenders: u32,
    /// Legal king steps, castling excluded.
    pub king_mobility: u32,
    /// Empty squares along the king's eight rays, counted only when nothing defends the king.
    pub king_exposure: u32,
    pub castling: u32,
    pub opponent: CheckState,
    pub reversible_move_count: u16,
}

/// Measure every term for `game_state.side_to_move`.
pub fn collect_features(game_state: &GameState) -> EvaluationFeatures {
    let side = game_state.side_to_move;
    let moves = legal_moves(game_state);

    let mut features = EvaluationFeatures {
        reversible_move_count: game_state.reversible_move_count,
        ..EvaluationFeatures::default()
    };

    for (_, piece) in game_state.pieces_of(side) {
        features.piece_counts[piece.kind.index()] += 1;
    }

    features.mobility = dampened_mobility(game_state, &moves);
    features.king_mobility = moves
        .iter()
        .filter(|mv| is_king_step(game_state, **mv))
        .count() as u32;

    count_defenses(game_state, &mut features);
    if features.king_defenders == 0 {
        features.king_exposure = king_exposure(game_state, side);
    }

    features.castling = castling_term(game_state, side);
    features.opponent = opponent_check_state(game_state);

    features
}

fn dampened_mobility(game_state: &GameState, moves: &[ChessMove]) -> f64 {
    let mut per_piece = BTreeMap::<Square, u32>::new();
    for mv in moves {
        match game_state.piece_at(mv.from) {
            Some(Piece {
                kind: PieceKind::Pawn | PieceKind::King,
                ..
            })
            | None => {}
            Some(_) => *per_piece.entry(mv.from).or_default() += 1,
        }
    }
    per_piece.values().map(|count| f64::from(*count).sqrt()).sum()
}

#[inline]
fn is_king_step(game_state: &GameState, mv: ChessMove) -> bool {
    matches!(
        game_state.piece_at(mv.from),
        Some(Piece {
            kind: PieceKind::King,
            ..
        })
    ) && castle_side_for_vector(mv.vector).is_none()
}

fn count_defenses(game_state: &GameState, features: &mut EvaluationFeatures) {
    let side = game_state.side_to_move;
    for (from, piece) in game_state.pieces_of(side) {
        for target in attacked_squares(game_state, from, piece) {
            let Some(defended) = game_state.piece_at(target) else {
                continue;
            };
            if defended.color != side {
                continue;
            }
            match defended.kind {
                PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => {
                    features.minor_major_defenses += 1
                }
                PieceKind::Queen => features.queen_defenses += 1,
                PieceKind::King => features.king_defenders += 1,
                PieceKind::Pawn => {}
            }
        }
    }
}

fn king_exposure(game_state: &GameState, color: Color) -> u32 {
    game_state
        .squares_of(color, PieceKind::King)
        .map(|king| {
            KING_OFFSETS
                .iter()
                .map(|direction| {
                    ray(king, *direction)
                        .take_while(|sq| game_state.is_empty(*sq))
                        .count() as u32
                })
                .sum::<u32>()
        })
        .sum()
}

fn castling_term(game_state: &GameState, color: Color) -> u32 {
    let sides = [CastleSide::Kingside, CastleSide::Queenside];
    let keeps_right = sides.iter().any(|side| game_state.can_castle(color, *side));
    if !keeps_right {
        return 0;
    }

    let can_castle_now = game_state.king_square(color).is_some_and(|king| {
        sides
            .iter()
            .any(|side| is_castling_legal(game_state, king, *side))
    });
    1 + u32::from(can_castle_now)
}

fn opponent_check_state(game_state: &GameState) -> CheckState {
    let opponent_view = game_state.with_side_flipped();
    if !is_in_check(&opponent_view) {
        return CheckState::None;
    }
    if legal_moves(&opponent_view).is_empty() {
        CheckState::Checkmate
    } else {
        CheckState::Check
    }
}

#[cfg(test)]
mod tests {
    use super::{collect_features, CheckState};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_terms() {
        let features = collect_features(&GameState::new_game());
        assert_eq!(features.piece_counts, [8, 2, 2, 2, 1, 1]);
        // Only the knights move: two destinations each.
        assert!((features.mobility - 2.0 * 2f64.sqrt()).abs() < 1e-9);
        assert_eq!(features.king_mobility, 0);
        // a1-b1, h1-g1, d1-c1 and e1-f1.
        assert_eq!(features.minor_major_defenses, 4);
        assert_eq!(features.queen_defenses, 1);
        assert_eq!(features.king_defenders, 1);
        assert_eq!(features.king_exposure, 0);
        assert_eq!(features.castling, 1);
        assert_eq!(features.opponent, CheckState::None);
    }

    #[test]
    fn lone_king_is_exposed_along_open_rays() {
        let game = GameState::from_fen("7k/8/8/8/8/8/8/K7 w - - 5 1").expect("FEN should parse");
        let features = collect_features(&game);
        assert_eq!(features.king_defenders, 0);
        // From a1: the a-file, the first rank, and the long diagonal short of h8.
        assert_eq!(features.king_exposure, 7 + 7 + 6);
        assert_eq!(features.king_mobility, 3);
        assert_eq!(features.reversible_move_count, 5);
    }

    #[test]
    fn opponent_check_and_checkmate_are_detected() {
        let check = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN should parse");
        let rook_up = GameState::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").expect("FEN should parse");
        assert_eq!(collect_features(&check).opponent, CheckState::None);
        assert_eq!(collect_features(&rook_up).opponent, CheckState::Check);

        let mate = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 w - - 0 1").expect("FEN should parse");
        assert_eq!(collect_features(&mate).opponent, CheckState::Checkmate);
    }

    #[test]
    fn castling_term_counts_right_and_availability() {
        let open = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert_eq!(collect_features(&open).castling, 2);

        let no_rights = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert_eq!(collect_features(&no_rights).castling, 0);

        let blocked = GameState::from_fen("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1").expect("FEN should parse");
        assert_eq!(collect_features(&blocked).castling, 1);
    }

    #[test]
    fn terms_follow_side_to_move() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/QQQQK3 b - - 0 1").expect("FEN should parse");
        let black = collect_features(&game);
        let white = collect_features(&game.with_side_flipped());
        assert_eq!(black.piece_counts[PieceKind::Queen.index()], 0);
        assert_eq!(white.piece_counts[PieceKind::Queen.index()], 4);
    }
}
