use std::thread;

use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::is_in_check;
use crate::move_generation::legal_move_apply::play_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::king_moves::castle_side_for_vector;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(game_state) {
        perft_recurse(game_state, mv, depth, 1, &mut total);
    }
    total
}

/// Same counts as `perft`, one scoped worker per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> Result<PerftCounts, String> {
    if depth == 0 {
        return Ok(perft(game_state, 0));
    }

    let root_moves = legal_moves(game_state);
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(game_state, mv, depth, 1, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let local = handle
                .join()
                .map_err(|_| "perft worker thread panicked".to_owned())?;
            total.merge(local);
        }
        Ok(total)
    })
}

fn perft_recurse(
    parent: &GameState,
    mv: ChessMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let child = play_move(parent, mv);

    if current_depth == search_depth {
        tally_leaf(parent, &child, mv, counts);
        return;
    }

    for next in legal_moves(&child) {
        perft_recurse(&child, next, search_depth, current_depth + 1, counts);
    }
}

fn tally_leaf(parent: &GameState, child: &GameState, mv: ChessMove, counts: &mut PerftCounts) {
    counts.nodes += 1;

    let Some(moving) = parent.piece_at(mv.from) else {
        return;
    };
    let to = mv.destination();

    if child.last_captures().next().is_some() {
        counts.captures += 1;
    }
    if moving.kind == PieceKind::Pawn && mv.vector.dx != 0 && to.is_some_and(|sq| parent.is_empty(sq)) {
        counts.en_passant += 1;
    }
    if moving.kind == PieceKind::King && castle_side_for_vector(mv.vector).is_some() {
        counts.castles += 1;
    }
    if moving.kind == PieceKind::Pawn && to.is_some_and(|sq| sq.rank() == promotion_rank(moving.color)) {
        counts.promotions += 1;
    }

    if is_in_check(child) {
        counts.checks += 1;
        if legal_moves(child).is_empty() {
            counts.checkmates += 1;
        }
    }
}
