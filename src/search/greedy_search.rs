//! Shallow move pickers: one-ply greedy variants and an unpruned two-ply search.
//!
//! Randomness is injected by the caller so tie-breaking and shuffling replay
//! exactly under a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{play_move, simulate_move};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::search::alpha_beta::SearchResult;
use crate::search::board_scoring::BoardScorer;

/// Candidate cap for the minimize-opponent and two-ply pickers.
pub const DEFAULT_MAX_CANDIDATES: usize = 32;

/// Running best with uniform tie-breaking: the k-th tied candidate replaces
/// the incumbent with probability 1/k.
struct ReservoirBest {
    best: Option<(ChessMove, f64)>,
    ties: u32,
}

impl ReservoirBest {
    fn new() -> Self {
        Self {
            best: None,
            ties: 0,
        }
    }

    fn offer<R: Rng + ?Sized>(&mut self, mv: ChessMove, score: f64, better: bool, rng: &mut R) {
        match self.best {
            Some((_, incumbent)) if score == incumbent => {
                self.ties += 1;
                if rng.random_range(0..self.ties) == 0 {
                    self.best = Some((mv, score));
                }
            }
            Some(_) if !better => {}
            _ => {
                self.best = Some((mv, score));
                self.ties = 1;
            }
        }
    }

    fn incumbent(&self) -> Option<f64> {
        self.best.map(|(_, score)| score)
    }
}

/// Pick the move whose resulting position scores highest for the mover,
/// without handing the turn over.
pub fn maximize_self<S, R>(game_state: &GameState, scorer: &S, rng: &mut R) -> SearchResult
where
    S: BoardScorer + ?Sized,
    R: Rng + ?Sized,
{
    let moves = legal_moves(game_state);
    if moves.is_empty() {
        return SearchResult::no_move(game_state, scorer);
    }

    let mut reservoir = ReservoirBest::new();
    for mv in &moves {
        let score = scorer.score(&simulate_move(game_state, *mv));
        let better = reservoir.incumbent().map_or(true, |best| score > best);
        reservoir.offer(*mv, score, better, rng);
    }

    finish(reservoir, moves.len(), moves.len() as u64, false)
}

/// Shuffle the legal moves, look at most `max_candidates` of them and keep the
/// one leaving the opponent with the lowest score. `best_score` is reported
/// from the mover's side (the negated opponent score).
pub fn minimize_opponent<S, R>(
    game_state: &GameState,
    scorer: &S,
    max_candidates: usize,
    rng: &mut R,
) -> SearchResult
where
    S: BoardScorer + ?Sized,
    R: Rng + ?Sized,
{
    let mut moves = legal_moves(game_state);
    if moves.is_empty() {
        return SearchResult::no_move(game_state, scorer);
    }
    let root_moves = moves.len();

    moves.shuffle(rng);
    moves.truncate(max_candidates.max(1));

    let mut reservoir = ReservoirBest::new();
    for mv in &moves {
        let opponent_score = scorer.score(&play_move(game_state, *mv));
        let better = reservoir.incumbent().map_or(true, |best| opponent_score < best);
        reservoir.offer(*mv, opponent_score, better, rng);
    }

    finish(reservoir, root_moves, moves.len() as u64, true)
}

/// For each of the first `max_candidates` moves in generation order, let the
/// opponent answer with `minimize_opponent` (always at the default cap) and
/// score the result for the mover. Keeps the maximum; on an exact tie the
/// later candidate wins.
pub fn two_ply_minimax<S, R>(
    game_state: &GameState,
    scorer: &S,
    max_candidates: usize,
    rng: &mut R,
) -> SearchResult
where
    S: BoardScorer + ?Sized,
    R: Rng + ?Sized,
{
    let moves = legal_moves(game_state);
    let Some(first) = moves.first().copied() else {
        return SearchResult::no_move(game_state, scorer);
    };

    let mut best_move = first;
    let mut best_score = f64::NEG_INFINITY;
    let mut leaf_nodes = 0u64;

    for mv in moves.iter().take(max_candidates.max(1)) {
        let after_mine = play_move(game_state, *mv);
        let reply = minimize_opponent(&after_mine, scorer, DEFAULT_MAX_CANDIDATES, rng);
        leaf_nodes += reply.leaf_nodes;

        let line_end = match reply.best_move {
            Some(reply_move) => play_move(&after_mine, reply_move),
            None => after_mine.with_side_flipped(),
        };
        let score = scorer.score(&line_end);
        leaf_nodes += 1;

        if score >= best_score {
            best_score = score;
            best_move = *mv;
        }
    }

    SearchResult {
        best_move: Some(best_move),
        best_score,
        leaf_nodes,
        root_moves: moves.len(),
    }
}

fn finish(reservoir: ReservoirBest, root_moves: usize, leaf_nodes: u64, negate: bool) -> SearchResult {
    let (best_move, best_score) = match reservoir.best {
        Some((mv, score)) => (Some(mv), if negate { -score } else { score }),
        None => (None, f64::NEG_INFINITY),
    };
    SearchResult {
        best_move,
        best_score,
        leaf_nodes,
        root_moves,
    }
}
