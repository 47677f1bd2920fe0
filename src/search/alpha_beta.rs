//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Textbook search: native generation order, no transposition table, no
//! iterative deepening. The root is always a maximizing node for the side to
//! move, so depth is normalized to an even ply count and every leaf is scored
//! from the root mover's perspective.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::play_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::BoardScorer;

pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

/// Outcome of any move-selection strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<ChessMove>,
    /// Value of the chosen line from the mover's perspective.
    pub best_score: f64,
    /// Positions handed to the scorer.
    pub leaf_nodes: u64,
    pub root_moves: usize,
}

impl SearchResult {
    pub(crate) fn no_move<S: BoardScorer + ?Sized>(game_state: &GameState, scorer: &S) -> Self {
        Self {
            best_move: None,
            best_score: scorer.score(game_state),
            leaf_nodes: 1,
            root_moves: 0,
        }
    }
}

/// Immutable `(alpha, beta)` bounds threaded through the recursion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWindow {
    pub alpha: f64,
    pub beta: f64,
}

impl SearchWindow {
    pub const FULL: SearchWindow = SearchWindow {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };

    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: self.alpha.max(alpha),
            ..self
        }
    }

    #[inline]
    pub fn with_beta(self, beta: f64) -> Self {
        Self {
            beta: self.beta.min(beta),
            ..self
        }
    }

    #[inline]
    pub fn is_closed(self) -> bool {
        self.beta <= self.alpha
    }
}

/// Round `depth` up to an even ply count of at least 2.
#[inline]
pub const fn normalize_depth(depth: u8) -> u8 {
    let depth = if depth == 0 { 1 } else { depth };
    depth.saturating_add(1) & !1
}

pub fn alpha_beta_search<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
) -> SearchResult {
    search_root(game_state, scorer, depth, true)
}

/// Unpruned full-width minimax with the same depth and ordering semantics as
/// `alpha_beta_search`. Returns the same value while visiting every leaf.
pub fn minimax_search<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
) -> SearchResult {
    search_root(game_state, scorer, depth, false)
}

fn search_root<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    prune: bool,
) -> SearchResult {
    let moves = legal_moves(game_state);
    let Some(first) = moves.first().copied() else {
        return SearchResult::no_move(game_state, scorer);
    };

    let depth = normalize_depth(depth);
    let mut leaf_nodes = 0u64;
    let mut window = SearchWindow::FULL;
    let mut best_move = first;
    let mut best_score = f64::NEG_INFINITY;

    for mv in &moves {
        let child = play_move(game_state, *mv);
        let value = if prune {
            alpha_beta(&child, scorer, depth - 1, window, false, &mut leaf_nodes)
        } else {
            minimax(&child, scorer, depth - 1, false, &mut leaf_nodes)
        };

        if value > best_score {
            best_score = value;
            best_move = *mv;
        }
        window = window.with_alpha(best_score);
    }

    SearchResult {
        best_move: Some(best_move),
        best_score,
        leaf_nodes,
        root_moves: moves.len(),
    }
}

/// Static value from the root mover's perspective: minimizing nodes have the
/// opponent on move, so their score is negated.
#[inline]
fn leaf_value<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    maximizing: bool,
    leaf_nodes: &mut u64,
) -> f64 {
    *leaf_nodes += 1;
    let score = scorer.score(game_state);
    if maximizing {
        score
    } else {
        -score
    }
}

fn alpha_beta<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    mut window: SearchWindow,
    maximizing: bool,
    leaf_nodes: &mut u64,
) -> f64 {
    if depth == 0 {
        return leaf_value(game_state, scorer, maximizing, leaf_nodes);
    }

    let moves = legal_moves(game_state);
    if moves.is_empty() {
        return leaf_value(game_state, scorer, maximizing, leaf_nodes);
    }

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let child = play_move(game_state, mv);
            let value = alpha_beta(&child, scorer, depth - 1, window, false, leaf_nodes);
            best = best.max(value);
            window = window.with_alpha(best);
            if window.is_closed() {
                break;
            }
        }
        best
    } else {
        let mut best = f64::INFINITY;
        for mv in moves {
            let child = play_move(game_state, mv);
            let value = alpha_beta(&child, scorer, depth - 1, window, true, leaf_nodes);
            best = best.min(value);
            window = window.with_beta(best);
            if window.is_closed() {
                break;
            }
        }
        best
    }
}

fn minimax<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    maximizing: bool,
    leaf_nodes: &mut u64,
) -> f64 {
    if depth == 0 {
        return leaf_value(game_state, scorer, maximizing, leaf_nodes);
    }

    let moves = legal_moves(game_state);
    if moves.is_empty() {
        return leaf_value(game_state, scorer, maximizing, leaf_nodes);
    }

    let values = moves.into_iter().map(|mv| {
        let child = play_move(game_state, mv);
        minimax(&child, scorer, depth - 1, !maximizing, leaf_nodes)
    });

    if maximizing {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}
