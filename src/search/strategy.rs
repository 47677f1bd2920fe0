use rand::Rng;

use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::{alpha_beta_search, SearchResult, DEFAULT_SEARCH_DEPTH};
use crate::search::board_scoring::BoardScorer;
use crate::search::greedy_search::{maximize_self, minimize_opponent, two_ply_minimax};

/// How a move is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    MaximizeSelf,
    MinimizeOpponent { max_candidates: usize },
    TwoPly { max_candidates: usize },
    AlphaBeta { depth: u8 },
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::AlphaBeta {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl SearchStrategy {
    pub fn label(&self) -> String {
        match self {
            SearchStrategy::MaximizeSelf => "maximize_self".to_owned(),
            SearchStrategy::MinimizeOpponent { max_candidates } => {
                format!("minimize_opponent cap {max_candidates}")
            }
            SearchStrategy::TwoPly { max_candidates } => format!("two_ply cap {max_candidates}"),
            SearchStrategy::AlphaBeta { depth } => format!("alpha_beta depth {depth}"),
        }
    }

    /// Same strategy with its depth replaced; greedy strategies have no depth.
    pub fn with_depth(self, depth: u8) -> Self {
        match self {
            SearchStrategy::AlphaBeta { .. } => SearchStrategy::AlphaBeta { depth },
            other => other,
        }
    }
}

/// Choose a move for the side to move. `best_move` is `None` when there is none.
pub fn pick<S, R>(
    game_state: &GameState,
    scorer: &S,
    strategy: SearchStrategy,
    rng: &mut R,
) -> SearchResult
where
    S: BoardScorer + ?Sized,
    R: Rng + ?Sized,
{
    match strategy {
        SearchStrategy::MaximizeSelf => maximize_self(game_state, scorer, rng),
        SearchStrategy::MinimizeOpponent { max_candidates } => {
            minimize_opponent(game_state, scorer, max_candidates, rng)
        }
        SearchStrategy::TwoPly { max_candidates } => {
            two_ply_minimax(game_state, scorer, max_candidates, rng)
        }
        SearchStrategy::AlphaBeta { depth } => alpha_beta_search(game_state, scorer, depth),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{pick, SearchStrategy};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::search::board_scoring::MaterialScorer;
    use crate::search::greedy_search::DEFAULT_MAX_CANDIDATES;

    #[test]
    fn default_is_depth_two_alpha_beta() {
        assert_eq!(SearchStrategy::default(), SearchStrategy::AlphaBeta { depth: 2 });
        assert_eq!(SearchStrategy::default().with_depth(4), SearchStrategy::AlphaBeta { depth: 4 });
        assert_eq!(SearchStrategy::MaximizeSelf.with_depth(4), SearchStrategy::MaximizeSelf);
    }

    #[test]
    fn every_strategy_returns_a_legal_move() {
        let game = GameState::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
            .expect("FEN should parse");
        let legal = legal_moves(&game);
        let mut rng = StdRng::seed_from_u64(5);

        for strategy in [
            SearchStrategy::MaximizeSelf,
            SearchStrategy::MinimizeOpponent {
                max_candidates: DEFAULT_MAX_CANDIDATES,
            },
            SearchStrategy::TwoPly { max_candidates: 8 },
            SearchStrategy::AlphaBeta { depth: 2 },
        ] {
            let result = pick(&game, &MaterialScorer, strategy, &mut rng);
            let chosen = result.best_move.expect("a move should be chosen");
            assert!(legal.contains(&chosen), "{} chose an illegal move", strategy.label());
        }
    }
}
