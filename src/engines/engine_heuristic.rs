//! Heuristic engine: a weight set plus a search strategy.
//!
//! The same weights can be played through any strategy; a tuning loop builds
//! one engine per candidate weight vector and reads the match outcomes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::EvaluatorWeights;
use crate::search::strategy::{pick, SearchStrategy};
use crate::utils::long_algebraic::move_to_long_algebraic;

pub struct HeuristicEngine<R = StdRng> {
    pub weights: EvaluatorWeights,
    pub strategy: SearchStrategy,
    rng: R,
}

impl HeuristicEngine<StdRng> {
    pub fn new(weights: EvaluatorWeights, strategy: SearchStrategy) -> Self {
        Self::with_rng(weights, strategy, StdRng::from_os_rng())
    }

    pub fn seeded(weights: EvaluatorWeights, strategy: SearchStrategy, seed: u64) -> Self {
        Self::with_rng(weights, strategy, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HeuristicEngine<R> {
    pub fn with_rng(weights: EvaluatorWeights, strategy: SearchStrategy, rng: R) -> Self {
        Self {
            weights,
            strategy,
            rng,
        }
    }
}

impl Default for HeuristicEngine<StdRng> {
    fn default() -> Self {
        Self::new(EvaluatorWeights::default(), SearchStrategy::default())
    }
}

impl<R: Rng + Send> Engine for HeuristicEngine<R> {
    fn name(&self) -> &str {
        "Turochess Heuristic"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let strategy = match params.depth {
            Some(depth) => self.strategy.with_depth(depth),
            None => self.strategy,
        };

        let result = pick(game_state, &self.weights, strategy, &mut self.rng);

        let mut out = EngineOutput {
            best_move: result.best_move,
            info_lines: Vec::with_capacity(4),
        };
        out.info_lines
            .push(format!("info string heuristic_engine strategy {}", strategy.label()));
        out.info_lines.push(format!(
            "info string heuristic_engine root_moves {}",
            result.root_moves
        ));
        out.info_lines.push(format!(
            "info string heuristic_engine leaf_nodes {}",
            result.leaf_nodes
        ));

        if let Some(mv) = result.best_move {
            out.info_lines.push(format!(
                "info string heuristic_engine best {} score {:.3}",
                move_to_long_algebraic(mv)?,
                result.best_score
            ));
        }

        Ok(out)
    }
}
