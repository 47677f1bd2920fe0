//! Uniform random-move engine.
//!
//! Selects uniformly from legal moves; used as a baseline opponent and in
//! integration tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Turochess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let legal_moves = legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine requested_depth {}",
                depth
            ));
        }

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn picks_a_legal_move_and_replays_under_seed() {
        let game = GameState::new_game();
        let legal = legal_moves(&game);

        let first = RandomEngine::seeded(9)
            .choose_move(&game, &GoParams::default())
            .expect("engine should answer");
        let second = RandomEngine::seeded(9)
            .choose_move(&game, &GoParams::default())
            .expect("engine should answer");

        let chosen = first.best_move.expect("a move should be chosen");
        assert!(legal.contains(&chosen));
        assert_eq!(first.best_move, second.best_move);
    }

    #[test]
    fn reports_no_move_when_stalemated() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let out = RandomEngine::seeded(1)
            .choose_move(&game, &GoParams::default())
            .expect("engine should answer");
        assert_eq!(out.best_move, None);
        assert_eq!(out.info_lines[0], "info string random_engine legal_moves 0");
    }
}
