//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`
//! `cargo run --release --bin engine_match_series -- --weights 1,1,1,1,-1,1,1,1000,0.01`
//!
//! Player1 plays the supplied weight vector (defaults when omitted) through
//! alpha-beta; Player2 plays the default weights through the two-ply picker.

use turochess::engines::engine_heuristic::HeuristicEngine;
use turochess::engines::engine_trait::Engine;
use turochess::search::board_scoring::EvaluatorWeights;
use turochess::search::strategy::SearchStrategy;
use turochess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn parse_weights(text: &str) -> Result<EvaluatorWeights, String> {
    let values = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("Invalid weight: {part}"))
        })
        .collect::<Result<Vec<f64>, String>>()?;
    EvaluatorWeights::from_coefficients(&values)
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    let candidate = match args.iter().position(|a| a == "--weights") {
        Some(idx) => parse_weights(args.get(idx + 1).ok_or("--weights needs a value")?)?,
        None => EvaluatorWeights::default(),
    };

    let player1 = move |seed: u64| {
        Box::new(HeuristicEngine::seeded(
            candidate,
            SearchStrategy::AlphaBeta { depth: 2 },
            seed,
        )) as Box<dyn Engine>
    };
    let player2 = |seed: u64| {
        Box::new(HeuristicEngine::seeded(
            EvaluatorWeights::default(),
            SearchStrategy::TwoPly { max_candidates: 32 },
            seed,
        )) as Box<dyn Engine>
    };

    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 200,
                opening_min_plies: 2,
                opening_max_plies: 6,
                verbose,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
