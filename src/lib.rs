//! Crate root module declarations for the Turochess rules engine.
//!
//! This file exposes the board model, the vector-based move legality
//! pipeline, the heuristic evaluator and its search strategies, the engine
//! abstraction, and the notation/match utilities so binaries, benches and
//! tuning tools can import stable module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_castling;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_path;
    pub mod legal_move_rules;
    pub mod legal_move_shape;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod evaluation_terms;
    pub mod greedy_search;
    pub mod strategy;
}

pub mod engines {
    pub mod engine_heuristic;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
