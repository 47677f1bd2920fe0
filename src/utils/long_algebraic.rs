//! Long algebraic move text (`e2e4`) to and from `ChessMove`.
//!
//! Promotion is always to a queen, so a fifth character is accepted only as
//! `q` and carries no information.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_rules::legal;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<ChessMove, String> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    if let Some(suffix) = text.get(4..) {
        if !suffix.is_empty() && !suffix.eq_ignore_ascii_case("q") {
            return Err(format!("Unsupported promotion piece '{suffix}': pawns always promote to a queen"));
        }
    }

    if from == to {
        return Err(format!("Move does not change square: {long_algebraic}"));
    }

    Ok(ChessMove::between(from, to))
}

/// Parse move text and require it to be legal in `game_state`.
pub fn long_algebraic_to_legal_move(long_algebraic: &str, game_state: &GameState) -> Result<ChessMove, String> {
    let mv = long_algebraic_to_move(long_algebraic)?;
    if !legal(game_state, mv) {
        return Err(format!("Illegal move in current position: {long_algebraic}"));
    }
    Ok(mv)
}

pub fn move_to_long_algebraic(mv: ChessMove) -> Result<String, String> {
    let to = mv.destination().ok_or_else(|| {
        format!(
            "Move vector ({}, {}) leaves the board from {}",
            mv.vector.dx,
            mv.vector.dy,
            square_to_algebraic(mv.from)
        )
    })?;

    Ok(format!("{}{}", square_to_algebraic(mv.from), square_to_algebraic(to)))
}
