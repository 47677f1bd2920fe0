//! Game-termination predicates, always evaluated for the side to move.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::no_checks;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    InactivityDraw,
}

#[inline]
pub fn is_in_check(game_state: &GameState) -> bool {
    !no_checks(game_state)
}

/// Side to move is in check and has no legal move.
pub fn is_checkmate(game_state: &GameState) -> bool {
    is_in_check(game_state) && legal_moves(game_state).is_empty()
}

/// The reversible-move clock reached its cap.
#[inline]
pub fn is_inactivity_draw(game_state: &GameState) -> bool {
    game_state.reversible_move_count >= game_state.max_reversible_moves
}

/// Inactivity draw, or no legal move while not in check.
pub fn is_stalemate(game_state: &GameState) -> bool {
    is_inactivity_draw(game_state) || (!is_in_check(game_state) && legal_moves(game_state).is_empty())
}

pub fn is_game_over(game_state: &GameState) -> bool {
    game_status(game_state) != GameStatus::Ongoing
}

/// Checkmate takes precedence over the inactivity cap.
pub fn game_status(game_state: &GameState) -> GameStatus {
    let no_moves = legal_moves(game_state).is_empty();
    let in_check = is_in_check(game_state);

    match (no_moves, in_check) {
        (true, true) => GameStatus::Checkmate,
        _ if is_inactivity_draw(game_state) => GameStatus::InactivityDraw,
        (true, false) => GameStatus::Stalemate,
        (false, _) => GameStatus::Ongoing,
    }
}
