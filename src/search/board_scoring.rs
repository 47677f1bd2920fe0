//! Pluggable board evaluation interfaces and the weighted heuristic scorer.
//!
//! Search delegates static position scoring to `BoardScorer` so alternate
//! weight sets (playing styles) can be swapped without touching search code.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::search::evaluation_terms::{collect_features, CheckState, EvaluationFeatures};

/// Number of tunable coefficients exposed by `EvaluatorWeights::coefficients`.
pub const COEFFICIENT_COUNT: usize = 9;

pub trait BoardScorer: Send + Sync {
    /// Differential score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> f64 {
        match piece {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight => 3.0,
            PieceKind::Bishop => 3.0,
            PieceKind::Rook => 5.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 0.0,
        }
    }

    fn material(game_state: &GameState, color: Color) -> f64 {
        game_state
            .pieces_of(color)
            .map(|(_, piece)| Self::piece_value(piece.kind))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> f64 {
        let side = game_state.side_to_move;
        Self::material(game_state, side) - Self::material(game_state, side.opposite())
    }
}

/// Coefficients of the heuristic evaluator. Different weight sets play differently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluatorWeights {
    /// Material per `PieceKind::index`.
    pub piece_values: [f64; 6],
    pub mobility: f64,
    pub minor_major_defense: f64,
    pub queen_defense: f64,
    pub king_mobility: f64,
    /// Multiplies the king-exposure count; negative values penalize an undefended king.
    pub king_undefended: f64,
    pub castling: f64,
    pub check: f64,
    pub checkmate: f64,
    /// Subtracted once per reversible half-move on the clock.
    pub half_move_decay: f64,
}

impl Default for EvaluatorWeights {
    fn default() -> Self {
        Self {
            piece_values: [1.0, 3.0, 3.0, 5.0, 9.0, 1000.0],
            mobility: 1.0,
            minor_major_defense: 1.0,
            queen_defense: 1.0,
            king_mobility: 1.0,
            king_undefended: -1.0,
            castling: 1.0,
            check: 1.0,
            checkmate: 1000.0,
            half_move_decay: 0.01,
        }
    }
}

impl EvaluatorWeights {
    /// Flat coefficient vector in tuning order: mobility, minor/major defense,
    /// queen defense, king mobility, king undefended, castling, check,
    /// checkmate, half-move decay. Piece values are not tuned.
    pub fn coefficients(&self) -> [f64; COEFFICIENT_COUNT] {
        [
            self.mobility,
            self.minor_major_defense,
            self.queen_defense,
            self.king_mobility,
            self.king_undefended,
            self.castling,
            self.check,
            self.checkmate,
            self.half_move_decay,
        ]
    }

    /// Inverse of `coefficients`, keeping the default piece values.
    pub fn from_coefficients(values: &[f64]) -> Result<Self, String> {
        let [mobility, minor_major_defense, queen_defense, king_mobility, king_undefended, castling, check, checkmate, half_move_decay] =
            <[f64; COEFFICIENT_COUNT]>::try_from(values).map_err(|_| {
                format!(
                    "expected {COEFFICIENT_COUNT} evaluator coefficients, got {}",
                    values.len()
                )
            })?;

        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(format!("evaluator coefficient must be finite, got {bad}"));
        }

        Ok(Self {
            mobility,
            minor_major_defense,
            queen_defense,
            king_mobility,
            king_undefended,
            castling,
            check,
            checkmate,
            half_move_decay,
            ..Self::default()
        })
    }

    /// Weighted sum of one side's terms.
    pub fn combine(&self, features: &EvaluationFeatures) -> f64 {
        let material: f64 = PieceKind::ALL
            .iter()
            .map(|kind| self.piece_values[kind.index()] * f64::from(features.piece_counts[kind.index()]))
            .sum();

        let check = match features.opponent {
            CheckState::None => 0.0,
            CheckState::Check => self.check,
            CheckState::Checkmate => self.checkmate,
        };

        material
            + self.mobility * features.mobility
            + self.minor_major_defense * f64::from(features.minor_major_defenses)
            + self.queen_defense * f64::from(features.queen_defenses)
            + self.king_mobility * f64::from(features.king_mobility)
            + self.king_undefended * f64::from(features.king_exposure)
            + self.castling * f64::from(features.castling)
            + check
            - self.half_move_decay * f64::from(features.reversible_move_count)
    }

    /// Desirability of `game_state` for its side to move alone.
    #[inline]
    pub fn score_one_side(&self, game_state: &GameState) -> f64 {
        self.combine(&collect_features(game_state))
    }
}

impl BoardScorer for EvaluatorWeights {
    fn score(&self, game_state: &GameState) -> f64 {
        self.score_one_side(game_state) - self.score_one_side(&game_state.with_side_flipped())
    }
}
