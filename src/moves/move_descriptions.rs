//! Move representation: a source square plus a displacement vector.
//!
//! Moves are never stored as destination squares; the vector form is what the
//! legality tiers reason about and what callers hand back to `apply_move`.

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveVector {
    pub dx: i8,
    pub dy: i8,
}

impl MoveVector {
    #[inline]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        self.dx == 0 || self.dy == 0
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.dx.abs() == self.dy.abs()
    }

    /// King-step distance covered by the vector.
    #[inline]
    pub const fn chebyshev_length(self) -> i8 {
        let x = self.dx.abs();
        let y = self.dy.abs();
        if x > y {
            x
        } else {
            y
        }
    }

    /// One-square step in the direction of the vector (components are signums).
    #[inline]
    pub const fn unit_step(self) -> Self {
        Self {
            dx: self.dx.signum(),
            dy: self.dy.signum(),
        }
    }

    #[inline]
    pub const fn scaled(self, factor: i8) -> Self {
        Self {
            dx: self.dx * factor,
            dy: self.dy * factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub vector: MoveVector,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, vector: MoveVector) -> Self {
        Self { from, vector }
    }

    /// Build a move from a source and destination square.
    #[inline]
    pub const fn between(from: Square, to: Square) -> Self {
        Self {
            from,
            vector: MoveVector::new(
                to.file() as i8 - from.file() as i8,
                to.rank() as i8 - from.rank() as i8,
            ),
        }
    }

    /// Destination square, or `None` when the vector leaves the board.
    #[inline]
    pub const fn destination(self) -> Option<Square> {
        self.from.offset(self.vector.dx, self.vector.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChessMove, MoveVector};
    use crate::game_state::chess_types::Square;

    #[test]
    fn destination_is_none_when_vector_leaves_board() {
        let from = Square::at(6, 0);
        assert_eq!(
            ChessMove::new(from, MoveVector::new(1, 2)).destination(),
            Some(Square::at(7, 2))
        );
        assert_eq!(ChessMove::new(from, MoveVector::new(2, 1)).destination(), None);
    }

    #[test]
    fn vector_geometry_helpers() {
        let v = MoveVector::new(-3, 3);
        assert!(v.is_diagonal());
        assert!(!v.is_orthogonal());
        assert_eq!(v.chebyshev_length(), 3);
        assert_eq!(v.unit_step(), MoveVector::new(-1, 1));
        assert_eq!(
            ChessMove::between(Square::at(4, 1), Square::at(4, 3)).vector,
            MoveVector::new(0, 2)
        );
    }
}
