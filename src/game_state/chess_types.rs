//! Core value types shared by the rules engine, evaluator and search.
//!
//! Pieces, squares and castling flags are small `Copy` values so a whole
//! `GameState` can be duplicated for hypothetical lines without aliasing.

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind. Color is carried separately in [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Pieces whose moves walk square by square and can be blocked.
    #[inline]
    pub const fn is_slider(self) -> bool {
        !matches!(self, PieceKind::Knight)
    }
}

/// An occupant of a square. An empty square is `None` in the board array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate. Files `a..h` and ranks `1..8` both map to `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square from known-good coordinates (tables and constants).
    ///
    /// Panics if either coordinate is outside `0..=7`.
    #[inline]
    pub const fn at(file: u8, rank: u8) -> Self {
        assert!(file < 8 && rank < 8, "square coordinate out of range");
        Self { file, rank }
    }

    #[inline]
    pub const fn new(file: i8, rank: i8) -> Option<Self> {
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= 64 {
            None
        } else {
            Some(Self {
                file: (index % 8) as u8,
                rank: (index / 8) as u8,
            })
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Index into a rank-major 64 entry board (`a1 == 0`, `h8 == 63`).
    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Square reached by stepping `(dx, dy)`, or `None` off the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let file = self.file as i16 + dx as i16;
        let rank = self.rank as i16 + dy as i16;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

/// Which wing a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Castling rights bitmask. Rights are only ever cleared after setup.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[inline]
pub const fn castling_flag(color: Color, side: CastleSide) -> CastlingRights {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => CASTLE_WHITE_KINGSIDE,
        (Color::White, CastleSide::Queenside) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_QUEENSIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::{castling_flag, CastleSide, Color, Square, CASTLE_ALL};

    #[test]
    fn square_offsets_respect_board_edges() {
        let h1 = Square::at(7, 0);
        assert_eq!(h1.offset(0, 1), Some(Square::at(7, 1)));
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(0, -1), None);
        assert_eq!(Square::at(3, 3).index(), 27);
        assert_eq!(Square::from_index(64), None);
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn castling_flags_are_distinct_bits() {
        let mut seen = 0u8;
        for color in [Color::White, Color::Black] {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                let flag = castling_flag(color, side);
                assert_eq!(flag.count_ones(), 1);
                assert_eq!(seen & flag, 0);
                seen |= flag;
            }
        }
        assert_eq!(seen, CASTLE_ALL);
    }

    #[test]
    fn offset_never_overflows() {
        assert_eq!(Square::at(7, 0).offset(125, 0), None);
        assert_eq!(Square::at(0, 7).offset(0, 127), None);
        assert_eq!(Square::at(0, 0).offset(i8::MIN, i8::MIN), None);
        assert_eq!(Square::at(7, 7).offset(-7, -7), Some(Square::at(0, 0)));
    }
}
