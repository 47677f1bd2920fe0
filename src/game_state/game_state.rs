//! Authoritative position representation.
//!
//! `GameState` is a plain value: cloning it yields an independent snapshot, so
//! legality probes and search branches can mutate a copy without touching the
//! real position.

use crate::game_state::chess_rules::{
    back_rank, en_passant_rank, pawn_home_rank, BACK_RANK_LAYOUT, MAX_REVERSIBLE_MOVES,
};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // Rank-major, `a1 == 0`.
    pub board: [Option<Piece>; 64],

    /// Side being moved and analyzed. `apply_move` never flips it.
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,

    /// Per-color file of a pawn that just double-advanced, indexed by `Color::index`.
    /// At most one slot is set.
    pub en_passant_file: [Option<u8>; 2],

    pub reversible_move_count: u16,
    pub max_reversible_moves: u16,

    /// Pieces removed by the most recent `apply_move`.
    pub last_captures: [Option<Piece>; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_file: [None; 2],
            reversible_move_count: 0,
            max_reversible_moves: MAX_REVERSIBLE_MOVES,
            last_captures: [None; 2],
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position, all castling rights set, clocks zeroed.
    pub fn new_game() -> Self {
        let mut state = Self {
            castling_rights: CASTLE_ALL,
            ..Self::default()
        };

        for color in [Color::White, Color::Black] {
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let file = file as u8;
                state.set_piece(Square::at(file, back_rank(color)), Some(Piece::new(color, *kind)));
                state.set_piece(
                    Square::at(file, pawn_home_rank(color)),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }

        state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.board[square.index()].is_none()
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.index()] = piece;
    }

    /// Remove and return the occupant of `square`.
    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.board[square.index()].take()
    }

    #[inline]
    pub fn flip_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Copy of this state analyzed from the other side's point of view.
    #[inline]
    pub fn with_side_flipped(&self) -> Self {
        let mut flipped = self.clone();
        flipped.flip_side_to_move();
        flipped
    }

    /// All occupied squares of `color`, in board order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Squares holding a `color` piece of `kind`, in board order.
    pub fn squares_of(&self, color: Color, kind: PieceKind) -> impl Iterator<Item = Square> + '_ {
        let wanted = Piece::new(color, kind);
        Square::all().filter(move |sq| self.piece_at(*sq) == Some(wanted))
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares_of(color, PieceKind::King).next()
    }

    #[inline]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights & castling_flag(color, side) != 0
    }

    /// The recorded en-passant square, whichever side set it.
    pub fn en_passant_target(&self) -> Option<Square> {
        [Color::White, Color::Black].into_iter().find_map(|color| {
            self.en_passant_file[color.index()]
                .and_then(|file| Square::new(file as i8, en_passant_rank(color) as i8))
        })
    }

    /// En-passant square `capturer` may land on: only the opponent's slot counts.
    pub fn en_passant_target_for(&self, capturer: Color) -> Option<Square> {
        let owner = capturer.opposite();
        self.en_passant_file[owner.index()]
            .and_then(|file| Square::new(file as i8, en_passant_rank(owner) as i8))
    }

    #[inline]
    pub fn clear_en_passant(&mut self) {
        self.en_passant_file = [None; 2];
    }

    /// Pieces removed by the last applied move.
    pub fn last_captures(&self) -> impl Iterator<Item = Piece> + '_ {
        self.last_captures.iter().flatten().copied()
    }

    pub(crate) fn record_capture(&mut self, piece: Piece) {
        if let Some(slot) = self.last_captures.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(piece);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let game = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("FEN should parse");
        assert_eq!(game, parsed);
        assert_eq!(game.pieces_of(Color::White).count(), 16);
        assert_eq!(game.pieces_of(Color::Black).count(), 16);
        assert_eq!(game.king_square(Color::Black), Some(Square::at(4, 7)));
        assert_eq!(game.castling_rights, CASTLE_ALL);
        assert_eq!(game.reversible_move_count, 0);
    }

    #[test]
    fn clones_do_not_share_board_storage() {
        let game = GameState::new_game();
        let mut probe = game.clone();
        probe.take_piece(Square::at(4, 1));
        probe.flip_side_to_move();
        assert_eq!(
            game.piece_at(Square::at(4, 1)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(game.side_to_move, Color::White);
    }

    #[test]
    fn en_passant_slot_fixes_rank_and_capturer() {
        let mut game = GameState::new_empty();
        game.en_passant_file[Color::White.index()] = Some(4);
        assert_eq!(game.en_passant_target(), Some(Square::at(4, 2)));
        assert_eq!(game.en_passant_target_for(Color::Black), Some(Square::at(4, 2)));
        assert_eq!(game.en_passant_target_for(Color::White), None);
    }

    #[test]
    fn malformed_en_passant_file_reads_as_no_target() {
        let mut game = GameState::new_empty();
        game.en_passant_file[Color::Black.index()] = Some(8);
        assert_eq!(game.en_passant_target(), None);
        assert_eq!(game.en_passant_target_for(Color::White), None);

        game.en_passant_file[Color::Black.index()] = Some(200);
        assert_eq!(game.en_passant_target_for(Color::White), None);
    }
}
