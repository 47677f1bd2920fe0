//! Square conversions for algebraic coordinates.
//!
//! Files `a..h` map to `0..=7` and ranks `1..8` map to `0..=7`, the convention
//! every text boundary (FEN, move text, rendering) shares.

use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Square::at(file - b'a', rank - b'1'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'1' + square.rank());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_and_center_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::at(0, 0));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::at(7, 7));
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse").index(), 28);
        assert_eq!(square_to_algebraic(Square::at(0, 0)), "a1");
        assert_eq!(square_to_algebraic(Square::at(4, 3)), "e4");
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("e44").is_err());
    }
}
