//! FEN-to-GameState parser.
//!
//! The en-passant field is folded into the per-color file marker, the halfmove
//! clock becomes the reversible-move count and the fullmove number is checked
//! and dropped.

use crate::game_state::chess_rules::en_passant_rank;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_file = parse_en_passant(en_passant_part)?;
    game_state.reversible_move_count = halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7u8 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err("Board rank has too many files".to_owned());
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if file >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            game_state.set_piece(Square::at(file, board_rank), Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

/// A square on rank 3 marks a White double advance, rank 6 a Black one.
fn parse_en_passant(en_passant_part: &str) -> Result<[Option<u8>; 2], String> {
    let mut slots = [None; 2];
    if en_passant_part == "-" {
        return Ok(slots);
    }

    let square = algebraic_to_square(en_passant_part)?;
    let owner = [Color::White, Color::Black]
        .into_iter()
        .find(|color| en_passant_rank(*color) == square.rank())
        .ok_or_else(|| format!("En-passant square must be on rank 3 or 6: {en_passant_part}"))?;

    slots[owner.index()] = Some(square.file());
    Ok(slots)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::{MAX_REVERSIBLE_MOVES, STARTING_POSITION_FEN};
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.castling_rights, CASTLE_ALL);
        assert_eq!(game_state.reversible_move_count, 0);
        assert_eq!(game_state.max_reversible_moves, MAX_REVERSIBLE_MOVES);
        assert_eq!(
            game_state.piece_at(Square::at(3, 7)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn en_passant_square_selects_owner_slot() {
        let white_pushed = parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        assert_eq!(white_pushed.en_passant_file, [Some(4), None]);
        assert_eq!(white_pushed.en_passant_target(), Some(Square::at(4, 2)));

        let black_pushed = parse_fen("4k3/8/8/3p4/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        assert_eq!(black_pushed.en_passant_file, [None, Some(3)]);
        assert_eq!(black_pushed.en_passant_target_for(Color::White), Some(Square::at(3, 5)));

        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - e4 0 1").is_err());
    }

    #[test]
    fn halfmove_clock_feeds_reversible_count() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 37 80").expect("FEN should parse");
        assert_eq!(game_state.reversible_move_count, 37);
    }

    #[test]
    fn malformed_fields_are_rejected() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(parse_fen("9/8/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(parse_fen("44/8/8/8/8/8/8/8 x - - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w X - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - zero 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - 0 1 extra").is_err());
    }
}
