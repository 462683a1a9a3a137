//! Square and move conversions for console coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! indices, and parses the two move forms accepted at the console:
//! `"a8 to b6"` and `"a8 b6"`.

use crate::errors::ParseError;
use crate::game_state::chess_types::{Move, Square};

const MOVE_SEPARATOR: &str = " to ";

/// Convert a square index (`0..=63`) to its coordinate (for example: "e4").
#[inline]
pub fn index_to_text(index: u8) -> Result<String, ParseError> {
    Ok(Square::new(index)?.to_string())
}

/// Convert a coordinate (for example: "e4") to a square.
pub fn text_to_index(text: &str) -> Result<Square, ParseError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ParseError::InvalidLength {
            text: text.to_owned(),
        });
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ParseError::InvalidFile {
            text: text.to_owned(),
        });
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ParseError::InvalidRank {
            text: text.to_owned(),
        });
    }

    Ok(Square::from_row_column(rank - b'1', file - b'a'))
}

/// Parse `"<src> to <dst>"` or `"<src> <dst>"` into a `Move`.
///
/// The first failing token decides the error.
pub fn parse_move(text: &str) -> Result<Move, ParseError> {
    let trimmed = text.trim();

    let mut tokens: Vec<&str> = trimmed.split(MOVE_SEPARATOR).collect();
    if tokens.len() != 2 {
        tokens = trimmed.split(' ').collect();
        if tokens.len() != 2 {
            return Err(ParseError::TokenCount {
                text: text.to_owned(),
            });
        }
    }

    let start = text_to_index(tokens[0])?;
    let end = text_to_index(tokens[1])?;
    Ok(Move::between(start, end))
}

#[cfg(test)]
mod tests {
    use super::{index_to_text, parse_move, text_to_index};
    use crate::errors::ParseError;
    use crate::game_state::chess_types::Move;

    #[test]
    fn every_index_round_trips_through_text() {
        for i in 0..64u8 {
            let text = index_to_text(i).expect("index in range should format");
            let back = text_to_index(&text).expect("formatted text should parse");
            assert_eq!(back.index(), i, "round trip failed for {text}");
        }
    }

    #[test]
    fn corner_squares_map_to_expected_indices() {
        assert_eq!(text_to_index("a1").expect("a1 should parse").index(), 0);
        assert_eq!(text_to_index("h1").expect("h1 should parse").index(), 7);
        assert_eq!(text_to_index("a8").expect("a8 should parse").index(), 56);
        assert_eq!(text_to_index("h8").expect("h8 should parse").index(), 63);
    }

    #[test]
    fn index_to_text_fails_loudly_out_of_range() {
        assert_eq!(
            index_to_text(64),
            Err(ParseError::IndexOutOfRange { index: 64 })
        );
    }

    #[test]
    fn text_to_index_names_the_failing_part() {
        assert!(matches!(
            text_to_index("a10"),
            Err(ParseError::InvalidLength { .. })
        ));
        assert!(matches!(
            text_to_index("i4"),
            Err(ParseError::InvalidFile { .. })
        ));
        assert!(matches!(
            text_to_index("a9"),
            Err(ParseError::InvalidRank { .. })
        ));
        assert!(matches!(
            text_to_index("A1"),
            Err(ParseError::InvalidFile { .. })
        ));
    }

    #[test]
    fn parse_move_accepts_both_formats() {
        let expected = Move::new(56, 41).expect("indices are in range");
        assert_eq!(parse_move("a8 to b6").expect("to-form should parse"), expected);
        assert_eq!(parse_move("a8 b6").expect("space-form should parse"), expected);
        assert_eq!(
            parse_move("a8 to b6\n").expect("trailing newline is trimmed"),
            expected
        );
    }

    #[test]
    fn parse_move_allows_self_move() {
        assert_eq!(
            parse_move("a8 to a8").expect("self-move is syntactically valid"),
            Move::new(56, 56).expect("indices are in range")
        );
    }

    #[test]
    fn parse_move_rejects_bad_squares() {
        for text in ["a9 to b6", "i4 to b6", "a3 to b10", "a3 to n6"] {
            assert!(parse_move(text).is_err(), "{text} should not parse");
        }
        assert!(matches!(
            parse_move("a3 to b10"),
            Err(ParseError::InvalidLength { text }) if text == "b10"
        ));
    }

    #[test]
    fn parse_move_rejects_wrong_token_counts() {
        for text in ["", "a2", "a2 a3 a4", "a2  a3", "a2 - a3", "a2 to a3 to a4"] {
            assert!(
                matches!(parse_move(text), Err(ParseError::TokenCount { .. })),
                "{text:?} should fail on token count"
            );
        }
    }
}
