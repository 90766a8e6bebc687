//! Order interpretation and application
//!
//! Orders are free text ("1st Blue Infantry advance north to C5"). The only
//! instruction the umpire acts on is a destination: the word `to`, some
//! whitespace, then a hex label. Anything else is dropped without error.

use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::{digit1, satisfy};
use nom::sequence::preceded;
use nom::{IResult, Parser};

use crate::battle::hex::HexLabel;
use crate::battle::units::Unit;

/// What an order text asks a unit to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderIntent {
    /// Move directly to a hex
    Move(HexLabel),
    /// No destination found
    Unparsed,
}

/// `to <letter><digits>`, case-insensitive, at the start of the input
fn destination(input: &str) -> IResult<&str, (char, &str)> {
    preceded(
        (tag_no_case("to"), take_while1(char::is_whitespace)),
        (satisfy(|c: char| c.is_ascii_alphabetic()), digit1),
    )
    .parse(input)
}

/// Interpret an order text
///
/// The leftmost destination wins, even inside a longer word ("onto B2").
/// A destination that is not a valid label (`to C0`) leaves the order
/// unparsed rather than trying a later one.
pub fn interpret(text: &str) -> OrderIntent {
    let found = text
        .char_indices()
        .find_map(|(idx, _)| destination(&text[idx..]).ok().map(|(_, parts)| parts));

    let Some((column, digits)) = found else {
        return OrderIntent::Unparsed;
    };

    let label = format!("{}{}", column.to_ascii_uppercase(), digits);
    match HexLabel::parse(&label) {
        Ok(label) => OrderIntent::Move(label),
        Err(_) => OrderIntent::Unparsed,
    }
}

/// Apply a unit's pending order, returning the updated unit
///
/// The order is always consumed. Destinations are not checked for range,
/// adjacency or terrain.
pub fn resolve_order(unit: &Unit) -> Unit {
    let mut resolved = unit.clone();

    if let Some(text) = resolved.orders.take() {
        match interpret(&text) {
            OrderIntent::Move(destination) => {
                tracing::debug!(
                    unit = %unit.id,
                    from = %unit.position,
                    to = %destination,
                    "Unit moved"
                );
                resolved.position = destination;
            }
            OrderIntent::Unparsed => {
                tracing::warn!(unit = %unit.id, order = %text, "Order dropped: no destination");
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Side;

    fn label(s: &str) -> HexLabel {
        HexLabel::parse(s).unwrap()
    }

    #[test]
    fn test_interpret_simple_move() {
        assert_eq!(interpret("advance to C5"), OrderIntent::Move(label("C5")));
    }

    #[test]
    fn test_interpret_case_insensitive() {
        assert_eq!(interpret("Advance TO c5."), OrderIntent::Move(label("C5")));
        assert_eq!(interpret("fall back To\tb12"), OrderIntent::Move(label("B12")));
    }

    #[test]
    fn test_interpret_multi_digit_row() {
        let OrderIntent::Move(dest) = interpret("advance to C12") else {
            panic!("expected a move");
        };
        assert_eq!(dest.to_string(), "C12");
        assert_eq!(dest.row(), 12);

        let OrderIntent::Move(dest) = interpret("fall back To\tb12") else {
            panic!("expected a move");
        };
        assert_eq!(dest.to_string(), "B12");
    }

    #[test]
    fn test_interpret_inside_word() {
        assert_eq!(interpret("push onto B2"), OrderIntent::Move(label("B2")));
    }

    #[test]
    fn test_interpret_leftmost_wins() {
        assert_eq!(
            interpret("march to D4 then to E7"),
            OrderIntent::Move(label("D4"))
        );
    }

    #[test]
    fn test_interpret_requires_whitespace() {
        assert_eq!(interpret("toC5"), OrderIntent::Unparsed);
        assert_eq!(interpret("advance toward C5"), OrderIntent::Unparsed);
    }

    #[test]
    fn test_interpret_no_destination() {
        assert_eq!(interpret("hold position"), OrderIntent::Unparsed);
        assert_eq!(interpret(""), OrderIntent::Unparsed);
        assert_eq!(interpret("move to the river"), OrderIntent::Unparsed);
    }

    #[test]
    fn test_interpret_invalid_label_is_unparsed() {
        assert_eq!(interpret("go to C0"), OrderIntent::Unparsed);
        assert_eq!(interpret("go to C05"), OrderIntent::Unparsed);
    }

    #[test]
    fn test_interpret_trailing_text_after_label() {
        assert_eq!(interpret("to C5x at dawn"), OrderIntent::Move(label("C5")));
    }

    #[test]
    fn test_interpret_non_ascii_text() {
        assert_eq!(interpret("vorwärts to F3, schnell"), OrderIntent::Move(label("F3")));
    }

    #[test]
    fn test_resolve_moves_and_clears() {
        let unit = Unit::new("B1", Side::Blue, label("A1")).with_orders("advance to C5");
        let resolved = resolve_order(&unit);
        assert_eq!(resolved.position, label("C5"));
        assert!(resolved.orders.is_none());
        // Input untouched
        assert_eq!(unit.position, label("A1"));
    }

    #[test]
    fn test_resolve_unparsed_keeps_position() {
        let unit = Unit::new("B1", Side::Blue, label("A1")).with_orders("hold position");
        let resolved = resolve_order(&unit);
        assert_eq!(resolved.position, label("A1"));
        assert!(resolved.orders.is_none());
    }

    #[test]
    fn test_resolve_without_orders_is_identity() {
        let unit = Unit::new("R1", Side::Red, label("D5"));
        assert_eq!(resolve_order(&unit), unit);
    }

    #[test]
    fn test_resolve_to_current_position() {
        let unit = Unit::new("B1", Side::Blue, label("A1")).with_orders("stay to A1");
        assert_eq!(resolve_order(&unit).position, label("A1"));
    }
}
