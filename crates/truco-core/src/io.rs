use crate::card::Card;

/// Parses a whitespace-separated card list (e.g. "3C KH 7D") into a
/// Vec<Card>, skipping tokens that do not parse.
pub fn parse_cards(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .filter_map(|token| token.parse::<Card>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Rank;
    use crate::suit::Suit;

    #[test]
    fn test_parse_cards_empty() {
        assert!(parse_cards("").is_empty());
    }

    #[test]
    fn test_parse_cards_multiple() {
        let cards = parse_cards("3C KH 7D");
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Three, Suit::Clubs),
                Card::new(Rank::King, Suit::Hearts),
                Card::new(Rank::Seven, Suit::Diamonds),
            ]
        );
    }

    #[test]
    fn test_parse_cards_skips_invalid() {
        let cards = parse_cards("3C BOGUS 2H");
        assert_eq!(cards.len(), 2);
    }
}
