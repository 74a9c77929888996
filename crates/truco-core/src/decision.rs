use crate::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer to an opponent's raise request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaiseAnswer {
    Decline,
    Accept,
    Escalate,
}

impl RaiseAnswer {
    /// The integer form the host protocol speaks: -1 decline, 0 accept,
    /// 1 escalate.
    pub fn value(self) -> i8 {
        match self {
            RaiseAnswer::Decline => -1,
            RaiseAnswer::Accept => 0,
            RaiseAnswer::Escalate => 1,
        }
    }
}

impl From<RaiseAnswer> for i8 {
    fn from(answer: RaiseAnswer) -> i8 {
        answer.value()
    }
}

/// A card committed to the current round, either shown or discarded
/// face down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardToPlay {
    Open(Card),
    FaceDown(Card),
}

impl CardToPlay {
    /// The card leaving the hand, regardless of how it is played.
    pub fn card(self) -> Card {
        match self {
            CardToPlay::Open(card) | CardToPlay::FaceDown(card) => card,
        }
    }

    pub fn is_face_down(self) -> bool {
        matches!(self, CardToPlay::FaceDown(_))
    }
}

impl fmt::Display for CardToPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardToPlay::Open(card) => write!(f, "{}", card),
            CardToPlay::FaceDown(card) => write!(f, "{} (face down)", card),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Rank;
    use crate::suit::Suit;

    #[test]
    fn test_raise_answer_values() {
        assert_eq!(RaiseAnswer::Decline.value(), -1);
        assert_eq!(RaiseAnswer::Accept.value(), 0);
        assert_eq!(RaiseAnswer::Escalate.value(), 1);
        assert_eq!(i8::from(RaiseAnswer::Escalate), 1);
    }

    #[test]
    fn test_card_to_play_accessors() {
        let card = Card::new(Rank::Three, Suit::Clubs);
        assert_eq!(CardToPlay::Open(card).card(), card);
        assert_eq!(CardToPlay::FaceDown(card).card(), card);
        assert!(CardToPlay::FaceDown(card).is_face_down());
        assert!(!CardToPlay::Open(card).is_face_down());
    }

    #[test]
    fn test_card_to_play_display() {
        let card = Card::new(Rank::King, Suit::Hearts);
        assert_eq!(CardToPlay::Open(card).to_string(), "KH");
        assert_eq!(CardToPlay::FaceDown(card).to_string(), "KH (face down)");
    }
}
