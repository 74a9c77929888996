use crate::rank::Rank;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// A card is a manilha iff its rank is the successor of the vira's rank.
    pub fn is_manilha(self, vira: Card) -> bool {
        self.rank == vira.rank.next()
    }

    /// Scalar strength relative to the vira. Non-manilha cards map to their
    /// natural rank position; manilhas sit above every natural rank and are
    /// separated by suit. Equal strength means the cards tie in a round.
    pub fn strength(self, vira: Card) -> u8 {
        if self.is_manilha(vira) {
            Rank::ALL.len() as u8 + self.suit as u8
        } else {
            self.rank as u8
        }
    }

    /// Total ordering against `other` under the given vira: any manilha
    /// beats any plain card, manilhas are ordered by suit, plain cards by
    /// natural rank. Plain cards of equal rank compare equal.
    pub fn compare_with_vira(self, other: Card, vira: Card) -> Ordering {
        self.strength(vira).cmp(&other.strength(vira))
    }
}

impl FromStr for Card {
    type Err = ();

    /// Parses the two-character form, rank then suit: "3C", "KH", "7D".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let rank = chars.next().and_then(Rank::from_char).ok_or(())?;
        let suit = chars.next().and_then(Suit::from_char).ok_or(())?;
        if chars.next().is_some() {
            return Err(());
        }
        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
