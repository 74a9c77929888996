//! Random deal generation for the debug tooling and property tests.

use rand::seq::SliceRandom;
use rand::Rng;
use truco_core::{Card, GameIntel, Rank, Suit};

/// The full 40-card Truco deck.
pub fn deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(40);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Deals a fresh first-round snapshot: a shuffled vira and three cards,
/// zero scores, one point at stake.
pub fn deal_snapshot(rng: &mut impl Rng) -> GameIntel {
    let mut cards = deck();
    cards.shuffle(rng);
    let vira = cards[0];
    GameIntel {
        cards: cards[1..4].to_vec(),
        vira,
        opponent_card: None,
        score: 0,
        opponent_score: 0,
        hand_points: 1,
        round_results: Vec::new(),
    }
}

/// Like [`deal_snapshot`], but the opponent has already led a card.
pub fn deal_reactive_snapshot(rng: &mut impl Rng) -> GameIntel {
    let mut intel = deal_snapshot(rng);
    let mut cards = deck();
    cards.retain(|c| c != &intel.vira && !intel.cards.contains(c));
    intel.opponent_card = cards.choose(rng).copied();
    intel
}
