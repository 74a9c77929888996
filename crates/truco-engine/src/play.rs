//! Card selection: a small state machine over the round index.

use crate::analysis;
use truco_core::{Card, CardToPlay, GameIntel, Rank};

/// Picks the card for the current round.
///
/// With exactly three manilhas the schedule is fixed: weakest openly in
/// round one, the middle one face down in round two, the strongest openly
/// in round three. Reacting to a visible opponent card, the cheapest
/// winner is preferred, then the cheapest tie, then the weakest card.
/// Leading the first round with a full hand, a strong natural card probes
/// the opponent without spending a manilha. Failing everything, the first
/// card in hand is played openly.
pub fn choose_card(intel: &GameIntel) -> CardToPlay {
    if analysis::manilha_count(intel) == 3 {
        match intel.round_index() {
            0 => {
                if let Some(card) = analysis::weakest_card(intel) {
                    return CardToPlay::Open(card);
                }
            }
            1 => {
                if let Some(card) = analysis::middle_manilha(intel) {
                    return CardToPlay::FaceDown(card);
                }
            }
            2 => {
                if let Some(card) = analysis::strongest_card(intel) {
                    return CardToPlay::Open(card);
                }
            }
            _ => {}
        }
    }

    if let Some(opponent_card) = intel.opponent_card {
        if let Some(card) = analysis::weakest_beating(intel, opponent_card) {
            return CardToPlay::Open(card);
        }
        if let Some(card) = analysis::weakest_tying(intel, opponent_card) {
            return CardToPlay::Open(card);
        }
        if let Some(card) = analysis::weakest_card(intel) {
            return CardToPlay::Open(card);
        }
    }

    if intel.opponent_card.is_none() && intel.cards.len() == 3 {
        if let Some(card) = probe_lead(intel) {
            return CardToPlay::Open(card);
        }
    }

    CardToPlay::Open(intel.cards[0])
}

/// Strongest natural KING, then ACE, then TWO; never a manilha.
fn probe_lead(intel: &GameIntel) -> Option<Card> {
    [Rank::King, Rank::Ace, Rank::Two]
        .into_iter()
        .find_map(|rank| analysis::strongest_plain_of_rank(intel, rank))
}
