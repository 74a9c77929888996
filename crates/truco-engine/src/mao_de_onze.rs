//! Acceptance rule for the forced hand of eleven.

use crate::analysis;
use truco_core::{GameIntel, Rank};

/// Accepts the hand of eleven iff the hand holds at least one manilha and
/// every held card is a manilha, a TWO, or a THREE (exactly 3 qualifying
/// cards).
pub fn mao_de_onze_response(intel: &GameIntel) -> bool {
    let qualifying = intel
        .cards
        .iter()
        .filter(|c| {
            c.is_manilha(intel.vira) || c.rank == Rank::Two || c.rank == Rank::Three
        })
        .count();
    analysis::manilha_count(intel) >= 1 && qualifying == 3
}
