//! Comparator-keyed queries over the cards in a snapshot. Every heuristic
//! is built from these.

use truco_core::{Card, GameIntel, Rank, Suit};

/// Weakest held card under the vira comparator.
pub fn weakest_card(intel: &GameIntel) -> Option<Card> {
    intel
        .cards
        .iter()
        .copied()
        .min_by(|a, b| a.compare_with_vira(*b, intel.vira))
}

/// Strongest held card under the vira comparator.
pub fn strongest_card(intel: &GameIntel) -> Option<Card> {
    intel
        .cards
        .iter()
        .copied()
        .max_by(|a, b| a.compare_with_vira(*b, intel.vira))
}

/// With exactly three manilhas in hand, the one that is neither the
/// weakest nor the strongest. None otherwise.
pub fn middle_manilha(intel: &GameIntel) -> Option<Card> {
    if manilha_count(intel) != 3 {
        return None;
    }
    let lowest = weakest_card(intel)?;
    let highest = strongest_card(intel)?;
    intel
        .cards
        .iter()
        .copied()
        .find(|c| *c != lowest && *c != highest)
}

pub fn manilha_count(intel: &GameIntel) -> usize {
    intel
        .cards
        .iter()
        .filter(|c| c.is_manilha(intel.vira))
        .count()
}

/// Whether the hand holds both of the two strongest manilhas (clubs and
/// hearts of the manilha rank).
pub fn has_top_manilha_pair(intel: &GameIntel) -> bool {
    let manilha_rank = intel.vira.rank.next();
    let zap = Card::new(manilha_rank, Suit::Clubs);
    let copas = Card::new(manilha_rank, Suit::Hearts);
    intel.cards.contains(&zap) && intel.cards.contains(&copas)
}

/// Number of held cards stronger than a natural TWO, i.e. THREEs and
/// manilhas.
pub fn cards_above_two(intel: &GameIntel) -> usize {
    intel
        .cards
        .iter()
        .filter(|c| c.rank == Rank::Three || c.is_manilha(intel.vira))
        .count()
}

/// Weakest held card that strictly beats `target`, so stronger cards are
/// not wasted on a round a weaker one wins.
pub fn weakest_beating(intel: &GameIntel, target: Card) -> Option<Card> {
    intel
        .cards
        .iter()
        .copied()
        .filter(|c| c.compare_with_vira(target, intel.vira).is_gt())
        .min_by(|a, b| a.compare_with_vira(*b, intel.vira))
}

/// Weakest held card that ties `target`.
pub fn weakest_tying(intel: &GameIntel, target: Card) -> Option<Card> {
    intel
        .cards
        .iter()
        .copied()
        .filter(|c| c.compare_with_vira(target, intel.vira).is_eq())
        .min_by(|a, b| a.compare_with_vira(*b, intel.vira))
}

/// Whether any held card beats or ties `target`.
pub fn can_beat_or_tie(intel: &GameIntel, target: Card) -> bool {
    intel
        .cards
        .iter()
        .any(|c| c.compare_with_vira(target, intel.vira).is_ge())
}

/// Strongest held card of the given natural rank, ignoring cards the vira
/// promoted to manilha.
pub fn strongest_plain_of_rank(intel: &GameIntel, rank: Rank) -> Option<Card> {
    intel
        .cards
        .iter()
        .copied()
        .filter(|c| c.rank == rank && !c.is_manilha(intel.vira))
        .max_by(|a, b| a.compare_with_vira(*b, intel.vira))
}
