//! Raise handling: answering the opponent's raise request and deciding
//! whether to ask for one.

use crate::analysis;
use truco_core::{GameIntel, RaiseAnswer, RoundResult};

/// Answers a raise request. Ordered cascade, first match wins:
///
/// 1. Hand already worth 9 and the opponent has 3+ points: accept.
/// 2. Hand worth 3 and the opponent has 9+ points: escalate.
/// 3. Opponent at 11 (and we are not): escalate.
/// 4. Below 11 ourselves: escalate with both top manilhas in hand,
///    accept with two or more cards above a natural TWO.
/// 5. Otherwise decline.
///
/// Being at 11 ourselves wins over rule 3: during our own hand of eleven
/// the card-based rules are skipped entirely.
pub fn raise_response(intel: &GameIntel) -> RaiseAnswer {
    if intel.hand_points == 9 && intel.opponent_score >= 3 {
        return RaiseAnswer::Accept;
    }
    if intel.hand_points == 3 && intel.opponent_score >= 9 {
        return RaiseAnswer::Escalate;
    }
    if intel.opponent_score == 11 && intel.score != 11 {
        return RaiseAnswer::Escalate;
    }
    if intel.score != 11 {
        if analysis::has_top_manilha_pair(intel) {
            return RaiseAnswer::Escalate;
        }
        if analysis::cards_above_two(intel) >= 2 {
            return RaiseAnswer::Accept;
        }
    }
    RaiseAnswer::Decline
}

/// Margin of points behind at which asking for a raise becomes worth the
/// variance.
const RAISE_DEFICIT: i16 = -6;

/// Whether to proactively request a raise. Never during a hand of eleven.
/// Otherwise only when trailing by [`RAISE_DEFICIT`] or worse, and not
/// when a round is already lost and no held card can beat or tie the
/// opponent's visible card.
pub fn decide_if_raises(intel: &GameIntel) -> bool {
    if intel.score == 11 || intel.opponent_score == 11 {
        return false;
    }
    if intel.score_diff() > RAISE_DEFICIT {
        return false;
    }
    if intel.round_results.contains(&RoundResult::Lost) {
        if let Some(opponent_card) = intel.opponent_card {
            if !analysis::can_beat_or_tie(intel, opponent_card) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use truco_core::io::parse_cards;
    use truco_core::GameIntelBuilder;

    fn base() -> GameIntelBuilder {
        GameIntel::builder()
            .cards(parse_cards("4C 5D 7S"))
            .vira("QS".parse().unwrap())
    }

    #[test]
    fn test_accepts_nine_point_hand_when_opponent_has_three() {
        let intel = base().hand_points(9).opponent_score(3).build().unwrap();
        assert_eq!(raise_response(&intel), RaiseAnswer::Accept);
    }

    #[test]
    fn test_escalates_three_point_hand_when_opponent_near_win() {
        let intel = base().hand_points(3).opponent_score(10).build().unwrap();
        assert_eq!(raise_response(&intel), RaiseAnswer::Escalate);
    }

    #[test]
    fn test_escalates_when_opponent_at_eleven() {
        let intel = base().opponent_score(11).build().unwrap();
        assert_eq!(raise_response(&intel), RaiseAnswer::Escalate);
    }

    #[test]
    fn test_own_eleven_beats_opponent_eleven() {
        let intel = base().score(11).opponent_score(11).build().unwrap();
        assert_eq!(raise_response(&intel), RaiseAnswer::Decline);
    }

    #[test]
    fn test_escalates_with_both_top_manilhas() {
        let intel = GameIntel::builder()
            .cards(parse_cards("AC AH 6D"))
            .vira("KS".parse().unwrap())
            .build()
            .unwrap();
        assert_eq!(raise_response(&intel), RaiseAnswer::Escalate);
    }

    #[test]
    fn test_accepts_with_two_cards_above_two() {
        let intel = GameIntel::builder()
            .cards(parse_cards("3C 3H JD"))
            .vira("KS".parse().unwrap())
            .build()
            .unwrap();
        assert_eq!(raise_response(&intel), RaiseAnswer::Accept);
    }

    #[test]
    fn test_declines_weak_hand() {
        let intel = GameIntel::builder()
            .cards(parse_cards("4C 5D 7S"))
            .vira("QS".parse().unwrap())
            .build()
            .unwrap();
        assert_eq!(raise_response(&intel), RaiseAnswer::Decline);
    }

    #[test]
    fn test_declines_at_own_eleven_even_with_strong_hand() {
        let intel = GameIntel::builder()
            .cards(parse_cards("AC AH 6D"))
            .vira("KS".parse().unwrap())
            .score(11)
            .build()
            .unwrap();
        assert_eq!(raise_response(&intel), RaiseAnswer::Decline);
    }

    #[test]
    fn test_no_raise_request_during_mao_de_onze() {
        let both = base().score(11).opponent_score(11).build().unwrap();
        assert!(!decide_if_raises(&both));

        let own = base().score(11).opponent_score(2).build().unwrap();
        assert!(!decide_if_raises(&own));
    }

    #[test]
    fn test_requests_raise_only_when_far_behind() {
        let trailing = base().score(1).opponent_score(7).build().unwrap();
        assert!(decide_if_raises(&trailing));

        let close = base().score(4).opponent_score(7).build().unwrap();
        assert!(!decide_if_raises(&close));

        let ahead = base().score(9).opponent_score(2).build().unwrap();
        assert!(!decide_if_raises(&ahead));
    }

    #[test]
    fn test_no_raise_request_after_lost_round_without_an_answer() {
        let intel = base()
            .score(1)
            .opponent_score(8)
            .round_results(vec![truco_core::RoundResult::Lost])
            .opponent_card("KC".parse().unwrap())
            .build()
            .unwrap();
        assert!(!decide_if_raises(&intel));
    }

    #[test]
    fn test_raise_request_survives_lost_round_with_a_winning_card() {
        let intel = GameIntel::builder()
            .cards(parse_cards("3C 5D"))
            .vira("QS".parse().unwrap())
            .score(1)
            .opponent_score(8)
            .round_results(vec![truco_core::RoundResult::Lost])
            .opponent_card("KC".parse().unwrap())
            .build()
            .unwrap();
        assert!(decide_if_raises(&intel));
    }
}
