use crate::card::Card;
use serde::{Deserialize, Serialize};

/// Outcome of one finished round within the current hand, from the bot's
/// point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Won,
    Lost,
    Drew,
}

/// Read-only snapshot of everything the bot is allowed to observe at a
/// decision point. The host builds a fresh value before each call and the
/// engine never holds onto it.
///
/// Host contract: `cards` has 1 to 3 entries, `vira` is always the turned
/// card of the current hand, and `round_results` lists the rounds already
/// finished (so its length is the zero-based index of the round in play).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameIntel {
    pub cards: Vec<Card>,
    pub vira: Card,
    #[serde(default)]
    pub opponent_card: Option<Card>,
    pub score: u8,
    pub opponent_score: u8,
    pub hand_points: u8,
    #[serde(default)]
    pub round_results: Vec<RoundResult>,
}

impl GameIntel {
    pub fn builder() -> GameIntelBuilder {
        GameIntelBuilder::default()
    }

    /// Zero-based index of the round being played.
    pub fn round_index(&self) -> usize {
        self.round_results.len()
    }

    /// Own score minus the opponent's score; negative when trailing.
    pub fn score_diff(&self) -> i16 {
        self.score as i16 - self.opponent_score as i16
    }
}

/// Builder for [`GameIntel`]. `cards` and `vira` are mandatory; the rest
/// default to a fresh hand at zero points.
#[derive(Debug, Default)]
pub struct GameIntelBuilder {
    cards: Vec<Card>,
    vira: Option<Card>,
    opponent_card: Option<Card>,
    score: u8,
    opponent_score: u8,
    hand_points: u8,
    round_results: Vec<RoundResult>,
}

impl GameIntelBuilder {
    pub fn cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    pub fn vira(mut self, vira: Card) -> Self {
        self.vira = Some(vira);
        self
    }

    pub fn opponent_card(mut self, card: Card) -> Self {
        self.opponent_card = Some(card);
        self
    }

    pub fn score(mut self, score: u8) -> Self {
        self.score = score;
        self
    }

    pub fn opponent_score(mut self, score: u8) -> Self {
        self.opponent_score = score;
        self
    }

    pub fn hand_points(mut self, points: u8) -> Self {
        self.hand_points = points;
        self
    }

    pub fn round_results(mut self, results: Vec<RoundResult>) -> Self {
        self.round_results = results;
        self
    }

    pub fn build(self) -> Option<GameIntel> {
        Some(GameIntel {
            cards: self.cards,
            vira: self.vira?,
            opponent_card: self.opponent_card,
            score: self.score,
            opponent_score: self.opponent_score,
            hand_points: self.hand_points,
            round_results: self.round_results,
        })
    }
}
