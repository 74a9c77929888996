pub mod analysis;
pub mod deal;
mod mao_de_onze;
mod play;
mod raise;

pub use mao_de_onze::mao_de_onze_response;
pub use play::choose_card;
pub use raise::{decide_if_raises, raise_response};

use serde::Serialize;
use truco_core::{CardToPlay, GameIntel};

/// All four decisions for one snapshot, in a serializable form for the
/// debug tooling.
#[derive(Debug, Serialize)]
pub struct DecisionSummary {
    pub raise_response: i8,
    pub mao_de_onze: bool,
    pub requests_raise: bool,
    pub card: CardToPlay,
}

pub fn summarize(intel: &GameIntel) -> DecisionSummary {
    DecisionSummary {
        raise_response: raise_response(intel).value(),
        mao_de_onze: mao_de_onze_response(intel),
        requests_raise: decide_if_raises(intel),
        card: choose_card(intel),
    }
}
