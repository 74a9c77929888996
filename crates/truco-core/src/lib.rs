pub mod suit;
pub mod rank;
pub mod card;
pub mod intel;
pub mod decision;
pub mod io;

pub use suit::Suit;
pub use rank::Rank;
pub use card::Card;
pub use intel::{GameIntel, GameIntelBuilder, RoundResult};
pub use decision::{CardToPlay, RaiseAnswer};
