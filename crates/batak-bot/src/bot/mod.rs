mod bid;
mod params;
mod play;

pub use bid::{BidEvaluation, BidPlanner};
pub use params::BotParams;
pub use play::{PlayDecision, PlayPlanner, PlayReason};

use batak_core::game::round::RoundState;
use batak_core::model::card::Card;
use batak_core::model::memory::PlayedCardMemory;
use batak_core::model::player::PlayerPosition;
use batak_core::model::suit::Suit;
use batak_core::model::trick::Play;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotFeatures {
    log_details: bool,
    dummy_bait: bool,
}

impl BotFeatures {
    pub const fn new(log_details: bool, dummy_bait: bool) -> Self {
        Self {
            log_details,
            dummy_bait,
        }
    }

    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    pub const fn log_details_enabled(self) -> bool {
        self.log_details
    }

    pub const fn dummy_bait_enabled(self) -> bool {
        self.dummy_bait
    }

    pub fn with_log_details(mut self, enabled: bool) -> Self {
        self.log_details = enabled;
        self
    }

    fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let log_details = read("BATAK_BOT_LOG_DETAILS")
            .map(|raw| flag_enabled(&raw))
            .unwrap_or(false);

        let dummy_bait = read("BATAK_BOT_DUMMY_BAIT")
            .map(|raw| flag_enabled(&raw))
            .unwrap_or(true);

        Self {
            log_details,
            dummy_bait,
        }
    }
}

impl Default for BotFeatures {
    fn default() -> Self {
        Self {
            log_details: false,
            dummy_bait: true,
        }
    }
}

fn flag_enabled(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "true" | "TRUE" | "on" | "ON")
}

/// What a seat can see when choosing a card.
#[derive(Debug, Clone, Copy)]
pub struct BotContext<'a> {
    pub seat: PlayerPosition,
    pub hand: &'a [Card],
    pub plays: &'a [Play],
    pub trump: Suit,
    /// True for both members of the contract owner's partnership.
    pub is_bidder: bool,
    pub dummy: Option<&'a [Card]>,
    pub memory: &'a PlayedCardMemory,
    pub params: &'a BotParams,
    pub features: BotFeatures,
}

impl<'a> BotContext<'a> {
    /// Builds the view for `seat` during play. `None` before trump is named.
    pub fn from_round(
        seat: PlayerPosition,
        round: &'a RoundState,
        params: &'a BotParams,
        features: BotFeatures,
    ) -> Option<Self> {
        let trump = round.trump()?;
        Some(Self {
            seat,
            hand: round.hand(seat).cards(),
            plays: round.current_trick().plays(),
            trump,
            is_bidder: round.is_bidder_side(seat),
            dummy: round.dummy_hand().map(|hand| hand.cards()),
            memory: round.memory(),
            params,
            features,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn reader(values: &[(&str, &str)]) -> impl FnMut(&str) -> Option<String> {
        let map: HashMap<String, String> = values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn features_default_without_env() {
        let features = BotFeatures::from_reader(reader(&[]));
        assert_eq!(features, BotFeatures::default());
        assert!(!features.log_details_enabled());
        assert!(features.dummy_bait_enabled());
    }

    #[test]
    fn features_read_flags() {
        let features = BotFeatures::from_reader(reader(&[
            ("BATAK_BOT_LOG_DETAILS", " on "),
            ("BATAK_BOT_DUMMY_BAIT", "0"),
        ]));
        assert!(features.log_details_enabled());
        assert!(!features.dummy_bait_enabled());
    }
}
