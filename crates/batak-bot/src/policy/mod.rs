mod heuristic;

pub use heuristic::HeuristicPolicy;

use crate::bot::BotFeatures;
use batak_core::game::action::Action;
use batak_core::game::round::{RoundPhase, RoundState};
use batak_core::model::bid::BidCall;
use batak_core::model::card::Card;
use batak_core::model::player::PlayerPosition;
use batak_core::model::suit::Suit;

/// Context provided to policies for decision-making
pub struct PolicyContext<'a> {
    pub seat: PlayerPosition,
    pub round: &'a RoundState,
    pub features: BotFeatures,
}

/// Decision interface for non-human seats
pub trait Policy: Send {
    /// Called during Bidding when `ctx.seat` is on turn
    fn choose_bid(&mut self, ctx: &PolicyContext) -> BidCall;

    /// Called during TrumpSelection for the contract owner
    fn choose_trump(&mut self, ctx: &PolicyContext) -> Suit;

    /// Called during Playing when `ctx.seat` is on turn
    fn choose_play(&mut self, ctx: &PolicyContext) -> Card;
}

/// Asks `policy` for the action owed by the seat on turn. `None` when the
/// round is idle, finished, or the seat on turn has nothing to play.
pub fn next_action(
    policy: &mut dyn Policy,
    round: &RoundState,
    features: BotFeatures,
) -> Option<Action> {
    let seat = round.turn();
    let ctx = PolicyContext {
        seat,
        round,
        features,
    };
    match round.phase() {
        RoundPhase::Bidding => Some(Action::Bid {
            seat,
            call: policy.choose_bid(&ctx),
        }),
        RoundPhase::TrumpSelection => Some(Action::SelectTrump {
            seat,
            suit: policy.choose_trump(&ctx),
        }),
        RoundPhase::Playing if !round.hand(seat).is_empty() => Some(Action::Play {
            seat,
            card: policy.choose_play(&ctx),
        }),
        RoundPhase::Idle | RoundPhase::Playing | RoundPhase::Finished => None,
    }
}
