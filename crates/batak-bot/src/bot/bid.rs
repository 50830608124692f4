use super::BotParams;
use batak_core::model::bid::{BidCall, Contract, MAX_BID, MIN_BID};
use batak_core::model::card::Card;
use batak_core::model::suit::Suit;

/// Hand strength read once per bidding decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BidEvaluation {
    pub call: BidCall,
    pub preferred_suit: Suit,
    pub score: f64,
}

impl BidEvaluation {
    /// Turns the evaluation into a call against the highest bid so far.
    pub fn respond(&self, current: Option<Contract>) -> BidCall {
        let current = current.map_or(0, |contract| contract.value);
        match self.call {
            BidCall::Sweep => BidCall::Sweep,
            BidCall::Raise(value) if value > current => BidCall::Raise(value),
            _ => BidCall::Pass,
        }
    }
}

pub struct BidPlanner;

impl BidPlanner {
    pub fn evaluate(hand: &[Card], params: &BotParams) -> BidEvaluation {
        let mut preferred_suit = Suit::Spades;
        let mut best = 0.0;
        for suit in Suit::ALL {
            let score = Self::suit_score(hand, suit, params);
            if score > best {
                best = score;
                preferred_suit = suit;
            }
        }

        let floored = best.floor();
        let call = if floored < f64::from(MIN_BID) {
            BidCall::Pass
        } else if floored > f64::from(MAX_BID) {
            BidCall::Sweep
        } else {
            BidCall::Raise(floored as u8)
        };

        BidEvaluation {
            call,
            preferred_suit,
            score: best,
        }
    }

    /// Strength of `hand` if `trump` were named.
    pub fn suit_score(hand: &[Card], trump: Suit, params: &BotParams) -> f64 {
        let length = hand.iter().filter(|card| card.suit == trump).count();
        let mut points = length.saturating_sub(params.long_suit_base) as f64;

        for card in hand {
            points += params.honor_points(card.rank);
            if card.suit == trump {
                points += params.trump_card_bonus;
            }
        }

        if points >= params.partner_threshold {
            points += params.partner_bonus;
        }
        points
    }
}
