use crate::game::round::RoundPhase;
use crate::game::summary::RoundSummary;
use crate::model::bid::{BidCall, Contract};
use crate::model::card::Card;
use crate::model::player::PlayerPosition;
use crate::model::suit::Suit;
use crate::model::trick::TrickError;
use crate::rules::MoveRejection;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a seat can ask the engine to do. Human input and heuristic
/// decisions arrive through the same variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum Action {
    Bid { seat: PlayerPosition, call: BidCall },
    SelectTrump { seat: PlayerPosition, suit: Suit },
    Play { seat: PlayerPosition, card: Card },
    Surrender { seat: PlayerPosition },
}

impl Action {
    pub const fn seat(self) -> PlayerPosition {
        match self {
            Action::Bid { seat, .. }
            | Action::SelectTrump { seat, .. }
            | Action::Play { seat, .. }
            | Action::Surrender { seat } => seat,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Action::Bid { .. } => "bid",
            Action::SelectTrump { .. } => "select_trump",
            Action::Play { .. } => "play",
            Action::Surrender { .. } => "surrender",
        }
    }
}

/// Identifies the round an action was computed for. Issued by the match and
/// invalidated whenever a new round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionTicket {
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    BidAccepted { next: PlayerPosition },
    ContractSettled { contract: Contract },
    TrumpSelected { trump: Suit, leader: PlayerPosition },
    CardPlayed { next: PlayerPosition },
    TrickCompleted { winner: PlayerPosition },
    RoundFinished { summary: RoundSummary },
}

impl ActionOutcome {
    pub fn finished_summary(&self) -> Option<&RoundSummary> {
        match self {
            ActionOutcome::RoundFinished { summary } => Some(summary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidError {
    #[error("bid {0} is outside the 8..=13 range")]
    OutOfRange(u8),
    #[error("bid {offered} does not exceed the current bid of {current}")]
    TooLow { offered: u8, current: u8 },
}

/// Rejections leave the round untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("action targets round {ticket} but round {current} is active")]
    StaleRound { ticket: u64, current: u64 },
    #[error("{action} is not allowed during {phase:?}")]
    WrongPhase {
        action: &'static str,
        phase: RoundPhase,
    },
    #[error("expected {expected} to act but got {actual}")]
    OutOfTurn {
        expected: PlayerPosition,
        actual: PlayerPosition,
    },
    #[error("only the contract owner {owner} may name trump, not {actual}")]
    NotContractOwner {
        owner: PlayerPosition,
        actual: PlayerPosition,
    },
    #[error("illegal bid: {0}")]
    Bid(#[from] BidError),
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("illegal card: {0}")]
    IllegalMove(#[from] MoveRejection),
    #[error("trick bookkeeping failed: {0}")]
    Trick(#[from] TrickError),
    #[error("a round is still in progress")]
    RoundInProgress,
}
