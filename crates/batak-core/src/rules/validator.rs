//! Card-play referee.
//!
//! Obligations are checked in a fixed order: follow the lead suit, beat the
//! table when following an untrumped trick, trump when void, overtrump when
//! able, and trump even when the trump will lose. A trick that has already
//! been trumped removes the beat obligation for lead-suit followers but keeps
//! the overtrump obligation for trumpers.

use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use crate::model::trick::{Play, highest_of_suit, is_trumped, lead_suit};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("must follow suit ({0})")]
    MustFollowSuit(Suit),
    #[error("must beat the {0} on the table")]
    MustBeat(Rank),
    #[error("must trump ({0}) when void in the lead suit")]
    MustTrump(Suit),
    #[error("must overtrump the {0} on the table")]
    MustOvertrump(Rank),
}

/// Decides whether `card` may be played from `hand` onto `plays`.
pub fn validate(card: Card, hand: &[Card], plays: &[Play], trump: Suit) -> Result<(), MoveRejection> {
    let Some(lead) = lead_suit(plays) else {
        return Ok(());
    };
    let trumped = is_trumped(plays, trump);

    if hand.iter().any(|c| c.suit == lead) {
        if card.suit != lead {
            return Err(MoveRejection::MustFollowSuit(lead));
        }
        if !trumped {
            if let Some(top) = highest_of_suit(plays, lead) {
                let can_beat = hand.iter().any(|c| c.suit == lead && c.rank > top);
                if can_beat && card.rank <= top {
                    return Err(MoveRejection::MustBeat(top));
                }
            }
        }
        return Ok(());
    }

    if hand.iter().any(|c| c.suit == trump) {
        if card.suit != trump {
            return Err(MoveRejection::MustTrump(trump));
        }
        if trumped {
            if let Some(top) = highest_of_suit(plays, trump) {
                let can_overtrump = hand.iter().any(|c| c.suit == trump && c.rank > top);
                if can_overtrump && card.rank <= top {
                    return Err(MoveRejection::MustOvertrump(top));
                }
            }
        }
        return Ok(());
    }

    Ok(())
}

pub fn is_legal(card: Card, hand: &[Card], plays: &[Play], trump: Suit) -> bool {
    validate(card, hand, plays, trump).is_ok()
}

/// Validator-accepted subset of `hand`, in hand order.
pub fn legal_moves(hand: &[Card], plays: &[Play], trump: Suit) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|&card| is_legal(card, hand, plays, trump))
        .collect()
}
