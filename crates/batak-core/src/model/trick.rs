use crate::model::card::Card;
use crate::model::player::PlayerPosition;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TRICK_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    leader: PlayerPosition,
    plays: Vec<Play>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub position: PlayerPosition,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrickError {
    #[error("trick already complete")]
    TrickComplete,
    #[error("expected {expected} to play next but got {actual}")]
    OutOfTurn {
        expected: PlayerPosition,
        actual: PlayerPosition,
    },
    #[error("{0} has already played this trick")]
    AlreadyPlayed(PlayerPosition),
}

impl Trick {
    pub fn new(leader: PlayerPosition) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(TRICK_SIZE),
        }
    }

    pub fn leader(&self) -> PlayerPosition {
        self.leader
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == TRICK_SIZE
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        lead_suit(&self.plays)
    }

    pub fn play(&mut self, position: PlayerPosition, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::TrickComplete);
        }

        if self.plays.iter().any(|play| play.position == position) {
            return Err(TrickError::AlreadyPlayed(position));
        }

        let expected = self.expected_position();
        if expected != position {
            return Err(TrickError::OutOfTurn {
                expected,
                actual: position,
            });
        }

        self.plays.push(Play { position, card });
        Ok(())
    }

    /// Play currently holding the trick, complete or not.
    pub fn current_winner(&self, trump: Suit) -> Option<Play> {
        current_winner(&self.plays, trump)
    }

    pub fn winner(&self, trump: Suit) -> Option<PlayerPosition> {
        if !self.is_complete() {
            return None;
        }
        Some(resolve_trick(&self.plays, trump))
    }

    pub fn expected_position(&self) -> PlayerPosition {
        self.plays
            .last()
            .map(|play| play.position.next())
            .unwrap_or(self.leader)
    }
}

pub fn lead_suit(plays: &[Play]) -> Option<Suit> {
    plays.first().map(|play| play.card.suit)
}

pub fn is_trumped(plays: &[Play], trump: Suit) -> bool {
    plays.iter().any(|play| play.card.suit == trump)
}

/// Highest rank of `suit` on the table, if any card of it was played.
pub fn highest_of_suit(plays: &[Play], suit: Suit) -> Option<Rank> {
    plays
        .iter()
        .filter(|play| play.card.suit == suit)
        .map(|play| play.card.rank)
        .max()
}

pub fn current_winner(plays: &[Play], trump: Suit) -> Option<Play> {
    let lead = lead_suit(plays)?;
    let contest = if is_trumped(plays, trump) { trump } else { lead };
    plays
        .iter()
        .filter(|play| play.card.suit == contest)
        .max_by_key(|play| play.card.rank)
        .copied()
}

/// Names the winner of a full trick: highest trump if any was played,
/// otherwise highest card of the lead suit.
///
/// # Panics
/// Panics unless exactly four cards were played.
pub fn resolve_trick(plays: &[Play], trump: Suit) -> PlayerPosition {
    assert_eq!(
        plays.len(),
        TRICK_SIZE,
        "resolve_trick requires a full trick"
    );
    current_winner(plays, trump)
        .map(|play| play.position)
        .expect("non-empty trick has a lead card")
}
