use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::cmp::Reverse;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Stable identifier in `0..52`, suit-major with ascending rank.
    pub const fn id(self) -> u8 {
        (self.suit as u8) * 13 + (self.rank.value() - 2)
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        if id >= 52 {
            return None;
        }
        let suit = match Suit::from_index((id / 13) as usize) {
            Some(suit) => suit,
            None => return None,
        };
        match Rank::from_value(id % 13 + 2) {
            Some(rank) => Some(Card::new(rank, suit)),
            None => None,
        }
    }

    pub fn is_trump(self, trump: Suit) -> bool {
        self.suit == trump
    }

    /// Ordering used for presentation: suit priority, then rank descending.
    pub fn display_key(self) -> (Suit, Reverse<Rank>) {
        (self.suit, Reverse(self.rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
