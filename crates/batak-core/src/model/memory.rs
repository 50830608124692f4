use crate::model::card::Card;
use crate::model::deck::DECK_SIZE;
use crate::model::suit::Suit;

/// Append-only log of every card that left a hand during the current round.
#[derive(Debug, Clone)]
pub struct PlayedCardMemory {
    log: Vec<Card>,
    seen: [bool; DECK_SIZE],
}

impl PlayedCardMemory {
    pub fn new() -> Self {
        Self {
            log: Vec::with_capacity(DECK_SIZE),
            seen: [false; DECK_SIZE],
        }
    }

    pub fn reset(&mut self) {
        self.log.clear();
        self.seen = [false; DECK_SIZE];
    }

    pub fn record(&mut self, card: Card) {
        let id = card.id() as usize;
        debug_assert!(!self.seen[id], "{card} recorded twice");
        self.seen[id] = true;
        self.log.push(card);
    }

    pub fn contains(&self, card: Card) -> bool {
        self.seen[card.id() as usize]
    }

    pub fn played(&self) -> &[Card] {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn count_suit(&self, suit: Suit) -> usize {
        self.log.iter().filter(|card| card.suit == suit).count()
    }

    /// A card is master once every higher rank of its suit has been played.
    pub fn is_master(&self, card: Card) -> bool {
        card.rank
            .higher()
            .all(|rank| self.contains(Card::new(rank, card.suit)))
    }
}

impl Default for PlayedCardMemory {
    fn default() -> Self {
        Self::new()
    }
}
