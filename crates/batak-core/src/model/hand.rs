use crate::model::card::Card;
use crate::model::suit::Suit;
use std::vec::Vec;

/// Cards held by one seat, kept in display order. Rule code never depends on
/// the ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.suit == suit)
    }

    pub fn count_suit(&self, suit: Suit) -> usize {
        self.cards.iter().filter(|card| card.suit == suit).count()
    }

    pub fn suit_cards(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |card| card.suit == suit)
    }

    fn sort(&mut self) {
        self.cards = sort_hand(&self.cards);
    }
}

/// Display ordering: Spades, Hearts, Clubs, Diamonds, each from high to low.
pub fn sort_hand(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|card| card.display_key());
    sorted
}

#[cfg(test)]
mod tests {
    use super::{Hand, sort_hand};
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn add_and_remove_cards() {
        let mut hand = Hand::new();
        let card = Card::new(Rank::Three, Suit::Clubs);
        hand.add(card);
        assert!(hand.contains(card));
        assert!(hand.remove(card));
        assert!(!hand.contains(card));
        assert!(!hand.remove(card));
    }

    #[test]
    fn cards_are_sorted_by_suit_priority_then_rank_descending() {
        let mut hand = Hand::new();
        hand.add(Card::new(Rank::Two, Suit::Diamonds));
        hand.add(Card::new(Rank::Two, Suit::Spades));
        hand.add(Card::new(Rank::King, Suit::Hearts));
        hand.add(Card::new(Rank::Ace, Suit::Spades));
        let ordered: Vec<_> = hand.iter().copied().collect();
        assert_eq!(
            ordered,
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Two, Suit::Spades),
                Card::new(Rank::King, Suit::Hearts),
                Card::new(Rank::Two, Suit::Diamonds),
            ]
        );
    }

    #[test]
    fn sort_hand_does_not_mutate_input() {
        let input = vec![
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Jack, Suit::Clubs),
        ];
        let sorted = sort_hand(&input);
        assert_eq!(input[0].rank, Rank::Four);
        assert_eq!(sorted[0].rank, Rank::Jack);
    }

    #[test]
    fn suit_queries() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Jack, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Hearts),
        ]);
        assert!(hand.has_suit(Suit::Clubs));
        assert!(!hand.has_suit(Suit::Spades));
        assert_eq!(hand.count_suit(Suit::Clubs), 2);
        assert_eq!(hand.suit_cards(Suit::Hearts).count(), 1);
    }
}
