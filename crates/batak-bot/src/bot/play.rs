use super::BotContext;
use batak_core::model::card::Card;
use batak_core::model::rank::Rank;
use batak_core::model::suit::Suit;
use batak_core::model::trick::{current_winner, is_trumped, lead_suit};
use batak_core::rules;
use std::cmp::Reverse;

const SUIT_SIZE: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayReason {
    EmptyLegalFallback,
    OnlyLegal,
    DrawTrump,
    BaitDummy,
    LeadMaster,
    LeadLowSideSuit,
    LeadLowest,
    PartnerWinning,
    DuckUnderAce,
    CheapestWinner,
    CannotWin,
}

impl PlayReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayReason::EmptyLegalFallback => "empty_legal_fallback",
            PlayReason::OnlyLegal => "only_legal",
            PlayReason::DrawTrump => "draw_trump",
            PlayReason::BaitDummy => "bait_dummy",
            PlayReason::LeadMaster => "lead_master",
            PlayReason::LeadLowSideSuit => "lead_low_side_suit",
            PlayReason::LeadLowest => "lead_lowest",
            PlayReason::PartnerWinning => "partner_winning",
            PlayReason::DuckUnderAce => "duck_under_ace",
            PlayReason::CheapestWinner => "cheapest_winner",
            PlayReason::CannotWin => "cannot_win",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayDecision {
    pub card: Card,
    pub reason: PlayReason,
}

impl PlayDecision {
    fn new(card: Card, reason: PlayReason) -> Self {
        Self { card, reason }
    }
}

pub struct PlayPlanner;

impl PlayPlanner {
    /// Picks a card for `ctx.seat`. `None` only when the hand is empty.
    pub fn choose(ctx: &BotContext<'_>) -> Option<PlayDecision> {
        let legal = rules::legal_moves(ctx.hand, ctx.plays, ctx.trump);
        Self::choose_from(&legal, ctx)
    }

    pub fn choose_from(legal: &[Card], ctx: &BotContext<'_>) -> Option<PlayDecision> {
        match legal {
            [] => ctx
                .hand
                .first()
                .map(|&card| PlayDecision::new(card, PlayReason::EmptyLegalFallback)),
            [only] => Some(PlayDecision::new(*only, PlayReason::OnlyLegal)),
            _ if ctx.plays.is_empty() => Some(Self::lead(legal, ctx)),
            _ => Some(Self::follow(legal, ctx)),
        }
    }

    fn lead(legal: &[Card], ctx: &BotContext<'_>) -> PlayDecision {
        let trump = ctx.trump;

        if ctx.is_bidder {
            let trumps_out = ctx.memory.count_suit(trump) + count_suit(ctx.hand, trump);
            if trumps_out < SUIT_SIZE
                && let Some(card) = highest(legal.iter().copied().filter(|c| c.suit == trump))
            {
                return PlayDecision::new(card, PlayReason::DrawTrump);
            }
        } else if ctx.features.dummy_bait_enabled()
            && let Some(dummy) = ctx.dummy
            && let Some(card) = bait_card(legal, dummy, trump, ctx.params.bait_rank_ceiling)
        {
            return PlayDecision::new(card, PlayReason::BaitDummy);
        }

        if let Some(card) = highest(legal.iter().copied().filter(|&c| ctx.memory.is_master(c))) {
            return PlayDecision::new(card, PlayReason::LeadMaster);
        }

        match lowest(legal.iter().copied().filter(|c| c.suit != trump)) {
            Some(card) => PlayDecision::new(card, PlayReason::LeadLowSideSuit),
            None => PlayDecision::new(lowest_legal(legal), PlayReason::LeadLowest),
        }
    }

    fn follow(legal: &[Card], ctx: &BotContext<'_>) -> PlayDecision {
        let trump = ctx.trump;
        let Some(lead) = lead_suit(ctx.plays) else {
            return PlayDecision::new(lowest_legal(legal), PlayReason::CannotWin);
        };
        let Some(top) = current_winner(ctx.plays, trump) else {
            return PlayDecision::new(lowest_legal(legal), PlayReason::CannotWin);
        };

        if top.position == ctx.seat.partner() {
            return PlayDecision::new(lowest_legal(legal), PlayReason::PartnerWinning);
        }

        let trumped = is_trumped(ctx.plays, trump);
        let only_lead_suit = legal.iter().all(|card| card.suit == lead);
        if top.card.rank == Rank::Ace && !trumped && only_lead_suit {
            return PlayDecision::new(lowest_legal(legal), PlayReason::DuckUnderAce);
        }

        let holds_lead = ctx.hand.iter().any(|card| card.suit == lead);
        let winners = legal.iter().copied().filter(|card| {
            if trumped {
                card.suit == trump && card.rank > top.card.rank
            } else if holds_lead {
                card.suit == lead && card.rank > top.card.rank
            } else {
                card.suit == trump
            }
        });
        match lowest(winners) {
            Some(card) => PlayDecision::new(card, PlayReason::CheapestWinner),
            None => PlayDecision::new(lowest_legal(legal), PlayReason::CannotWin),
        }
    }
}

/// Defender lead into a dummy suit holding king or queen without the ace.
fn bait_card(legal: &[Card], dummy: &[Card], trump: Suit, ceiling: Rank) -> Option<Card> {
    Suit::ALL
        .into_iter()
        .filter(|&suit| suit != trump)
        .filter(|&suit| {
            let mut dummy_suit = dummy.iter().filter(|card| card.suit == suit);
            let has_honor = dummy_suit
                .clone()
                .any(|card| matches!(card.rank, Rank::King | Rank::Queen));
            has_honor && !dummy_suit.any(|card| card.rank == Rank::Ace)
        })
        .find_map(|suit| {
            highest(
                legal
                    .iter()
                    .copied()
                    .filter(|card| card.suit == suit && card.rank < ceiling),
            )
        })
}

fn count_suit(cards: &[Card], suit: Suit) -> usize {
    cards.iter().filter(|card| card.suit == suit).count()
}

// Ties on rank go to the card that sorts first in hand order.
fn highest(cards: impl Iterator<Item = Card>) -> Option<Card> {
    cards.min_by_key(|card| (Reverse(card.rank), card.display_key()))
}

fn lowest(cards: impl Iterator<Item = Card>) -> Option<Card> {
    cards.min_by_key(|card| (card.rank, card.display_key()))
}

fn lowest_legal(legal: &[Card]) -> Card {
    lowest(legal.iter().copied()).expect("legal set is non-empty")
}
