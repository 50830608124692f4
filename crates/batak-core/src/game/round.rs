use crate::game::action::{Action, ActionError, ActionOutcome, BidError};
use crate::game::summary::RoundSummary;
use crate::model::bid::{BidCall, Contract, FORCED_BID, MAX_BID, MIN_BID, SWEEP_BID};
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::memory::PlayedCardMemory;
use crate::model::player::PlayerPosition;
use crate::model::score::{RoundEnding, score_round};
use crate::model::suit::Suit;
use crate::model::trick::Trick;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::array;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Idle,
    Bidding,
    TrumpSelection,
    Playing,
    Finished,
}

impl RoundPhase {
    pub const fn is_active(self) -> bool {
        matches!(
            self,
            RoundPhase::Bidding | RoundPhase::TrumpSelection | RoundPhase::Playing
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub winner: PlayerPosition,
    pub cards: [Card; 4],
}

/// One deal from bidding through the last trick.
#[derive(Debug, Clone)]
pub struct RoundState {
    phase: RoundPhase,
    dealer: PlayerPosition,
    turn: PlayerPosition,
    hands: [Hand; 4],
    active_bidders: [bool; 4],
    bid_history: Vec<(PlayerPosition, BidCall)>,
    contract: Option<Contract>,
    trump: Option<Suit>,
    current_trick: Trick,
    completed: Vec<CompletedTrick>,
    tricks_won: [u8; 4],
    memory: PlayedCardMemory,
    summary: Option<RoundSummary>,
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::Idle,
            dealer: PlayerPosition::East,
            turn: PlayerPosition::South,
            hands: array::from_fn(|_| Hand::new()),
            active_bidders: [false; 4],
            bid_history: Vec::new(),
            contract: None,
            trump: None,
            current_trick: Trick::new(PlayerPosition::South),
            completed: Vec::new(),
            tricks_won: [0; 4],
            memory: PlayedCardMemory::new(),
            summary: None,
        }
    }

    /// Deals `deck` and opens bidding with the seat after `dealer`.
    pub fn start(&mut self, dealer: PlayerPosition, deck: &Deck) {
        self.start_with_hands(dealer, deck.deal());
    }

    pub fn start_with_hands(&mut self, dealer: PlayerPosition, hands: [Hand; 4]) {
        let opener = dealer.next();
        *self = Self {
            phase: RoundPhase::Bidding,
            dealer,
            turn: opener,
            hands,
            active_bidders: [true; 4],
            current_trick: Trick::new(opener),
            ..Self::new()
        };
        info!(target: "batak_core::round", %dealer, %opener, "round started");
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn dealer(&self) -> PlayerPosition {
        self.dealer
    }

    /// Seat expected to act next. Meaningless outside the active phases.
    pub fn turn(&self) -> PlayerPosition {
        self.turn
    }

    pub fn hand(&self, seat: PlayerPosition) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn hands(&self) -> &[Hand; 4] {
        &self.hands
    }

    pub fn is_active_bidder(&self, seat: PlayerPosition) -> bool {
        self.active_bidders[seat.index()]
    }

    pub fn active_bidder_count(&self) -> usize {
        self.active_bidders.iter().filter(|active| **active).count()
    }

    pub fn bid_history(&self) -> &[(PlayerPosition, BidCall)] {
        &self.bid_history
    }

    /// Highest bid so far during bidding; the settled contract afterwards.
    pub fn contract(&self) -> Option<Contract> {
        self.contract
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    pub fn completed_tricks(&self) -> &[CompletedTrick] {
        &self.completed
    }

    pub fn tricks_won(&self) -> [u8; 4] {
        self.tricks_won
    }

    pub fn memory(&self) -> &PlayedCardMemory {
        &self.memory
    }

    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    /// The contract owner's partner, whose hand is shown face up once play begins.
    pub fn dummy_seat(&self) -> Option<PlayerPosition> {
        match self.phase {
            RoundPhase::Playing | RoundPhase::Finished => {
                self.contract.map(|contract| contract.owner.partner())
            }
            _ => None,
        }
    }

    pub fn dummy_hand(&self) -> Option<&Hand> {
        self.dummy_seat().map(|seat| self.hand(seat))
    }

    /// True when `seat` belongs to the contract owner's partnership.
    pub fn is_bidder_side(&self, seat: PlayerPosition) -> bool {
        self.contract
            .is_some_and(|contract| contract.owner.team() == seat.team())
    }

    /// Cards `seat` may legally play right now. Empty when it is not that seat's turn.
    pub fn legal_moves(&self, seat: PlayerPosition) -> Vec<Card> {
        match (self.phase, self.trump) {
            (RoundPhase::Playing, Some(trump)) if seat == self.turn => rules::legal_moves(
                self.hand(seat).cards(),
                self.current_trick.plays(),
                trump,
            ),
            _ => Vec::new(),
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome, ActionError> {
        match action {
            Action::Bid { seat, call } => self.submit_bid(seat, call),
            Action::SelectTrump { seat, suit } => self.select_trump(seat, suit),
            Action::Play { seat, card } => self.play_card(seat, card),
            Action::Surrender { seat } => self.surrender(seat),
        }
    }

    pub fn submit_bid(
        &mut self,
        seat: PlayerPosition,
        call: BidCall,
    ) -> Result<ActionOutcome, ActionError> {
        self.expect_phase("bid", &[RoundPhase::Bidding])?;
        self.expect_turn(seat)?;

        let current = self.contract.map_or(0, |contract| contract.value);
        match call {
            BidCall::Pass => {}
            BidCall::Raise(value) => {
                if !(MIN_BID..=MAX_BID).contains(&value) {
                    return Err(BidError::OutOfRange(value).into());
                }
                if value <= current {
                    return Err(BidError::TooLow {
                        offered: value,
                        current,
                    }
                    .into());
                }
            }
            BidCall::Sweep => {}
        }

        self.bid_history.push((seat, call));
        debug!(target: "batak_core::round", %seat, %call, "bid recorded");

        match call {
            BidCall::Sweep => {
                self.contract = Some(Contract::new(seat, SWEEP_BID));
                Ok(self.settle_contract())
            }
            BidCall::Raise(value) => {
                self.contract = Some(Contract::new(seat, value));
                self.turn = self.next_active_bidder(seat);
                Ok(ActionOutcome::BidAccepted { next: self.turn })
            }
            BidCall::Pass => {
                self.active_bidders[seat.index()] = false;
                if self.active_bidder_count() > 1 {
                    self.turn = self.next_active_bidder(seat);
                    return Ok(ActionOutcome::BidAccepted { next: self.turn });
                }
                let last = self.next_active_bidder(seat);
                self.contract = Some(match self.contract {
                    None => Contract::new(self.dealer, FORCED_BID),
                    Some(contract) => Contract::new(last, contract.value),
                });
                Ok(self.settle_contract())
            }
        }
    }

    pub fn select_trump(
        &mut self,
        seat: PlayerPosition,
        suit: Suit,
    ) -> Result<ActionOutcome, ActionError> {
        self.expect_phase("select_trump", &[RoundPhase::TrumpSelection])?;
        let contract = self.settled_contract();
        if seat != contract.owner {
            return Err(ActionError::NotContractOwner {
                owner: contract.owner,
                actual: seat,
            });
        }

        self.trump = Some(suit);
        self.phase = RoundPhase::Playing;
        self.turn = contract.owner;
        self.current_trick = Trick::new(contract.owner);
        info!(target: "batak_core::round", trump = %suit, leader = %contract.owner, "trump selected");
        Ok(ActionOutcome::TrumpSelected {
            trump: suit,
            leader: contract.owner,
        })
    }

    pub fn play_card(
        &mut self,
        seat: PlayerPosition,
        card: Card,
    ) -> Result<ActionOutcome, ActionError> {
        self.expect_phase("play", &[RoundPhase::Playing])?;
        self.expect_turn(seat)?;
        let Some(trump) = self.trump else {
            return Err(ActionError::WrongPhase {
                action: "play",
                phase: self.phase,
            });
        };

        let hand = &self.hands[seat.index()];
        if !hand.contains(card) {
            return Err(ActionError::CardNotInHand(card));
        }
        rules::validate(card, hand.cards(), self.current_trick.plays(), trump)?;

        self.current_trick.play(seat, card)?;
        self.hands[seat.index()].remove(card);
        self.memory.record(card);
        debug!(target: "batak_core::round", %seat, %card, "card played");

        if !self.current_trick.is_complete() {
            self.turn = seat.next();
            return Ok(ActionOutcome::CardPlayed { next: self.turn });
        }

        let winner = self
            .current_trick
            .winner(trump)
            .expect("complete trick has a winner");
        let finished = std::mem::replace(&mut self.current_trick, Trick::new(winner));
        let cards = array::from_fn(|i| finished.plays()[i].card);
        self.completed.push(CompletedTrick { winner, cards });
        self.tricks_won[winner.index()] += 1;
        self.turn = winner;
        debug!(
            target: "batak_core::round",
            %winner,
            trick = self.completed.len(),
            "trick completed"
        );

        let contract = self.settled_contract();
        if contract.is_sweep() && winner.team() != contract.owner.team() {
            return Ok(self.finish(RoundEnding::SweepBroken));
        }
        if self.hands.iter().all(Hand::is_empty) {
            return Ok(self.finish(RoundEnding::Completed));
        }
        Ok(ActionOutcome::TrickCompleted { winner })
    }

    /// Concedes the round for `seat`'s partnership.
    pub fn surrender(&mut self, seat: PlayerPosition) -> Result<ActionOutcome, ActionError> {
        self.expect_phase(
            "surrender",
            &[RoundPhase::TrumpSelection, RoundPhase::Playing],
        )?;
        info!(target: "batak_core::round", %seat, team = %seat.team(), "round surrendered");
        Ok(self.finish(RoundEnding::Surrendered(seat.team())))
    }

    fn settle_contract(&mut self) -> ActionOutcome {
        let contract = self.settled_contract();
        self.phase = RoundPhase::TrumpSelection;
        self.turn = contract.owner;
        info!(
            target: "batak_core::round",
            owner = %contract.owner,
            value = contract.value,
            forced = contract.is_forced(),
            "contract settled"
        );
        ActionOutcome::ContractSettled { contract }
    }

    fn finish(&mut self, ending: RoundEnding) -> ActionOutcome {
        let contract = self.settled_contract();
        let score = score_round(contract, &self.tricks_won, ending);
        let summary = RoundSummary::new(self.dealer, contract, self.trump, self.tricks_won, score);
        self.phase = RoundPhase::Finished;
        self.summary = Some(summary);
        info!(
            target: "batak_core::round",
            result = %summary.result,
            us = summary.us_score,
            them = summary.them_score,
            "round finished"
        );
        ActionOutcome::RoundFinished { summary }
    }

    fn settled_contract(&self) -> Contract {
        self.contract
            .expect("contract is settled once bidding closes")
    }

    fn next_active_bidder(&self, from: PlayerPosition) -> PlayerPosition {
        let mut seat = from.next();
        while !self.active_bidders[seat.index()] && seat != from {
            seat = seat.next();
        }
        seat
    }

    fn expect_phase(
        &self,
        action: &'static str,
        allowed: &[RoundPhase],
    ) -> Result<(), ActionError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(ActionError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn expect_turn(&self, seat: PlayerPosition) -> Result<(), ActionError> {
        if seat == self.turn {
            Ok(())
        } else {
            Err(ActionError::OutOfTurn {
                expected: self.turn,
                actual: seat,
            })
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
