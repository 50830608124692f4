use crate::game::action::{Action, ActionError, ActionOutcome, ActionTicket};
use crate::game::round::RoundState;
use crate::game::summary::RoundSummary;
use crate::model::deck::Deck;
use crate::model::player::{PlayerPosition, Team};
use crate::model::score::ScoreBoard;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

/// A sequence of rounds sharing one scoreboard and one shuffling stream.
#[derive(Debug, Clone)]
pub struct MatchState {
    scores: ScoreBoard,
    first_dealer: PlayerPosition,
    dealer: PlayerPosition,
    round_number: u32,
    generation: u64,
    current_round: RoundState,
    history: Vec<RoundSummary>,
    rng: StdRng,
    seed: u64,
}

impl MatchState {
    pub fn new(first_dealer: PlayerPosition) -> Self {
        let seed: u64 = rand::random();
        Self::with_seed(first_dealer, seed)
    }

    /// Identical seeds and identical action sequences replay identically.
    pub fn with_seed(first_dealer: PlayerPosition, seed: u64) -> Self {
        Self {
            scores: ScoreBoard::new(),
            first_dealer,
            dealer: first_dealer,
            round_number: 0,
            generation: 0,
            current_round: RoundState::new(),
            history: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn round(&self) -> &RoundState {
        &self.current_round
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn dealer(&self) -> PlayerPosition {
        self.dealer
    }

    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }

    pub fn ticket(&self) -> ActionTicket {
        ActionTicket {
            generation: self.generation,
        }
    }

    /// Deals the next round. The first call uses the match's first dealer;
    /// later calls rotate the dealer one seat.
    pub fn start_next_round(&mut self) -> Result<ActionTicket, ActionError> {
        let dealer = if self.round_number == 0 {
            self.first_dealer
        } else {
            self.dealer.next()
        };
        self.start_round(dealer)
    }

    /// Deals a fresh round with an explicit dealer. Tickets issued for the
    /// previous round stop being accepted.
    pub fn start_round(&mut self, dealer: PlayerPosition) -> Result<ActionTicket, ActionError> {
        self.ensure_round_closed()?;
        let deck = Deck::shuffled(&mut self.rng);
        self.start_round_with_deck(dealer, &deck)
    }

    /// Deals `deck` as given. Refused while a round is still being played.
    pub fn start_round_with_deck(
        &mut self,
        dealer: PlayerPosition,
        deck: &Deck,
    ) -> Result<ActionTicket, ActionError> {
        self.ensure_round_closed()?;
        self.dealer = dealer;
        self.round_number += 1;
        self.generation += 1;
        self.current_round.start(dealer, deck);
        info!(
            target: "batak_core::match",
            round = self.round_number,
            generation = self.generation,
            %dealer,
            "dealt round"
        );
        Ok(self.ticket())
    }

    fn ensure_round_closed(&self) -> Result<(), ActionError> {
        if self.current_round.phase().is_active() {
            Err(ActionError::RoundInProgress)
        } else {
            Ok(())
        }
    }

    /// Applies `action` if `ticket` still names the current round. A finished
    /// round folds its score into the match totals.
    pub fn submit(
        &mut self,
        ticket: ActionTicket,
        action: Action,
    ) -> Result<ActionOutcome, ActionError> {
        if ticket.generation != self.generation {
            warn!(
                target: "batak_core::match",
                ticket = ticket.generation,
                current = self.generation,
                action = action.name(),
                "discarding stale action"
            );
            return Err(ActionError::StaleRound {
                ticket: ticket.generation,
                current: self.generation,
            });
        }

        let outcome = self.current_round.apply(action)?;
        if let ActionOutcome::RoundFinished { summary } = &outcome {
            self.scores.apply_round(&summary.score());
            self.history.push(*summary);
            info!(
                target: "batak_core::match",
                us = self.scores.score(Team::Us),
                them = self.scores.score(Team::Them),
                "match totals updated"
            );
        }
        Ok(outcome)
    }
}
