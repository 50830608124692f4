use batak_core::game::action::{Action, ActionOutcome};
use batak_core::game::match_state::MatchState;
use batak_core::game::round::{RoundPhase, RoundState};
use batak_core::model::bid::{BidCall, Contract, FORCED_BID, MAX_BID, MIN_BID};
use batak_core::model::deck::Deck;
use batak_core::model::hand::Hand;
use batak_core::model::player::{PlayerPosition, Team};
use batak_core::model::score::RoundResult;
use batak_core::model::suit::Suit;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn play_out(game: &mut MatchState) -> ActionOutcome {
    let ticket = game.ticket();
    loop {
        let seat = game.round().turn();
        let card = game.round().legal_moves(seat)[0];
        let outcome = game
            .submit(ticket, Action::Play { seat, card })
            .expect("first legal card is accepted");
        if let ActionOutcome::RoundFinished { .. } = outcome {
            return outcome;
        }
        let round = game.round();
        let in_hands: usize = round.hands().iter().map(Hand::len).sum();
        assert_eq!(in_hands + round.memory().len(), 52);
    }
}

#[test]
fn all_pass_forces_dealer_to_seven() {
    let mut round = RoundState::new();
    round.start(PlayerPosition::West, &Deck::shuffled_with_seed(99));
    // West deals; South opens and the fourth pass is never reached.
    round.submit_bid(PlayerPosition::South, BidCall::Pass).unwrap();
    round.submit_bid(PlayerPosition::East, BidCall::Pass).unwrap();
    let outcome = round.submit_bid(PlayerPosition::North, BidCall::Pass).unwrap();
    assert_eq!(
        outcome,
        ActionOutcome::ContractSettled {
            contract: Contract::new(PlayerPosition::West, FORCED_BID)
        }
    );
    assert_eq!(round.phase(), RoundPhase::TrumpSelection);
    assert_eq!(round.turn(), PlayerPosition::West);
}

#[test]
fn random_bidding_never_lowers_the_bid() {
    let mut rng = StdRng::seed_from_u64(31);
    for seed in 0..200u64 {
        let mut round = RoundState::new();
        round.start(PlayerPosition::East, &Deck::shuffled_with_seed(seed));
        let mut last = 0u8;
        while round.phase() == RoundPhase::Bidding {
            let seat = round.turn();
            let current = round.contract().map_or(0, |c| c.value);
            let call = match rng.gen_range(0..10) {
                0..=4 => BidCall::Pass,
                9 => BidCall::Sweep,
                _ if current < MAX_BID => {
                    BidCall::Raise(rng.gen_range(current.max(MIN_BID - 1) + 1..=MAX_BID))
                }
                _ => BidCall::Pass,
            };
            round.submit_bid(seat, call).unwrap();
            if let Some(contract) = round.contract() {
                if !contract.is_forced() {
                    assert!(contract.value >= last);
                }
                last = contract.value;
            }
        }
        assert_eq!(round.phase(), RoundPhase::TrumpSelection);
        assert!(round.active_bidder_count() <= 1 || round.contract().unwrap().is_sweep());
    }
}

#[test]
fn full_round_conserves_cards_and_tricks() {
    let mut game = MatchState::with_seed(PlayerPosition::East, 2025);
    let ticket = game.start_next_round().unwrap();
    let opener = game.round().turn();
    game.submit(
        ticket,
        Action::Bid {
            seat: opener,
            call: BidCall::Raise(8),
        },
    )
    .unwrap();
    for _ in 0..3 {
        let seat = game.round().turn();
        game.submit(
            ticket,
            Action::Bid {
                seat,
                call: BidCall::Pass,
            },
        )
        .unwrap();
    }
    game.submit(
        ticket,
        Action::SelectTrump {
            seat: opener,
            suit: Suit::Hearts,
        },
    )
    .unwrap();
    assert_eq!(game.round().dummy_seat(), Some(opener.partner()));

    let outcome = play_out(&mut game);
    let summary = *outcome.finished_summary().unwrap();
    assert_eq!(summary.tricks.iter().map(|&t| u32::from(t)).sum::<u32>(), 13);
    assert_eq!(game.round().completed_tricks().len(), 13);
    assert_eq!(game.round().memory().len(), 52);
    assert!(matches!(
        summary.result,
        RoundResult::BidMade | RoundResult::BidSet
    ));
    assert_eq!(game.scores().score(Team::Us), summary.us_score);
    assert_eq!(game.scores().score(Team::Them), summary.them_score);
}

#[test]
fn memory_resets_between_rounds() {
    let mut game = MatchState::with_seed(PlayerPosition::South, 8);
    let ticket = game.start_next_round().unwrap();
    let opener = game.round().turn();
    game.submit(
        ticket,
        Action::Bid {
            seat: opener,
            call: BidCall::Sweep,
        },
    )
    .unwrap();
    game.submit(
        ticket,
        Action::SelectTrump {
            seat: opener,
            suit: Suit::Diamonds,
        },
    )
    .unwrap();
    let card = game.round().legal_moves(opener)[0];
    game.submit(ticket, Action::Play { seat: opener, card })
        .unwrap();
    assert_eq!(game.round().memory().len(), 1);
    game.submit(ticket, Action::Surrender { seat: opener }).unwrap();

    game.start_next_round().unwrap();
    assert!(game.round().memory().is_empty());
    assert_eq!(game.round().tricks_won(), [0; 4]);
    assert_eq!(game.round().contract(), None);
    assert_eq!(game.round().trump(), None);
}

#[test]
fn made_sweep_pays_out() {
    // The unshuffled deck hands South all thirteen spades.
    let deck = Deck::standard();
    assert!(
        deck.deal()[PlayerPosition::South.index()]
            .iter()
            .all(|card| card.suit == Suit::Spades)
    );

    let mut game = MatchState::with_seed(PlayerPosition::East, 1);
    let ticket = game
        .start_round_with_deck(PlayerPosition::East, &deck)
        .unwrap();
    assert_eq!(game.round().turn(), PlayerPosition::North);
    game.submit(
        ticket,
        Action::Bid {
            seat: PlayerPosition::North,
            call: BidCall::Pass,
        },
    )
    .unwrap();
    game.submit(
        ticket,
        Action::Bid {
            seat: PlayerPosition::West,
            call: BidCall::Pass,
        },
    )
    .unwrap();
    game.submit(
        ticket,
        Action::Bid {
            seat: PlayerPosition::South,
            call: BidCall::Sweep,
        },
    )
    .unwrap();
    game.submit(
        ticket,
        Action::SelectTrump {
            seat: PlayerPosition::South,
            suit: Suit::Spades,
        },
    )
    .unwrap();

    let outcome = play_out(&mut game);
    let summary = outcome.finished_summary().unwrap();
    assert_eq!(summary.result, RoundResult::SweepMade);
    assert_eq!((summary.us_score, summary.them_score), (150, -100));
}
