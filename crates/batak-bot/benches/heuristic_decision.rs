use batak_bot::{BidPlanner, BotFeatures, BotParams, HeuristicPolicy, next_action};
use batak_core::game::round::{RoundPhase, RoundState};
use batak_core::model::deck::Deck;
use batak_core::model::player::PlayerPosition;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

fn round_in_play(seed: u64) -> RoundState {
    let mut round = RoundState::new();
    round.start(PlayerPosition::East, &Deck::shuffled_with_seed(seed));
    let mut policy = HeuristicPolicy::default();
    while round.phase() != RoundPhase::Playing {
        let Some(action) = next_action(&mut policy, &round, BotFeatures::default()) else {
            break;
        };
        if round.apply(action).is_err() {
            break;
        }
    }
    round
}

fn bench_bid_evaluation(c: &mut Criterion) {
    let params = BotParams::default();
    let hands: Vec<_> = [42u64, 12345, 8675309]
        .iter()
        .map(|&seed| Deck::shuffled_with_seed(seed).deal())
        .collect();

    c.bench_function("evaluate_bid", |b| {
        b.iter(|| {
            for deal in &hands {
                for hand in deal {
                    black_box(BidPlanner::evaluate(hand.cards(), &params));
                }
            }
        })
    });
}

fn bench_full_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristic_round");
    for seed in [42u64, 12345, 8675309] {
        group.bench_function(format!("play_out_seed{seed}"), |b| {
            b.iter_batched(
                || round_in_play(seed),
                |mut round| {
                    let mut policy = HeuristicPolicy::default();
                    while let Some(action) =
                        next_action(&mut policy, &round, BotFeatures::default())
                    {
                        if round.apply(action).is_err() {
                            break;
                        }
                    }
                    round
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bid_evaluation, bench_full_round);
criterion_main!(benches);
