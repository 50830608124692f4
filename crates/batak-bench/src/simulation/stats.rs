use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use batak_core::game::summary::RoundSummary;
use batak_core::model::player::Team;
use batak_core::model::score::RoundResult;
use batak_core::model::suit::Suit;
use thiserror::Error;

/// Aggregates finished rounds into the Markdown run summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    rounds: usize,
    bid_made: usize,
    bid_set: usize,
    sweep_made: usize,
    sweep_failed: usize,
    surrendered: usize,
    contracts: [TeamContracts; 2],
    trumps: [usize; 4],
    bid_total: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TeamContracts {
    won: usize,
    made: usize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn record(&mut self, summary: &RoundSummary) {
        self.rounds += 1;
        self.bid_total += u64::from(summary.bid);

        let contracts = &mut self.contracts[team_slot(summary.bidder_team())];
        contracts.won += 1;
        match summary.result {
            RoundResult::BidMade => {
                self.bid_made += 1;
                contracts.made += 1;
            }
            RoundResult::BidSet => self.bid_set += 1,
            RoundResult::SweepMade => {
                self.sweep_made += 1;
                contracts.made += 1;
            }
            RoundResult::SweepFailed => self.sweep_failed += 1,
            RoundResult::Surrendered { .. } => self.surrendered += 1,
        }

        if let Some(trump) = summary.trump {
            self.trumps[trump.index()] += 1;
        }
    }

    pub fn average_bid(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.bid_total as f64 / self.rounds as f64
        }
    }

    pub fn render_markdown(&self, run_id: &str, match_seed: u64, scores: (i32, i32)) -> String {
        let mut out = String::new();
        out.push_str("# Simulation Summary\n\n");
        let _ = writeln!(out, "Run `{run_id}`, match seed {match_seed}, {} rounds.\n", self.rounds);
        let _ = writeln!(out, "Average winning bid: {:.2}\n", self.average_bid());

        out.push_str("| Team | Final score | Contracts won | Contracts made |\n");
        out.push_str("|------|-------------|---------------|----------------|\n");
        for (team, score) in [(Team::Us, scores.0), (Team::Them, scores.1)] {
            let contracts = self.contracts[team_slot(team)];
            let _ = writeln!(
                out,
                "| {team} | {score} | {} | {} |",
                contracts.won, contracts.made
            );
        }

        out.push_str("\n| Result | Rounds | Share |\n");
        out.push_str("|--------|--------|-------|\n");
        for (label, count) in [
            ("bid made", self.bid_made),
            ("bid set", self.bid_set),
            ("sweep made", self.sweep_made),
            ("sweep failed", self.sweep_failed),
            ("surrendered", self.surrendered),
        ] {
            let _ = writeln!(out, "| {label} | {count} | {:.1}% |", self.share(count));
        }

        out.push_str("\n| Trump | Rounds |\n");
        out.push_str("|-------|--------|\n");
        for suit in Suit::ALL {
            let _ = writeln!(out, "| {suit:?} | {} |", self.trumps[suit.index()]);
        }
        out
    }

    pub fn write_markdown(
        &self,
        path: impl AsRef<Path>,
        run_id: &str,
        match_seed: u64,
        scores: (i32, i32),
    ) -> Result<(), StatsError> {
        fs::write(path.as_ref(), self.render_markdown(run_id, match_seed, scores)).map_err(
            |source| StatsError::Io {
                context: "writing summary markdown",
                source,
            },
        )
    }

    fn share(&self, count: usize) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.rounds as f64
        }
    }
}

fn team_slot(team: Team) -> usize {
    match team {
        Team::Us => 0,
        Team::Them => 1,
    }
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}
