mod stats;

pub use stats::{RunStats, StatsError};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use batak_bot::{BotFeatures, HeuristicPolicy, Policy, next_action};
use batak_core::game::action::ActionOutcome;
use batak_core::game::match_state::MatchState;
use batak_core::game::summary::RoundSummary;
use batak_core::model::player::{PlayerPosition, Team};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{BenchConfig, ResolvedOutputs};

/// Upper bound on actions in one round: 4 opening bids, at most one raise
/// per bid value, the trump call and 52 plays fit well inside it.
const MAX_ACTIONS_PER_ROUND: usize = 256;

/// Plays a seeded match of heuristic bots and records every round.
pub struct SimulationRunner {
    config: BenchConfig,
    outputs: ResolvedOutputs,
    logging_enabled: bool,
    bot_features: BotFeatures,
}

/// Summary details returned after a run.
pub struct RunSummary {
    pub rounds_played: usize,
    pub rows_written: usize,
    pub match_seed: u64,
    pub final_scores: (i32, i32),
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
    pub telemetry_path: Option<PathBuf>,
}

impl SimulationRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: BenchConfig, outputs: ResolvedOutputs) -> Self {
        let bot_features =
            BotFeatures::from_env().with_log_details(config.logging.bot_details);
        Self {
            logging_enabled: config.logging.enable_structured,
            config,
            outputs,
            bot_features,
        }
    }

    /// Execute the match, streaming one JSONL row per round to disk.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.deals.seed.unwrap_or(0));
        let match_seed = rng.next_u64();

        let mut game = MatchState::with_seed(self.config.deals.starting_dealer, match_seed);
        let mut seats = seat_policies();
        let mut stats = RunStats::new();
        let mut rows_written = 0usize;

        for round_index in 0..self.config.deals.rounds {
            let outcome = self.play_round(&mut game, &mut seats, round_index)?;
            stats.record(&outcome.summary);

            let row = RoundLogRow {
                run_id: &self.config.run_id,
                round_index,
                match_seed,
                summary: outcome.summary,
                us_total: game.scores().score(Team::Us),
                them_total: game.scores().score(Team::Them),
                decisions: outcome.decisions,
            };
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            rows_written += 1;
        }

        writer.flush()?;

        let final_scores = (game.scores().score(Team::Us), game.scores().score(Team::Them));
        stats.write_markdown(
            &self.outputs.summary_md,
            &self.config.run_id,
            match_seed,
            final_scores,
        )?;

        let telemetry_path = if self.logging_enabled {
            let dir = self
                .outputs
                .summary_md
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            Some(dir.join("telemetry.jsonl"))
        } else {
            None
        };

        Ok(RunSummary {
            rounds_played: self.config.deals.rounds,
            rows_written,
            match_seed,
            final_scores,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
            telemetry_path,
        })
    }

    fn play_round(
        &self,
        game: &mut MatchState,
        seats: &mut [Box<dyn Policy>; 4],
        round_index: usize,
    ) -> Result<RoundOutcome, RunnerError> {
        let ticket = game
            .start_next_round()
            .map_err(|err| RunnerError::game(err.to_string()))?;
        let mut decisions = [0u32; 4];

        for _ in 0..MAX_ACTIONS_PER_ROUND {
            let seat = game.round().turn();
            let policy = seats[seat.index()].as_mut();
            let action = next_action(policy, game.round(), self.bot_features)
                .ok_or(RunnerError::Stalled { round_index, seat })?;
            decisions[seat.index()] += 1;

            let outcome = game
                .submit(ticket, action)
                .map_err(|err| RunnerError::game(format!("{seat}: {err}")))?;

            if let ActionOutcome::RoundFinished { summary } = outcome {
                if self.logging_enabled && tracing::enabled!(Level::INFO) {
                    event!(
                        target: "batak_bench::round",
                        Level::INFO,
                        run_id = %self.config.run_id,
                        round_index = round_index as u64,
                        dealer = %summary.dealer,
                        bidder = %summary.bidder,
                        bid = summary.bid,
                        result = %summary.result,
                        us_score = summary.us_score,
                        them_score = summary.them_score,
                    );
                }
                return Ok(RoundOutcome { summary, decisions });
            }
        }

        Err(RunnerError::Stalled {
            round_index,
            seat: game.round().turn(),
        })
    }
}

fn seat_policies() -> [Box<dyn Policy>; 4] {
    PlayerPosition::LOOP.map(|_| Box::new(HeuristicPolicy::default()) as Box<dyn Policy>)
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

struct RoundOutcome {
    summary: RoundSummary,
    decisions: [u32; 4],
}

#[derive(Serialize)]
struct RoundLogRow<'a> {
    run_id: &'a str,
    round_index: usize,
    match_seed: u64,
    #[serde(flatten)]
    summary: RoundSummary,
    us_total: i32,
    them_total: i32,
    /// Decisions per seat, indexed by `PlayerPosition::index`.
    decisions: [u32; 4],
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize log row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("game execution failed: {message}")]
    Game { message: String },
    #[error("round {round_index} stalled waiting on {seat}")]
    Stalled {
        round_index: usize,
        seat: PlayerPosition,
    },
    #[error("summary error: {0}")]
    Stats(#[from] StatsError),
}

impl RunnerError {
    fn game(message: String) -> Self {
        RunnerError::Game { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DealConfig, LoggingConfig, OutputsConfig};
    use std::io::{BufRead, BufReader};
    use tempfile::tempdir;

    fn config_in(dir: &Path, rounds: usize) -> BenchConfig {
        BenchConfig {
            run_id: "unit".to_string(),
            deals: DealConfig {
                seed: Some(99),
                rounds,
                starting_dealer: PlayerPosition::North,
            },
            outputs: OutputsConfig {
                jsonl: dir.join("{run_id}/rounds.jsonl").display().to_string(),
                summary_md: dir.join("{run_id}/summary.md").display().to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn rows_carry_running_totals() {
        let dir = tempdir().expect("tempdir");
        let config = config_in(dir.path(), 6);
        let outputs = config.resolved_outputs();
        let summary = SimulationRunner::new(config, outputs.clone())
            .run()
            .expect("run");
        assert_eq!(summary.rows_written, 6);
        assert!(summary.telemetry_path.is_none());

        let file = File::open(&outputs.jsonl).expect("open jsonl");
        let mut totals = (0i64, 0i64);
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let row: serde_json::Value = serde_json::from_str(&line.expect("line")).unwrap();
            assert_eq!(row["round_index"].as_u64(), Some(index as u64));
            totals.0 += row["us_score"].as_i64().unwrap();
            totals.1 += row["them_score"].as_i64().unwrap();
            assert_eq!(row["us_total"].as_i64(), Some(totals.0));
            assert_eq!(row["them_total"].as_i64(), Some(totals.1));
        }
        assert_eq!(
            summary.final_scores,
            (totals.0 as i32, totals.1 as i32)
        );
    }

    #[test]
    fn first_row_names_configured_dealer() {
        let dir = tempdir().expect("tempdir");
        let config = config_in(dir.path(), 1);
        let outputs = config.resolved_outputs();
        SimulationRunner::new(config, outputs.clone())
            .run()
            .expect("run");
        let text = fs::read_to_string(&outputs.jsonl).expect("read");
        let row: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(row["dealer"], "north");
        assert_eq!(row["run_id"], "unit");
    }
}
