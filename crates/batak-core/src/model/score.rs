use crate::model::bid::{Contract, SWEEP_BID};
use crate::model::player::{PlayerPosition, Team};
use core::fmt;
use serde::{Deserialize, Serialize};

pub const SWEEP_MADE_POINTS: i32 = 150;
pub const SWEEP_CONCEDED_POINTS: i32 = -100;
pub const TRICKS_PER_ROUND: u8 = 13;

/// Running match totals for both partnerships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    us: i32,
    them: i32,
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { us: 0, them: 0 }
    }

    pub fn score(&self, team: Team) -> i32 {
        match team {
            Team::Us => self.us,
            Team::Them => self.them,
        }
    }

    pub fn apply_round(&mut self, round: &RoundScore) {
        self.us += round.us;
        self.them += round.them;
    }

    pub fn leading_team(&self) -> Option<Team> {
        match self.us.cmp(&self.them) {
            core::cmp::Ordering::Greater => Some(Team::Us),
            core::cmp::Ordering::Less => Some(Team::Them),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// How a round stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "team")]
pub enum RoundEnding {
    /// Every trick was played.
    Completed,
    /// A sweep contract lost a trick.
    SweepBroken,
    Surrendered(Team),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundResult {
    BidMade,
    BidSet,
    SweepMade,
    SweepFailed,
    Surrendered { team: Team },
}

impl RoundResult {
    pub fn label(self) -> &'static str {
        match self {
            RoundResult::BidMade => "bid made",
            RoundResult::BidSet => "bid set",
            RoundResult::SweepMade => "sweep made",
            RoundResult::SweepFailed => "sweep failed",
            RoundResult::Surrendered { .. } => "surrendered",
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundResult::Surrendered { team } => write!(f, "{team} surrendered"),
            other => f.write_str(other.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub us: i32,
    pub them: i32,
    pub result: RoundResult,
}

impl RoundScore {
    fn from_teams(bidder: Team, bidder_points: i32, other_points: i32, result: RoundResult) -> Self {
        let (us, them) = match bidder {
            Team::Us => (bidder_points, other_points),
            Team::Them => (other_points, bidder_points),
        };
        Self { us, them, result }
    }
}

pub fn team_tricks(tricks: &[u8; 4], team: Team) -> u8 {
    team.members()
        .iter()
        .map(|seat: &PlayerPosition| tricks[seat.index()])
        .sum()
}

/// Applies the scoring table to a finished round.
pub fn score_round(contract: Contract, tricks: &[u8; 4], ending: RoundEnding) -> RoundScore {
    let bidder = contract.owner.team();
    let bid = i32::from(contract.value);

    if let RoundEnding::Surrendered(team) = ending {
        let result = RoundResult::Surrendered { team };
        return if team == bidder {
            RoundScore::from_teams(bidder, -bid, i32::from(SWEEP_BID) - bid, result)
        } else {
            RoundScore::from_teams(bidder, i32::from(SWEEP_BID) - bid, -bid, result)
        };
    }

    let bidder_tricks = team_tricks(tricks, bidder);
    let other_tricks = team_tricks(tricks, bidder.opponent());

    if contract.is_sweep() {
        if ending == RoundEnding::Completed && bidder_tricks == TRICKS_PER_ROUND {
            return RoundScore::from_teams(
                bidder,
                SWEEP_MADE_POINTS,
                SWEEP_CONCEDED_POINTS,
                RoundResult::SweepMade,
            );
        }
        // A failed sweep voids the round for both sides.
        return RoundScore::from_teams(bidder, 0, 0, RoundResult::SweepFailed);
    }

    let other_points = if other_tricks == 0 {
        -bid
    } else {
        i32::from(other_tricks)
    };

    if i32::from(bidder_tricks) >= bid {
        RoundScore::from_teams(
            bidder,
            i32::from(bidder_tricks),
            other_points,
            RoundResult::BidMade,
        )
    } else {
        RoundScore::from_teams(bidder, -bid, other_points, RoundResult::BidSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tricks(south: u8, west: u8, north: u8, east: u8) -> [u8; 4] {
        [south, west, north, east]
    }

    #[test]
    fn bid_met_scores_tricks_taken() {
        let contract = Contract::new(PlayerPosition::South, 8);
        let score = score_round(contract, &tricks(5, 2, 4, 2), RoundEnding::Completed);
        assert_eq!(score.us, 9);
        assert_eq!(score.them, 4);
        assert_eq!(score.result, RoundResult::BidMade);
    }

    #[test]
    fn bid_missed_costs_the_bid() {
        let contract = Contract::new(PlayerPosition::West, 10);
        let score = score_round(contract, &tricks(3, 4, 2, 4), RoundEnding::Completed);
        assert_eq!(score.them, -10);
        assert_eq!(score.us, 5);
        assert_eq!(score.result, RoundResult::BidSet);
    }

    #[test]
    fn zero_tricks_charges_the_other_team_the_bid() {
        let contract = Contract::new(PlayerPosition::North, 9);
        let score = score_round(contract, &tricks(6, 0, 7, 0), RoundEnding::Completed);
        assert_eq!(score.us, 13);
        assert_eq!(score.them, -9);

        let contract = Contract::new(PlayerPosition::North, 9);
        let exact = [9, 0, 0, 0];
        let score = score_round(contract, &exact, RoundEnding::Completed);
        assert_eq!(score.us, 9);
        assert_eq!(score.them, -9);
    }

    #[test]
    fn sweep_made_pays_150() {
        let contract = Contract::new(PlayerPosition::East, SWEEP_BID);
        let score = score_round(contract, &tricks(0, 6, 0, 7), RoundEnding::Completed);
        assert_eq!(score.them, 150);
        assert_eq!(score.us, -100);
        assert_eq!(score.result, RoundResult::SweepMade);
    }

    #[test]
    fn broken_sweep_voids_the_round() {
        let contract = Contract::new(PlayerPosition::South, SWEEP_BID);
        let score = score_round(contract, &tricks(3, 1, 2, 0), RoundEnding::SweepBroken);
        assert_eq!((score.us, score.them), (0, 0));
        assert_eq!(score.result, RoundResult::SweepFailed);
    }

    #[test]
    fn surrender_rows() {
        let contract = Contract::new(PlayerPosition::South, 10);
        let by_bidder = score_round(contract, &[0; 4], RoundEnding::Surrendered(Team::Us));
        assert_eq!((by_bidder.us, by_bidder.them), (-10, 4));

        let by_other = score_round(contract, &[0; 4], RoundEnding::Surrendered(Team::Them));
        assert_eq!((by_other.us, by_other.them), (4, -10));
    }

    #[test]
    fn scoreboard_accumulates_signed_totals() {
        let mut board = ScoreBoard::new();
        board.apply_round(&RoundScore {
            us: -9,
            them: 4,
            result: RoundResult::BidSet,
        });
        board.apply_round(&RoundScore {
            us: 11,
            them: 2,
            result: RoundResult::BidMade,
        });
        assert_eq!(board.score(Team::Us), 2);
        assert_eq!(board.score(Team::Them), 6);
        assert_eq!(board.leading_team(), Some(Team::Them));
    }
}
