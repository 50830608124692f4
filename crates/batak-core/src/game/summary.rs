use crate::model::bid::Contract;
use crate::model::player::{PlayerPosition, Team};
use crate::model::score::{RoundResult, RoundScore, team_tricks};
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

/// Outcome record emitted once per finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub dealer: PlayerPosition,
    pub bidder: PlayerPosition,
    pub bid: u8,
    pub trump: Option<Suit>,
    pub result: RoundResult,
    pub us_score: i32,
    pub them_score: i32,
    /// Tricks taken per seat, indexed by `PlayerPosition::index`.
    pub tricks: [u8; 4],
}

impl RoundSummary {
    pub fn new(
        dealer: PlayerPosition,
        contract: Contract,
        trump: Option<Suit>,
        tricks: [u8; 4],
        score: RoundScore,
    ) -> Self {
        Self {
            dealer,
            bidder: contract.owner,
            bid: contract.value,
            trump,
            result: score.result,
            us_score: score.us,
            them_score: score.them,
            tricks,
        }
    }

    pub fn contract(&self) -> Contract {
        Contract::new(self.bidder, self.bid)
    }

    pub fn score(&self) -> RoundScore {
        RoundScore {
            us: self.us_score,
            them: self.them_score,
            result: self.result,
        }
    }

    pub fn bidder_team(&self) -> Team {
        self.bidder.team()
    }

    pub fn team_tricks(&self, team: Team) -> u8 {
        team_tricks(&self.tricks, team)
    }
}

#[cfg(test)]
mod tests {
    use super::RoundSummary;
    use crate::model::bid::Contract;
    use crate::model::player::{PlayerPosition, Team};
    use crate::model::score::{RoundEnding, RoundResult, score_round};
    use crate::model::suit::Suit;

    #[test]
    fn summary_carries_score_and_tricks() {
        let contract = Contract::new(PlayerPosition::East, 9);
        let tricks = [2, 5, 1, 5];
        let score = score_round(contract, &tricks, RoundEnding::Completed);
        let summary = RoundSummary::new(
            PlayerPosition::South,
            contract,
            Some(Suit::Hearts),
            tricks,
            score,
        );
        assert_eq!(summary.result, RoundResult::BidMade);
        assert_eq!(summary.them_score, 10);
        assert_eq!(summary.us_score, 3);
        assert_eq!(summary.team_tricks(Team::Them), 10);
        assert_eq!(summary.bidder_team(), Team::Them);
        assert_eq!(summary.contract(), contract);
    }

    #[test]
    fn summary_serializes_seats_and_trump() {
        let contract = Contract::new(PlayerPosition::North, 8);
        let tricks = [4, 2, 4, 3];
        let score = score_round(contract, &tricks, RoundEnding::Completed);
        let summary = RoundSummary::new(
            PlayerPosition::West,
            contract,
            Some(Suit::Spades),
            tricks,
            score,
        );
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["bidder"], "north");
        assert_eq!(json["trump"], "spades");
        assert_eq!(json["dealer"], "west");
        assert_eq!(json["result"], "bid_made");
        assert_eq!(json["us_score"], 8);
    }
}
