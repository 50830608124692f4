use batak_core::model::rank::Rank;

/// Weights used by the bid evaluator and the lead heuristics.
#[derive(Debug, Clone, PartialEq)]
pub struct BotParams {
    pub ace_points: f64,
    pub king_points: f64,
    pub queen_points: f64,
    /// Added for every card of the candidate trump suit, honour or not.
    pub trump_card_bonus: f64,
    /// Suit length beyond which every extra card counts one point.
    pub long_suit_base: usize,
    pub partner_threshold: f64,
    pub partner_bonus: f64,
    /// Bait leads against the dummy use cards strictly below this rank.
    pub bait_rank_ceiling: Rank,
}

impl BotParams {
    pub fn honor_points(&self, rank: Rank) -> f64 {
        match rank {
            Rank::Ace => self.ace_points,
            Rank::King => self.king_points,
            Rank::Queen => self.queen_points,
            _ => 0.0,
        }
    }
}

impl Default for BotParams {
    fn default() -> Self {
        Self {
            ace_points: 1.0,
            king_points: 0.8,
            queen_points: 0.5,
            trump_card_bonus: 0.2,
            long_suit_base: 3,
            partner_threshold: 4.0,
            partner_bonus: 2.2,
            bait_rank_ceiling: Rank::Ten,
        }
    }
}
