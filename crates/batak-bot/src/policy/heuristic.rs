use super::{Policy, PolicyContext};
use crate::bot::{BidEvaluation, BidPlanner, BotContext, BotParams, PlayDecision, PlayPlanner};
use batak_core::model::bid::BidCall;
use batak_core::model::card::Card;
use batak_core::model::suit::Suit;
use batak_core::rules;
use tracing::{Level, event};

/// Rule-based bidding, trump choice and card play.
pub struct HeuristicPolicy {
    params: BotParams,
}

impl HeuristicPolicy {
    pub fn new(params: BotParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BotParams {
        &self.params
    }

    fn evaluate(&self, ctx: &PolicyContext) -> BidEvaluation {
        BidPlanner::evaluate(ctx.round.hand(ctx.seat).cards(), &self.params)
    }
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self::new(BotParams::default())
    }
}

impl Policy for HeuristicPolicy {
    fn choose_bid(&mut self, ctx: &PolicyContext) -> BidCall {
        let evaluation = self.evaluate(ctx);
        let call = evaluation.respond(ctx.round.contract());
        log_bid_decision(ctx, &evaluation, call);
        call
    }

    fn choose_trump(&mut self, ctx: &PolicyContext) -> Suit {
        let evaluation = self.evaluate(ctx);
        event!(
            target: "batak_bot::bid",
            Level::INFO,
            seat = %ctx.seat,
            trump = %evaluation.preferred_suit,
            score = evaluation.score,
            "trump chosen"
        );
        evaluation.preferred_suit
    }

    fn choose_play(&mut self, ctx: &PolicyContext) -> Card {
        let bot_ctx = BotContext::from_round(ctx.seat, ctx.round, &self.params, ctx.features)
            .expect("trump is named before play");
        let legal = rules::legal_moves(bot_ctx.hand, bot_ctx.plays, bot_ctx.trump);
        let decision = PlayPlanner::choose_from(&legal, &bot_ctx)
            .expect("heuristic policy expected a card in hand");
        log_play_decision(ctx, &legal, decision);
        decision.card
    }
}

fn log_bid_decision(ctx: &PolicyContext, evaluation: &BidEvaluation, call: BidCall) {
    if !tracing::enabled!(target: "batak_bot::bid", Level::INFO) {
        return;
    }

    let current = ctx.round.contract().map_or(0, |contract| contract.value);
    if ctx.features.log_details_enabled() {
        let hand = ctx
            .round
            .hand(ctx.seat)
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(",");
        event!(
            target: "batak_bot::bid",
            Level::INFO,
            seat = %ctx.seat,
            evaluated = %evaluation.call,
            preferred = %evaluation.preferred_suit,
            score = evaluation.score,
            current,
            call = %call,
            hand = %hand,
        );
    } else {
        event!(
            target: "batak_bot::bid",
            Level::INFO,
            seat = %ctx.seat,
            evaluated = %evaluation.call,
            current,
            call = %call,
        );
    }
}

fn log_play_decision(ctx: &PolicyContext, legal: &[Card], decision: PlayDecision) {
    if !tracing::enabled!(target: "batak_bot::play", Level::INFO) {
        return;
    }

    let legal_preview = if ctx.features.log_details_enabled() || legal.len() <= 6 {
        legal
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(",")
    } else {
        format!("{} moves", legal.len())
    };

    event!(
        target: "batak_bot::play",
        Level::INFO,
        seat = %ctx.seat,
        legal_count = legal.len(),
        legal_moves = %legal_preview,
        chosen = %decision.card,
        trick_cards = ctx.round.current_trick().plays().len(),
        reason = decision.reason.as_str(),
    );
}
