pub mod bot;
pub mod policy;

pub use bot::{
    BidEvaluation, BidPlanner, BotContext, BotFeatures, BotParams, PlayDecision, PlayPlanner,
    PlayReason,
};
pub use policy::{HeuristicPolicy, Policy, PolicyContext, next_action};
