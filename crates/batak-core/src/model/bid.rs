use crate::model::player::PlayerPosition;
use core::fmt;
use serde::{Deserialize, Serialize};

pub const MIN_BID: u8 = 8;
pub const MAX_BID: u8 = 13;
/// Contract to take all thirteen tricks.
pub const SWEEP_BID: u8 = 14;
/// Value assigned to the dealer when nobody raises.
pub const FORCED_BID: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "call", content = "value")]
pub enum BidCall {
    Pass,
    Raise(u8),
    Sweep,
}

impl BidCall {
    pub const fn value(self) -> Option<u8> {
        match self {
            BidCall::Pass => None,
            BidCall::Raise(value) => Some(value),
            BidCall::Sweep => Some(SWEEP_BID),
        }
    }
}

impl fmt::Display for BidCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidCall::Pass => f.write_str("pass"),
            BidCall::Raise(value) => write!(f, "{value}"),
            BidCall::Sweep => f.write_str("sweep"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub owner: PlayerPosition,
    pub value: u8,
}

impl Contract {
    pub const fn new(owner: PlayerPosition, value: u8) -> Self {
        Self { owner, value }
    }

    pub const fn is_sweep(self) -> bool {
        self.value == SWEEP_BID
    }

    pub const fn is_forced(self) -> bool {
        self.value == FORCED_BID
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sweep() {
            write!(f, "{} sweep", self.owner)
        } else {
            write!(f, "{} {}", self.owner, self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BidCall, Contract, SWEEP_BID};
    use crate::model::player::PlayerPosition;

    #[test]
    fn call_values() {
        assert_eq!(BidCall::Pass.value(), None);
        assert_eq!(BidCall::Raise(9).value(), Some(9));
        assert_eq!(BidCall::Sweep.value(), Some(SWEEP_BID));
    }

    #[test]
    fn call_serializes_with_tag() {
        let json = serde_json::to_string(&BidCall::Raise(10)).unwrap();
        assert_eq!(json, r#"{"call":"raise","value":10}"#);
        let pass: BidCall = serde_json::from_str(r#"{"call":"pass"}"#).unwrap();
        assert_eq!(pass, BidCall::Pass);
    }

    #[test]
    fn contract_flags() {
        assert!(Contract::new(PlayerPosition::East, 14).is_sweep());
        assert!(Contract::new(PlayerPosition::East, 7).is_forced());
        assert_eq!(Contract::new(PlayerPosition::West, 9).to_string(), "West 9");
    }
}
