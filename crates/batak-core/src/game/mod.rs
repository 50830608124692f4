pub mod action;
pub mod match_state;
pub mod round;
pub mod summary;
