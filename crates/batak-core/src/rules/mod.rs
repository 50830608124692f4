mod validator;

pub use validator::{MoveRejection, is_legal, legal_moves, validate};
