pub mod board;
pub mod rules;
pub mod state;

pub use board::{Board, Cell, Mark};
pub use rules::{check_draw, check_winner};
pub use state::{Game, Outcome, Phase};
