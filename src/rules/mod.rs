//! Rules engine trait, rule violations and win evaluation.
//!
//! The concrete rules live in `games::cuttle`; this module holds the
//! vocabulary every engine and policy shares.

pub mod engine;
pub mod error;
pub mod win;

pub use engine::{GameResult, Resolution, RulesEngine};
pub use error::RuleViolation;
pub use win::{find_winner, has_won, points_needed};
