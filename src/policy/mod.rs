//! Opponent policies.
//!
//! - `OpponentPolicy`: how a non-human seat picks its next action
//! - `HeuristicOpponent`: ordered priority rules over the current snapshot
//! - `RandomOpponent`: uniform over legal actions
//! - `choose_discards`: the forced-discard pick shared by policies

mod config;
mod discard;
mod heuristic;
mod random;

pub use config::HeuristicConfig;
pub use discard::choose_discards;
pub use heuristic::HeuristicOpponent;
pub use random::RandomOpponent;

use crate::core::{Action, GameRng, GameState, Seat};
use crate::rules::RulesEngine;

/// Policy for a non-human seat.
pub trait OpponentPolicy<E: RulesEngine>: Send + Sync {
    /// Choose an action for `seat`.
    ///
    /// Returns `None` if `seat` is not the one the engine is waiting for,
    /// or the game is over.
    fn choose_action(
        &self,
        engine: &E,
        state: &GameState,
        seat: Seat,
        rng: &mut GameRng,
    ) -> Option<Action>;
}
