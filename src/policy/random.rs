//! Uniform random opponent.

use crate::core::{Action, GameRng, GameState, Seat};
use crate::rules::RulesEngine;

use super::OpponentPolicy;

/// Selects uniformly from legal actions.
#[derive(Clone, Debug, Default)]
pub struct RandomOpponent;

impl<E: RulesEngine> OpponentPolicy<E> for RandomOpponent {
    fn choose_action(
        &self,
        engine: &E,
        state: &GameState,
        seat: Seat,
        rng: &mut GameRng,
    ) -> Option<Action> {
        if state.acting_seat() != seat {
            return None;
        }
        let actions = engine.legal_actions(state);
        rng.choose(&actions).cloned()
    }
}
