//! Win evaluation.
//!
//! A seat wins as soon as the points it controls reach the target set by
//! the number of Kings it controls. Both seats are checked after every
//! applied action, the acting seat first.

use crate::core::{GameConfig, GameState, Seat};

/// Has `seat` reached its target?
#[must_use]
pub fn has_won(state: &GameState, config: &GameConfig, seat: Seat) -> bool {
    state.points(seat) >= config.win_target(state.king_count(seat))
}

/// Points `seat` still needs.
#[must_use]
pub fn points_needed(state: &GameState, config: &GameConfig, seat: Seat) -> u32 {
    config
        .win_target(state.king_count(seat))
        .saturating_sub(state.points(seat))
}

/// The winning seat, checking `first` before its opponent.
#[must_use]
pub fn find_winner(state: &GameState, config: &GameConfig, first: Seat) -> Option<Seat> {
    [first, first.opponent()]
        .into_iter()
        .find(|&seat| has_won(state, config, seat))
}
