//! Rules engine trait.
//!
//! Games implement `RulesEngine` to define:
//! - What actions are legal
//! - How an action turns one snapshot into the next
//! - When the match is over
//!
//! `apply` never mutates its input. It returns a `Resolution`: the next
//! snapshot, or the prior snapshot with a status message when the action
//! was refused.

use crate::core::{Action, GameConfig, GameState, Seat};

use super::error::RuleViolation;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(Seat),
    /// Ended by consecutive passes.
    Draw,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }
}

/// Outcome of applying one action.
#[derive(Clone, Debug)]
pub struct Resolution {
    /// The new snapshot. On refusal, the prior board with the refusal
    /// message.
    pub state: GameState,
    pub violation: Option<RuleViolation>,
}

impl Resolution {
    #[must_use]
    pub fn applied(state: GameState) -> Self {
        Self {
            state,
            violation: None,
        }
    }

    /// Hand back `prior` with the violation as its status message.
    #[must_use]
    pub fn rejected(prior: &GameState, violation: RuleViolation) -> Self {
        let mut state = prior.clone();
        state.set_message(violation.to_string());
        Self {
            state,
            violation: Some(violation),
        }
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.violation.is_none()
    }

    /// The status message to display.
    #[must_use]
    pub fn message(&self) -> &str {
        self.state.message()
    }

    /// Unwrap into the state, whatever happened.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Convert into a `Result` for `?` chains.
    pub fn into_result(self) -> Result<GameState, RuleViolation> {
        match self.violation {
            None => Ok(self.state),
            Some(violation) => Err(violation),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty once the game is over
/// - `apply`: deterministic; a pure function of its inputs
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Every complete action the acting seat may take.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action for the acting seat.
    fn apply(&self, state: &GameState, action: &Action) -> Resolution;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}
