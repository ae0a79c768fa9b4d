//! Rule violations.
//!
//! Every expected way an operation can be refused. These are values, not
//! panics: the engine hands the prior snapshot back together with the
//! violation, and the `Display` text becomes the status message.

use thiserror::Error;

use crate::cards::{Card, CardId};
use crate::core::Phase;

/// Why an operation was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    // === Structural ===

    #[error("the game is over")]
    GameOver,

    #[error("not allowed during {actual}")]
    WrongPhase { actual: Phase },

    #[error("the deck is empty")]
    DeckEmpty,

    #[error("cannot pass while the deck has cards")]
    DeckNotEmpty,

    #[error("{0} is not in hand")]
    NotInHand(CardId),

    #[error("{0} cannot be played as a point card")]
    NotAPointCard(Card),

    #[error("{0} cannot be played as a permanent")]
    NotAPermanent(Card),

    #[error("{0} has no one-off effect")]
    NoOneOff(Card),

    #[error("{0} is not a Knight")]
    NotAKnight(Card),

    #[error("{0} cannot attack")]
    CannotScuttle(Card),

    #[error("no card selected")]
    NothingSelected,

    // === Targeting ===

    #[error("invalid target")]
    InvalidTarget,

    #[error("target is protected by a Mage")]
    Protected,

    #[error("no legal target for {0}")]
    NoLegalTarget(Card),

    #[error("the attack is blocked")]
    ScuttleBlocked,

    // === Responses ===

    #[error("must discard exactly {expected} card(s), got {actual}")]
    DiscardCount { expected: usize, actual: usize },

    #[error("{0} was not revealed")]
    NotRevealed(CardId),
}

impl RuleViolation {
    /// Is this a targeting failure (the card stays selected and the player
    /// may pick another target)?
    #[must_use]
    pub fn is_targeting(&self) -> bool {
        matches!(
            self,
            RuleViolation::InvalidTarget
                | RuleViolation::Protected
                | RuleViolation::NoLegalTarget(_)
                | RuleViolation::ScuttleBlocked
        )
    }
}
