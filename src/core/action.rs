//! Action descriptors.
//!
//! An `Action` is everything a caller (a human's UI or an opponent policy)
//! needs to tell the engine what to do next: the verb plus the card and
//! target it refers to. Cards are referenced by `CardId`; attached Knights
//! are addressable the same way as any other field card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Seat;
use crate::cards::CardId;

/// What a one-off (or a pending target selection) points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// A card on either field, including a Knight attached to a point card.
    Field(CardId),
    /// A card in the scrap pile.
    Scrap(CardId),
}

impl Target {
    #[must_use]
    pub fn card_id(self) -> CardId {
        match self {
            Target::Field(id) | Target::Scrap(id) => id,
        }
    }
}

/// Response to the rank-7 reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SevenChoice {
    /// Take one of the revealed cards into hand.
    Take(CardId),
    /// Put both revealed cards on the bottom of the deck.
    Decline,
}

/// A complete action.
///
/// ## Example
///
/// ```
/// use rust_cuttle::cards::{CardId, Faction, Rank};
/// use rust_cuttle::core::{Action, Target};
///
/// let ace = CardId::of(Rank::Ace, Faction::Elf);
/// let victim = CardId::of(Rank::Nine, Faction::Demon);
///
/// let action = Action::OneOff { card: ace, target: Some(Target::Field(victim)) };
/// assert_eq!(action.card(), Some(ace));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the top card of the deck and end the turn.
    Draw,
    /// End the turn without acting (only with an empty deck).
    Pass,
    /// Place a hand card on the field for points.
    PlayPoint { card: CardId },
    /// Place a hand card as a standing permanent (Mage, King, spy 8).
    PlayPermanent { card: CardId },
    /// Attach a Knight to an opposing point card.
    /// Without a target, enters target selection.
    PlayKnight { card: CardId, target: Option<CardId> },
    /// Attack an opposing point card with a hand card.
    /// Without a target, enters target selection.
    Scuttle { card: CardId, target: Option<CardId> },
    /// Activate a hand card's one-off effect.
    /// A targeted one-off without a target enters target selection.
    OneOff { card: CardId, target: Option<Target> },
    /// Supply the target for the pending selection.
    ResolveTarget { target: Target },
    /// Mark a hand card as selected (no rule effect).
    Select { card: CardId },
    /// Abandon the pending selection.
    Cancel,
    /// Discard in response to the rank-4 one-off.
    Discard { cards: SmallVec<[CardId; 2]> },
    /// Respond to the rank-7 reveal.
    Seven(SevenChoice),
}

impl Action {
    /// The hand card this action plays, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            Action::PlayPoint { card }
            | Action::PlayPermanent { card }
            | Action::PlayKnight { card, .. }
            | Action::Scuttle { card, .. }
            | Action::OneOff { card, .. }
            | Action::Select { card } => Some(*card),
            Action::Seven(SevenChoice::Take(card)) => Some(*card),
            _ => None,
        }
    }

    /// Create a discard action.
    #[must_use]
    pub fn discard(cards: &[CardId]) -> Self {
        Action::Discard {
            cards: SmallVec::from_slice(cards),
        }
    }

    /// Does this action only touch the interaction state (selection)?
    #[must_use]
    pub fn is_interaction_only(&self) -> bool {
        matches!(self, Action::Select { .. } | Action::Cancel)
    }
}

/// A recorded rule action with metadata for history tracking. Selection
/// moves (`Select`, `Cancel`) are not recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub seat: Seat,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(seat: Seat, action: Action, turn: u32) -> Self {
        Self { seat, action, turn }
    }
}
