//! Card location census.
//!
//! A `Census` walks every zone of a snapshot once and records where each
//! card sits. It backs both card lookup (`locate`) and the conservation
//! check: every one of the 52 cards must appear exactly once across the
//! deck, scrap pile, both hands and both fields (attached Knights
//! included).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardId, CardRegistry};
use crate::core::{GameState, Seat};

/// Where a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Scrap,
    Hand(Seat),
    /// Top-level on the given side's field.
    Field(Seat),
    /// A Knight attached to a point card on the given side's field.
    Attached(Seat),
}

/// A conservation defect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConservationError {
    #[error("{card} appears in both {first:?} and {second:?}")]
    Duplicate {
        card: CardId,
        first: Zone,
        second: Zone,
    },

    #[error("{0} is missing from every zone")]
    Missing(CardId),

    #[error("{0} is not part of the catalog")]
    Unknown(CardId),
}

/// Location of every card in a snapshot.
#[derive(Clone, Debug, Default)]
pub struct Census {
    locations: FxHashMap<CardId, Zone>,
    duplicate: Option<ConservationError>,
}

impl Census {
    /// Walk all zones of `state`.
    #[must_use]
    pub fn take(state: &GameState) -> Self {
        let mut census = Self::default();

        for card in state.deck.iter() {
            census.record(card.id, Zone::Deck);
        }
        for card in state.scrap.iter() {
            census.record(card.id, Zone::Scrap);
        }
        for seat in Seat::ALL {
            let player = state.player(seat);
            for card in player.hand.iter() {
                census.record(card.id, Zone::Hand(seat));
            }
            for field_card in player.field.iter() {
                census.record(field_card.card.id, Zone::Field(seat));
                for knight in field_card.knights.iter() {
                    census.record(knight.card.id, Zone::Attached(seat));
                }
            }
        }

        census
    }

    fn record(&mut self, card: CardId, zone: Zone) {
        if let Some(first) = self.locations.insert(card, zone) {
            self.duplicate.get_or_insert(ConservationError::Duplicate {
                card,
                first,
                second: zone,
            });
        }
    }

    /// Where is `card`?
    #[must_use]
    pub fn locate(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Number of distinct cards seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Cards found in `zone`.
    pub fn in_zone(&self, zone: Zone) -> impl Iterator<Item = CardId> + '_ {
        self.locations
            .iter()
            .filter(move |(_, &z)| z == zone)
            .map(|(&id, _)| id)
    }

    /// Check the census against the catalog.
    pub fn verify(&self, registry: &CardRegistry) -> Result<(), ConservationError> {
        if let Some(err) = self.duplicate {
            return Err(err);
        }

        if let Some(&unknown) = self.locations.keys().find(|id| !registry.contains(**id)) {
            return Err(ConservationError::Unknown(unknown));
        }

        match registry.iter().find(|card| !self.locations.contains_key(&card.id)) {
            Some(card) => Err(ConservationError::Missing(card.id)),
            None => Ok(()),
        }
    }
}

/// Verify that every card of the standard catalog is in exactly one zone.
///
/// ```
/// use rust_cuttle::core::GameState;
/// use rust_cuttle::zones::verify_conservation;
///
/// let state = GameState::unshuffled(["Ada", "Bo"]);
/// assert!(verify_conservation(&state).is_ok());
/// ```
pub fn verify_conservation(state: &GameState) -> Result<(), ConservationError> {
    Census::take(state).verify(&CardRegistry::standard())
}

/// Where is `card` in `state`?
#[must_use]
pub fn locate(state: &GameState, card: CardId) -> Option<Zone> {
    Census::take(state).locate(card)
}
