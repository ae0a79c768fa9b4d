//! Card model: the 52-card catalog.
//!
//! ## Key Types
//!
//! - `Rank`: thirteen ranks, three of them face ranks (Knight, Mage, King)
//! - `Faction`: four factions, used only for the scuttle tie-break
//! - `Card`: immutable (rank, faction) value with a dense `CardId`
//! - `CardRegistry`: catalog lookup and the unshuffled deck
//!
//! Cards are never created or destroyed during a match, only moved between
//! the deck, hands, fields and the scrap pile.

pub mod definition;
pub mod registry;

pub use definition::{Card, CardId, Faction, Rank};
pub use registry::CardRegistry;
