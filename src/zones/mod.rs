//! Card zones and the conservation census.
//!
//! ## Key Types
//!
//! - `Zone`: deck, scrap, a seat's hand, a seat's field, or attached to a
//!   point card as a Knight
//! - `Census`: one-pass map from card to zone
//! - `ConservationError`: a card lost, duplicated or foreign
//!
//! The zones themselves are plain fields of `GameState`; this module only
//! observes them.

pub mod census;

pub use census::{locate, verify_conservation, Census, ConservationError, Zone};
